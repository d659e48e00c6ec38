//! Access traits for sparse matrix consumers
//!
//! These are pure interfaces: renderers and the linear-algebra kernels are
//! written against them rather than against the concrete facade, so any
//! storage that honors the contract can sit behind them.

use crate::Result;

/// Core read-only sparse matrix access
pub trait SparseAccess {
    /// Matrix dimensions as (rows, cols)
    fn dims(&self) -> (usize, usize);

    /// Number of stored elements
    fn nnz(&self) -> usize;

    /// Value of a cell
    ///
    /// Returns exactly `0.0` for an in-bounds cell with no stored element
    /// and fails with an index error outside the declared bounds.
    fn value_at(&self, row: usize, col: usize) -> Result<f64>;
}

/// Extension trait for ordered traversal of stored cells
pub trait SparseEntries: SparseAccess {
    /// Stored (col, value) pairs of one row in ascending column order
    ///
    /// Returns an empty vector for a row with no stored elements.
    fn row_entries(&self, row: usize) -> Vec<(usize, f64)>;

    /// All stored (row, col, value) cells in ascending (row, column) order
    fn entries(&self) -> Vec<(usize, usize, f64)>;
}
