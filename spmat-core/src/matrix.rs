//! Sparse matrix facade
//!
//! The facade owns the row index and exposes the full public contract:
//! construction with fixed dimensions, cell mutation/query, and the derived
//! arithmetic and linear-algebra operations (implemented in [`crate::ops`]
//! and [`crate::linalg`]).

use crate::storage::{Row, RowIndex};
use crate::traits::{SparseAccess, SparseEntries};
use crate::{validation, Result, EPSILON};

/// In-memory sparse matrix with exact-zero elimination
///
/// Dimensions are fixed at construction. Only cells with a value magnitude
/// at or above [`EPSILON`] are stored; rows are created lazily on first
/// nonzero insert and removed when their last element goes away. Cloning
/// performs a full deep copy, so independently held matrices never alias.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    index: RowIndex,
}

impl SparseMatrix {
    /// Create an all-zero matrix with the given dimensions
    ///
    /// Fails with `InvalidArgument` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        validation::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            index: RowIndex::new(),
        })
    }

    /// Create a matrix from (row, col, value) triplets
    ///
    /// Sub-threshold values are skipped; a later triplet for the same cell
    /// overwrites an earlier one.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, f64)],
    ) -> Result<Self> {
        let mut matrix = Self::new(rows, cols)?;
        for &(row, col, value) in triplets {
            matrix.insert(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as (rows, cols)
    pub const fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored elements
    pub fn nnz(&self) -> usize {
        self.index.nnz()
    }

    /// Set the value of a cell
    ///
    /// A sub-threshold value deletes any stored element at that cell; if
    /// that was the last element of its row, the row is purged. Fails with
    /// `IndexOutOfRange` when (row, col) is outside the declared bounds.
    pub fn insert(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        validation::check_index(row, col, self.rows, self.cols)?;

        if value.abs() < EPSILON {
            if let Some(chain) = self.index.locate_mut(row) {
                chain.remove(col);
                if chain.is_empty() {
                    self.index.purge_empty();
                }
            }
            return Ok(());
        }

        self.index.locate_or_create(row).upsert(col, value);
        Ok(())
    }

    /// Read the value of a cell
    ///
    /// Returns exactly `0.0` for any in-bounds cell with no stored element.
    /// Fails with `IndexOutOfRange` when (row, col) is outside the declared
    /// bounds, which is distinct from the absent-means-zero case.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        validation::check_index(row, col, self.rows, self.cols)?;
        Ok(self
            .index
            .locate(row)
            .map_or(0.0, |chain| chain.lookup(col)))
    }

    /// Iterate stored cells as (row, col, value) in ascending
    /// (row, column) order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.index.rows().iter().flat_map(|chain| {
            chain
                .elements()
                .iter()
                .map(move |e| (chain.index(), e.col, e.value))
        })
    }

    /// Stored row chains in ascending row order
    pub(crate) fn chains(&self) -> &[Row] {
        self.index.rows()
    }
}

impl SparseAccess for SparseMatrix {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.index.nnz()
    }

    fn value_at(&self, row: usize, col: usize) -> Result<f64> {
        self.get(row, col)
    }
}

impl SparseEntries for SparseMatrix {
    fn row_entries(&self, row: usize) -> Vec<(usize, f64)> {
        self.index.locate(row).map_or_else(Vec::new, |chain| {
            chain.elements().iter().map(|e| (e.col, e.value)).collect()
        })
    }

    fn entries(&self) -> Vec<(usize, usize, f64)> {
        self.iter().collect()
    }
}
