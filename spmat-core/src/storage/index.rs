//! Row index: the ordered sequence of nonempty rows owned by a matrix

use crate::storage::Row;

/// Ordered collection of row chains keyed by row index
///
/// Rows are kept strictly ascending by row index with each index stored at
/// most once, regardless of the order callers create them in. Row bounds are
/// enforced by the facade before any call lands here.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowIndex {
    rows: Vec<Row>,
}

impl RowIndex {
    /// Create an empty row index (the all-zero matrix)
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Stored rows in ascending row order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Read-only lookup of a row chain
    pub fn locate(&self, row: usize) -> Option<&Row> {
        match self.rows.binary_search_by_key(&row, Row::index) {
            Ok(pos) => Some(&self.rows[pos]),
            Err(_) => None,
        }
    }

    /// Mutable lookup of a row chain
    pub fn locate_mut(&mut self, row: usize) -> Option<&mut Row> {
        match self.rows.binary_search_by_key(&row, Row::index) {
            Ok(pos) => Some(&mut self.rows[pos]),
            Err(_) => None,
        }
    }

    /// Find a row chain, creating an empty one at its ascending position
    /// if absent
    pub fn locate_or_create(&mut self, row: usize) -> &mut Row {
        let pos = match self.rows.binary_search_by_key(&row, Row::index) {
            Ok(pos) => pos,
            Err(pos) => {
                self.rows.insert(pos, Row::new(row));
                pos
            }
        };
        &mut self.rows[pos]
    }

    /// Remove every row whose element sequence is empty
    pub fn purge_empty(&mut self) {
        self.rows.retain(|row| !row.is_empty());
    }

    /// Total number of stored elements across all rows
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }
}
