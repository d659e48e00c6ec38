//! Row chain: the ordered element sequence owned by one row

use crate::storage::Element;
use crate::EPSILON;

/// One row of a sparse matrix
///
/// Elements are kept strictly ascending by column with each column stored at
/// most once. The chain does not know the matrix column count; bounds are
/// enforced by the facade before any call lands here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    row: usize,
    elements: Vec<Element>,
}

impl Row {
    /// Create an empty row chain for the given row index
    pub const fn new(row: usize) -> Self {
        Self {
            row,
            elements: Vec::new(),
        }
    }

    /// Row index this chain belongs to
    pub const fn index(&self) -> usize {
        self.row
    }

    /// Stored elements in ascending column order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the chain holds no elements
    ///
    /// An empty chain is not a valid persisted entity; the row index purges
    /// it as soon as the last element is removed.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Insert or overwrite the value at a column
    ///
    /// A sub-threshold value is equivalent to [`remove`](Self::remove).
    /// Otherwise the element is placed at its ascending position, or the
    /// existing element at that column is overwritten in place.
    pub fn upsert(&mut self, col: usize, value: f64) {
        if value.abs() < EPSILON {
            self.remove(col);
            return;
        }

        match self.elements.binary_search_by_key(&col, |e| e.col) {
            Ok(pos) => self.elements[pos].value = value,
            Err(pos) => self.elements.insert(pos, Element::new(col, value)),
        }
    }

    /// Value stored at a column, or exactly `0.0` if no element exists there
    ///
    /// Absence is the defined sparse-read semantics, not an error.
    pub fn lookup(&self, col: usize) -> f64 {
        match self.elements.binary_search_by_key(&col, |e| e.col) {
            Ok(pos) => self.elements[pos].value,
            Err(_) => 0.0,
        }
    }

    /// Delete the element at a column if present; no-op otherwise
    pub fn remove(&mut self, col: usize) {
        if let Ok(pos) = self.elements.binary_search_by_key(&col, |e| e.col) {
            self.elements.remove(pos);
        }
    }
}
