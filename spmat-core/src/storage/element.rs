//! Element record: the atomic stored unit of a sparse matrix

/// A stored (column, value) pair
///
/// An element only exists while its value magnitude is at or above
/// [`EPSILON`](crate::EPSILON); sub-threshold values are never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// Column index of this element
    pub col: usize,
    /// Value stored at this position
    pub value: f64,
}

impl Element {
    /// Create a new element
    pub const fn new(col: usize, value: f64) -> Self {
        Self { col, value }
    }
}
