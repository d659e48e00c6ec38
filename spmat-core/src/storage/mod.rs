//! Ordered owned storage for sparse matrix data
//!
//! This module contains the storage layers the matrix facade composes: the
//! element record, the per-row chain of elements, and the row index keyed by
//! row number. All sequences are strictly ascending and exclusively owned,
//! so duplication is always a deep copy.

pub mod element;
pub mod index;
pub mod row;

pub use element::Element;
pub use index::RowIndex;
pub use row::Row;
