//! spmat - Sparse Matrix Calculator
//!
//! Thin consumers over the `spmat-core` engine: the two read-only rendering
//! contracts (dense grid and sparse triple dump) and the menu-driven
//! calculator binary. All matrix semantics live in the core crate; this
//! crate only formats results and drives the public contract.

// Re-export the core surface so consumers need a single dependency
pub use spmat_core::{
    // Facade and storage
    SparseMatrix, Element, Row, RowIndex,
    // Access traits
    SparseAccess, SparseEntries,
    // Error handling
    MatrixError, Result,
    // Zero-suppression threshold
    EPSILON,
};

pub mod render;

pub use render::{render_dense, render_sparse};
