//! spmat-core - Sparse Matrix Storage and Arithmetic
//!
//! This crate provides the core engine of the sparse matrix calculator:
//! ordered owned storage with exact-zero elimination, a matrix facade with
//! arithmetic kernels, and closed-form determinant/inverse for orders 1-3.
//!
//! ## Architecture
//!
//! The workspace follows a clean core/consumer separation:
//!
//! - **spmat-core**: storage, kernels, traits, and validation (no I/O)
//! - **spmat**: rendering contracts and the menu-driven calculator binary
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat_core::SparseMatrix;
//!
//! fn example() -> spmat_core::Result<()> {
//!     let mut m = SparseMatrix::new(2, 2)?;
//!     m.insert(0, 0, 1.0)?;
//!     m.insert(1, 1, 4.0)?;
//!
//!     let doubled = m.scalar_multiply(2.0)?;
//!     assert_eq!(doubled.get(1, 1)?, 8.0);
//!     assert_eq!(doubled.nnz(), 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod storage;
pub mod traits;
pub mod validation;

pub use error::{MatrixError, Result};
pub use matrix::SparseMatrix;
pub use storage::{Element, Row, RowIndex};
pub use traits::{SparseAccess, SparseEntries};

/// Zero-suppression threshold
///
/// Any value with absolute magnitude below this is treated as exactly zero
/// and is never stored.
pub const EPSILON: f64 = 1e-10;
