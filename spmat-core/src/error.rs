//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    /// Invalid argument (non-positive dimensions, zero-magnitude scalar divisor)
    InvalidArgument(&'static str),
    /// Row or column index outside the declared bounds
    IndexOutOfRange {
        /// Requested row index
        row: usize,
        /// Requested column index
        col: usize,
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
    },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        /// Operation that rejected the shapes
        op: &'static str,
        /// Dimensions of the left operand as (rows, cols)
        left: (usize, usize),
        /// Dimensions of the right operand as (rows, cols)
        right: (usize, usize),
    },
    /// Inverse requested on a numerically singular matrix
    SingularMatrix {
        /// Determinant that fell below the zero threshold
        determinant: f64,
    },
    /// Determinant or inverse requested for an unsupported order
    UnsupportedSize {
        /// Matrix order that was requested
        order: usize,
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidArgument(reason) => {
                write!(f, "invalid argument: {reason}")
            }
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of range for {rows}x{cols} matrix"
                )
            }
            MatrixError::DimensionMismatch { op, left, right } => {
                write!(
                    f,
                    "dimension mismatch for {op}: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrixError::SingularMatrix { determinant } => {
                write!(
                    f,
                    "matrix is singular (determinant {determinant}), inverse does not exist"
                )
            }
            MatrixError::UnsupportedSize { order } => {
                write!(
                    f,
                    "order {order} not supported, determinant and inverse cover orders 1-3"
                )
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
