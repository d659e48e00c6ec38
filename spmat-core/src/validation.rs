//! Contract checks for sparse matrix operations
//!
//! This module contains pure validation functions with no I/O dependencies.
//! Every fallible facade operation funnels its preconditions through here so
//! violations surface as tagged errors at the point of the call.

use crate::{MatrixError, Result};

/// Validate that requested matrix dimensions are positive
pub const fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidArgument(
            "matrix dimensions must be positive",
        ));
    }
    Ok(())
}

/// Validate that a cell position is inside the declared bounds
pub const fn check_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Validate that two operands share the same shape (add, subtract)
pub const fn check_same_shape(
    op: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(MatrixError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

/// Validate that left columns match right rows (multiply)
pub const fn check_multiply_shape(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            left,
            right,
        });
    }
    Ok(())
}

/// Validate that a matrix is square, returning its order
pub const fn check_square(dims: (usize, usize)) -> Result<usize> {
    if dims.0 != dims.1 {
        return Err(MatrixError::InvalidArgument("matrix must be square"));
    }
    Ok(dims.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimensions() {
        assert_eq!(check_dimensions(1, 1), Ok(()));
        assert_eq!(check_dimensions(100, 3), Ok(()));

        assert_eq!(
            check_dimensions(0, 3),
            Err(MatrixError::InvalidArgument(
                "matrix dimensions must be positive"
            ))
        );
        assert_eq!(
            check_dimensions(3, 0),
            Err(MatrixError::InvalidArgument(
                "matrix dimensions must be positive"
            ))
        );
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 0, 2, 2), Ok(()));
        assert_eq!(check_index(1, 1, 2, 2), Ok(()));

        assert_eq!(
            check_index(2, 0, 2, 2),
            Err(MatrixError::IndexOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert_eq!(
            check_index(0, 5, 2, 2),
            Err(MatrixError::IndexOutOfRange {
                row: 0,
                col: 5,
                rows: 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_check_same_shape() {
        assert_eq!(check_same_shape("add", (2, 3), (2, 3)), Ok(()));
        assert_eq!(
            check_same_shape("subtract", (2, 3), (3, 2)),
            Err(MatrixError::DimensionMismatch {
                op: "subtract",
                left: (2, 3),
                right: (3, 2)
            })
        );
    }

    #[test]
    fn test_check_multiply_shape() {
        // Inner dimensions must agree, outer ones are free
        assert_eq!(check_multiply_shape((2, 3), (3, 5)), Ok(()));
        assert_eq!(
            check_multiply_shape((2, 3), (2, 3)),
            Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: (2, 3),
                right: (2, 3)
            })
        );
    }

    #[test]
    fn test_check_square() {
        assert_eq!(check_square((3, 3)), Ok(3));
        assert_eq!(
            check_square((2, 3)),
            Err(MatrixError::InvalidArgument("matrix must be square"))
        );
    }
}
