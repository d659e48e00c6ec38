//! Small dense linear algebra
//!
//! Closed-form determinant and inverse for orders 1-3, written against the
//! [`SparseAccess`] element accessor rather than the storage internals.
//! Order 4 and above is a deliberate scope limit, reported as
//! `UnsupportedSize`.

use crate::matrix::SparseMatrix;
use crate::traits::SparseAccess;
use crate::{validation, MatrixError, Result, EPSILON};

/// Determinant of a square matrix of order 1-3
///
/// Order 2 is `ad - bc`; order 3 is the cofactor expansion along the first
/// row.
pub fn determinant<M: SparseAccess>(matrix: &M) -> Result<f64> {
    let order = validation::check_square(matrix.dims())?;

    match order {
        1 => matrix.value_at(0, 0),
        2 => {
            let a = matrix.value_at(0, 0)?;
            let b = matrix.value_at(0, 1)?;
            let c = matrix.value_at(1, 0)?;
            let d = matrix.value_at(1, 1)?;
            Ok(a * d - b * c)
        }
        3 => {
            let a = matrix.value_at(0, 0)?;
            let b = matrix.value_at(0, 1)?;
            let c = matrix.value_at(0, 2)?;
            let d = matrix.value_at(1, 0)?;
            let e = matrix.value_at(1, 1)?;
            let f = matrix.value_at(1, 2)?;
            let g = matrix.value_at(2, 0)?;
            let h = matrix.value_at(2, 1)?;
            let i = matrix.value_at(2, 2)?;
            Ok(a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g))
        }
        order => Err(MatrixError::UnsupportedSize { order }),
    }
}

/// Inverse of a square matrix of order 1-3
///
/// Fails with `SingularMatrix` when the determinant magnitude is below the
/// zero threshold. Order 3 builds the full cofactor matrix, transposes it
/// into the adjugate, and divides by the determinant, inserting each of the
/// nine result cells individually.
pub fn inverse<M: SparseAccess>(matrix: &M) -> Result<SparseMatrix> {
    let order = validation::check_square(matrix.dims())?;
    if order > 3 {
        return Err(MatrixError::UnsupportedSize { order });
    }

    let det = determinant(matrix)?;
    if det.abs() < EPSILON {
        return Err(MatrixError::SingularMatrix { determinant: det });
    }

    let mut result = SparseMatrix::new(order, order)?;
    match order {
        1 => {
            result.insert(0, 0, 1.0 / matrix.value_at(0, 0)?)?;
        }
        2 => {
            result.insert(0, 0, matrix.value_at(1, 1)? / det)?;
            result.insert(0, 1, -matrix.value_at(0, 1)? / det)?;
            result.insert(1, 0, -matrix.value_at(1, 0)? / det)?;
            result.insert(1, 1, matrix.value_at(0, 0)? / det)?;
        }
        _ => {
            let a = matrix.value_at(0, 0)?;
            let b = matrix.value_at(0, 1)?;
            let c = matrix.value_at(0, 2)?;
            let d = matrix.value_at(1, 0)?;
            let e = matrix.value_at(1, 1)?;
            let f = matrix.value_at(1, 2)?;
            let g = matrix.value_at(2, 0)?;
            let h = matrix.value_at(2, 1)?;
            let i = matrix.value_at(2, 2)?;

            // Cofactor matrix, row by row
            let c00 = e * i - f * h;
            let c01 = -(d * i - f * g);
            let c02 = d * h - e * g;
            let c10 = -(b * i - c * h);
            let c11 = a * i - c * g;
            let c12 = -(a * h - b * g);
            let c20 = b * f - c * e;
            let c21 = -(a * f - c * d);
            let c22 = a * e - b * d;

            // Adjugate is the transposed cofactor matrix
            result.insert(0, 0, c00 / det)?;
            result.insert(0, 1, c10 / det)?;
            result.insert(0, 2, c20 / det)?;
            result.insert(1, 0, c01 / det)?;
            result.insert(1, 1, c11 / det)?;
            result.insert(1, 2, c21 / det)?;
            result.insert(2, 0, c02 / det)?;
            result.insert(2, 1, c12 / det)?;
            result.insert(2, 2, c22 / det)?;
        }
    }
    Ok(result)
}

impl SparseMatrix {
    /// Determinant of a square matrix of order 1-3, see [`determinant`]
    pub fn determinant(&self) -> Result<f64> {
        determinant(self)
    }

    /// Inverse of a square matrix of order 1-3, see [`inverse`]
    pub fn inverse(&self) -> Result<SparseMatrix> {
        inverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: usize, cols: usize, cells: &[(usize, usize, f64)]) -> SparseMatrix {
        SparseMatrix::from_triplets(rows, cols, cells).unwrap()
    }

    #[test]
    fn test_determinant_order_1() {
        let m = matrix(1, 1, &[(0, 0, 6.5)]);
        assert_eq!(m.determinant(), Ok(6.5));
    }

    #[test]
    fn test_determinant_order_2() {
        let m = matrix(2, 2, &[(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)]);
        assert_eq!(m.determinant(), Ok(-2.0));
    }

    #[test]
    fn test_determinant_order_3() {
        let m = matrix(
            3,
            3,
            &[
                (0, 0, 2.0),
                (0, 1, -3.0),
                (0, 2, 1.0),
                (1, 0, 2.0),
                (1, 1, 0.0),
                (1, 2, -1.0),
                (2, 0, 1.0),
                (2, 1, 4.0),
                (2, 2, 5.0),
            ],
        );
        // 2*(0*5 - (-1)*4) + 3*(2*5 - (-1)*1) + 1*(2*4 - 0*1)
        assert_eq!(m.determinant(), Ok(49.0));
    }

    #[test]
    fn test_determinant_order_4_is_unsupported() {
        let m = matrix(4, 4, &[(0, 0, 1.0)]);
        assert_eq!(
            m.determinant(),
            Err(MatrixError::UnsupportedSize { order: 4 })
        );
    }

    #[test]
    fn test_determinant_requires_square() {
        let m = matrix(2, 3, &[(0, 0, 1.0)]);
        assert_eq!(
            m.determinant(),
            Err(MatrixError::InvalidArgument("matrix must be square"))
        );
    }

    #[test]
    fn test_inverse_order_1() {
        let m = matrix(1, 1, &[(0, 0, 4.0)]);
        let inv = m.inverse().unwrap();
        assert_eq!(inv.get(0, 0), Ok(0.25));
    }

    #[test]
    fn test_inverse_order_2_times_original_is_identity() {
        let m = matrix(2, 2, &[(0, 0, 1.0), (0, 1, 2.0), (1, 0, 3.0), (1, 1, 4.0)]);
        let inv = m.inverse().unwrap();

        let product = m.multiply(&inv).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                let expected = if row == col { 1.0 } else { 0.0 };
                let got = product.get(row, col).unwrap();
                assert!((got - expected).abs() < EPSILON, "cell ({row}, {col}): {got}");
            }
        }
    }

    #[test]
    fn test_inverse_order_3_times_original_is_identity() {
        let m = matrix(
            3,
            3,
            &[
                (0, 0, 2.0),
                (0, 1, -3.0),
                (0, 2, 1.0),
                (1, 0, 2.0),
                (1, 2, -1.0),
                (2, 0, 1.0),
                (2, 1, 4.0),
                (2, 2, 5.0),
            ],
        );
        let inv = m.inverse().unwrap();

        let product = m.multiply(&inv).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                let got = product.get(row, col).unwrap();
                assert!(
                    (got - expected).abs() < 1e-9,
                    "cell ({row}, {col}): {got}"
                );
            }
        }
    }

    #[test]
    fn test_inverse_of_singular_matrix_fails() {
        // Second row is a multiple of the first
        let m = matrix(2, 2, &[(0, 0, 1.0), (0, 1, 2.0), (1, 0, 2.0), (1, 1, 4.0)]);
        assert_eq!(
            m.inverse(),
            Err(MatrixError::SingularMatrix { determinant: 0.0 })
        );
    }

    #[test]
    fn test_inverse_order_4_is_unsupported() {
        let m = matrix(4, 4, &[(0, 0, 1.0)]);
        assert_eq!(m.inverse(), Err(MatrixError::UnsupportedSize { order: 4 }));
    }
}
