//! Arithmetic kernels
//!
//! Every operation reads its operands immutably and builds a brand-new
//! result through the public insert/get contract, so the ordered-storage
//! and zero-suppression invariants hold on the output by construction.

use crate::matrix::SparseMatrix;
use crate::{validation, MatrixError, Result, EPSILON};

impl SparseMatrix {
    /// Element-wise sum of two matrices of identical dimensions
    ///
    /// The result is built by inserting every element of `self`, then
    /// merging every element of `other` onto the current result value.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        validation::check_same_shape("add", self.dims(), other.dims())?;

        let mut result = SparseMatrix::new(self.rows(), self.cols())?;
        for (row, col, value) in self.iter() {
            result.insert(row, col, value)?;
        }
        for (row, col, value) in other.iter() {
            let current = result.get(row, col)?;
            result.insert(row, col, current + value)?;
        }
        Ok(result)
    }

    /// Element-wise difference of two matrices of identical dimensions
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        validation::check_same_shape("subtract", self.dims(), other.dims())?;

        let mut result = SparseMatrix::new(self.rows(), self.cols())?;
        for (row, col, value) in self.iter() {
            result.insert(row, col, value)?;
        }
        for (row, col, value) in other.iter() {
            let current = result.get(row, col)?;
            result.insert(row, col, current - value)?;
        }
        Ok(result)
    }

    /// Multiply every element by a scalar
    ///
    /// A sub-threshold scalar yields the all-zero matrix of the same
    /// dimensions. Scaled values that fall below the threshold are
    /// suppressed rather than stored as near-zero.
    pub fn scalar_multiply(&self, scalar: f64) -> Result<SparseMatrix> {
        let mut result = SparseMatrix::new(self.rows(), self.cols())?;

        if scalar.abs() < EPSILON {
            return Ok(result);
        }

        for (row, col, value) in self.iter() {
            let scaled = value * scalar;
            if scaled.abs() >= EPSILON {
                result.insert(row, col, scaled)?;
            }
        }
        Ok(result)
    }

    /// Divide every element by a scalar
    ///
    /// Fails with `InvalidArgument` when the divisor magnitude is below the
    /// zero threshold; otherwise delegates to
    /// [`scalar_multiply`](Self::scalar_multiply) with the reciprocal.
    pub fn scalar_divide(&self, scalar: f64) -> Result<SparseMatrix> {
        if scalar.abs() < EPSILON {
            return Err(MatrixError::InvalidArgument("scalar divisor is zero"));
        }
        self.scalar_multiply(1.0 / scalar)
    }

    /// Matrix product `self × other`
    ///
    /// Requires `self.cols() == other.rows()`. For each stored row of
    /// `self`, every output column is scanned densely; the row's stored
    /// elements drive the dot product and terms with a sub-threshold read
    /// from `other` are skipped. Sums below the threshold are not stored.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        validation::check_multiply_shape(self.dims(), other.dims())?;

        let mut result = SparseMatrix::new(self.rows(), other.cols())?;
        for chain in self.chains() {
            let row = chain.index();
            for col in 0..other.cols() {
                let mut sum = 0.0;
                for element in chain.elements() {
                    let rhs = other.get(element.col, col)?;
                    if rhs.abs() >= EPSILON {
                        sum += element.value * rhs;
                    }
                }
                if sum.abs() >= EPSILON {
                    result.insert(row, col, sum)?;
                }
            }
        }
        Ok(result)
    }

    /// Transpose, swapping dimensions
    ///
    /// Inserts `(col, row, value)` for every stored `(row, col, value)` in
    /// input traversal order; the ordered-insert contract of the storage
    /// layer restores row-major order on the output.
    pub fn transpose(&self) -> Result<SparseMatrix> {
        let mut result = SparseMatrix::new(self.cols(), self.rows())?;
        for (row, col, value) in self.iter() {
            result.insert(col, row, value)?;
        }
        Ok(result)
    }

    /// Total number of stored elements
    pub fn count_non_zero(&self) -> usize {
        self.nnz()
    }
}
