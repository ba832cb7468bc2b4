//! Dense row-major `f32` matrices and the textbook multiplier.
//!
//! - `naive_ijk`: the i-j-k slice kernel that does the actual arithmetic

pub mod naive_ijk;

use crate::error::{MatrixError, Result};
use naive_ijk::matmul_naive_ijk;

/// A dense `rows × cols` matrix of `f32`, stored row-major.
///
/// The empty matrix has zero rows and zero columns. Every other matrix is
/// rectangular: `data.len() == rows * cols` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// The matrix with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// The `n × n` identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wrap a row-major buffer.
    ///
    /// Returns `None` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        if data.is_empty() {
            return Some(Self::empty());
        }
        Some(Self { rows, cols, data })
    }

    /// Build from nested rows. Returns `None` if the rows are ragged.
    ///
    /// ```
    /// use matbench::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 2));
    /// assert!(Matrix::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_none());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let n = rows.len();
        Self::from_vec(n, cols, rows.into_iter().flatten().collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major backing slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Element at `(i, j)`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Iterate over rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f32]> {
        // chunks_exact(0) panics, and the empty matrix has no rows anyway
        self.data.chunks_exact(self.cols.max(1))
    }

    /// `self × rhs`. See [`multiply`].
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        multiply(self, rhs)
    }
}

/// Matrix multiply: returns A × B.
///
/// Checks, in order, that A is non-empty, that B is non-empty and that the
/// column count of A equals the row count of B. Then runs the i-j-k
/// kernel with plain `f32` accumulation. No fast paths.
///
/// ```
/// use matbench::{Matrix, multiply};
///
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.is_empty() {
        return Err(MatrixError::EmptyLeft);
    }
    if b.is_empty() {
        return Err(MatrixError::EmptyRight);
    }
    if a.cols != b.rows {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.cols,
            right_rows: b.rows,
        });
    }

    let (m, n, k) = (a.rows, b.cols, a.cols);
    let mut c = Matrix::zeros(m, n);
    matmul_naive_ijk(&a.data, &b.data, &mut c.data, m, n, k);
    Ok(c)
}
