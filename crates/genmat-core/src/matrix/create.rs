//! Matrix constructors.
//!
//! Every constructor validates the shape first; on failure no matrix is
//! produced.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::{Matrix, checked_len};

impl<T: Scalar> Matrix<T> {
    /// Create a `rows × cols` matrix filled with zeros.
    ///
    /// `0 × 0` yields the empty matrix; exactly one zero dimension is
    /// rejected with [`CoreError::InvalidShape`].
    ///
    /// ```
    /// # use genmat_core::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// assert!(Matrix::<f64>::zeros(0, 3).is_err());
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::full(rows, cols, T::zero())
    }

    /// Create a `rows × cols` matrix with every element set to `value`.
    pub fn full(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    /// Create a matrix from row-major data.
    ///
    /// ```
    /// # use genmat_core::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(*m.get(1, 0).unwrap(), 3);
    /// assert!(Matrix::from_vec(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                reason: "data length does not equal rows * cols",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a row-major slice (copies the data).
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                reason: "data length does not equal rows * cols",
            });
        }
        Ok(Self {
            data: data.to_vec(),
            rows,
            cols,
        })
    }

    /// Create a matrix from a list of rows. All rows must have the same
    /// length; an empty list gives the empty matrix.
    ///
    /// ```
    /// # use genmat_core::Matrix;
    /// let m = Matrix::<i32>::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let len = checked_len(n_rows, n_cols)?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(CoreError::InvalidShape {
                    rows: n_rows,
                    cols: n_cols,
                    reason: "rows have different lengths",
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Create the `n × n` identity matrix. `identity(0)` is the empty matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }
}
