//! Dense, dimension-checked 2-D matrix.
//!
//! [`Matrix`] stores its elements contiguously in row-major order
//! (`index = row * cols + col`) and is generic over any [`Scalar`]. A matrix
//! is either fully empty (0×0) or has both dimensions positive; no other
//! shape can be constructed.

mod create;
mod display;
mod ops;

use core::slice;

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A dense `rows × cols` matrix.
///
/// Cloning performs a deep copy. [`Matrix::take`] transfers ownership of the
/// storage and leaves the source as the empty 0×0 matrix.
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of stored elements (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this is the empty 0×0 matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Move the contents out, leaving `self` as the empty 0×0 matrix.
    ///
    /// The emptied value is only good for reassignment; any indexed access
    /// on it fails with [`CoreError::OutOfRange`].
    ///
    /// ```
    /// # use genmat_core::Matrix;
    /// let mut a = Matrix::from_vec(1, 2, vec![1, 2]).unwrap();
    /// let b = a.take();
    /// assert_eq!(b.shape(), (1, 2));
    /// assert_eq!(a.shape(), (0, 0));
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::OutOfRange {
                row,
                col,
                shape: self.shape(),
            });
        }
        Ok(row * self.cols + col)
    }

    /// Get a reference to the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let flat = self.flat_index(row, col)?;
        Ok(&self.data[flat])
    }

    /// Get a mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let flat = self.flat_index(row, col)?;
        Ok(&mut self.data[flat])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(CoreError::OutOfRange {
                row,
                col: 0,
                shape: self.shape(),
            });
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in row-major order.
    ///
    /// The iterator borrows the matrix immutably; calling `iter` again starts
    /// a fresh, independent pass.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// The empty 0×0 matrix.
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Reject shapes where exactly one dimension is zero and compute the element
/// count.
pub(crate) fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if (rows == 0) != (cols == 0) {
        return Err(CoreError::InvalidShape {
            rows,
            cols,
            reason: "exactly one of rows/cols is zero",
        });
    }
    rows.checked_mul(cols).ok_or(CoreError::InvalidShape {
        rows,
        cols,
        reason: "rows * cols overflows usize",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(*m.get(0, 0).unwrap(), 1);
        assert_eq!(*m.get(1, 2).unwrap(), 6);
        m.set(0, 1, 99).unwrap();
        assert_eq!(*m.get(0, 1).unwrap(), 99);
        *m.get_mut(1, 0).unwrap() = -4;
        assert_eq!(m.as_slice(), &[1, 99, 3, -4, 5, 6]);
    }

    #[test]
    fn test_get_out_of_range() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(
            m.get(2, 0),
            Err(CoreError::OutOfRange {
                row: 2,
                col: 0,
                shape: (2, 2)
            })
        );
        assert!(m.get(0, 2).is_err());
    }

    #[test]
    fn test_set_out_of_range_leaves_matrix_unchanged() {
        let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert!(m.set(5, 5, 0).is_err());
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_row() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.row(1).unwrap(), &[4, 5, 6]);
        assert!(m.row(2).is_err());
    }

    #[test]
    fn test_iter_is_restartable() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let first: Vec<i32> = m.iter().copied().collect();
        let second: Vec<i32> = (&m).into_iter().copied().collect();
        assert_eq!(first, vec![1, 2, 3, 4]);
        assert_eq!(first, second);

        let mut total = 0;
        for v in &m {
            total += v;
        }
        assert_eq!(total, 10);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = Matrix::from_vec(1, 2, vec![1.0, 2.0]).unwrap();
        let mut b = a.clone();
        b.set(0, 0, 10.0).unwrap();
        assert_eq!(*a.get(0, 0).unwrap(), 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut a = Matrix::from_vec(2, 1, vec![7, 8]).unwrap();
        let b = a.take();
        assert_eq!(b.as_slice(), &[7, 8]);
        assert!(a.is_empty());
        assert_eq!(a.shape(), (0, 0));
        assert!(a.get(0, 0).is_err());

        a = b.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_eq_checks_shape() {
        let a = Matrix::from_vec(1, 4, vec![1, 2, 3, 4]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        let c = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_ne!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_checked_len() {
        assert_eq!(checked_len(0, 0).unwrap(), 0);
        assert_eq!(checked_len(3, 4).unwrap(), 12);
        assert!(checked_len(0, 3).is_err());
        assert!(checked_len(3, 0).is_err());
        assert!(checked_len(usize::MAX, 2).is_err());
    }
}
