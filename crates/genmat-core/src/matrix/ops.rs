//! Arithmetic and structural operations for [`Matrix`].
//!
//! The checked methods (`add`, `sub`, `matmul`, `trace`, ...) return
//! [`Result`] and never modify their operands. The operator impls
//! (`&a + &b`, `&a * &b`, `a += &b`, ...) are sugar over the checked methods
//! and panic with the error message on a shape violation.
//!
//! Only addition and multiplication have a parallel strategy; see
//! [`crate::exec`].

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::exec::{self, ExecPolicy};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(CoreError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    /// Apply `f` element-wise to two matrices of the same shape in a single
    /// pass over the flat storage.
    fn zip_map<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    // ------------------------------------------------------------------
    // Addition / subtraction
    // ------------------------------------------------------------------

    /// Element-wise sum using the process-wide default strategy.
    ///
    /// ```
    /// # use genmat_core::Matrix;
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[6, 8, 10, 12]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.add_with(other, &exec::default_policy())
    }

    /// Element-wise sum with an explicit execution policy.
    ///
    /// # Errors
    ///
    /// [`CoreError::DimensionMismatch`] if the shapes differ;
    /// [`CoreError::InvalidArgument`] for a parallel policy with a zero-sized
    /// dedicated pool; [`CoreError::WorkerPool`] if a dedicated pool cannot
    /// be started.
    pub fn add_with(&self, other: &Matrix<T>, policy: &ExecPolicy) -> Result<Matrix<T>> {
        if !policy.is_parallel() {
            return self.zip_map(other, |a, b| a + b);
        }

        self.check_same_shape(other)?;
        log::debug!("parallel add {}x{}", self.rows, self.cols);

        let cols = self.cols;
        let (lhs, rhs) = (&self.data, &other.data);
        let mut data = vec![T::zero(); self.data.len()];
        exec::for_each_row(&mut data, cols, policy, |r, row| {
            let base = r * cols;
            for (c, out) in row.iter_mut().enumerate() {
                *out = lhs[base + c] + rhs[base + c];
            }
        })?;

        Ok(Matrix {
            data,
            rows: self.rows,
            cols,
        })
    }

    /// Element-wise difference. Always runs on the calling thread.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a - b)
    }

    // ------------------------------------------------------------------
    // Multiplication
    // ------------------------------------------------------------------

    /// Matrix product using the process-wide default strategy.
    ///
    /// ```
    /// # use genmat_core::Matrix;
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
    /// assert_eq!(a.matmul(&b).unwrap().as_slice(), &[19, 22, 43, 50]);
    /// ```
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.matmul_with(other, &exec::default_policy())
    }

    /// Matrix product with an explicit execution policy.
    ///
    /// Each output cell is accumulated from `T::zero()` in ascending `k`
    /// order, so both strategies give bit-identical results even for
    /// floating-point elements.
    ///
    /// # Errors
    ///
    /// [`CoreError::InnerDimensionMismatch`] if `self.cols() != other.rows()`;
    /// [`CoreError::InvalidArgument`] for a parallel policy with a zero-sized
    /// dedicated pool; [`CoreError::WorkerPool`] if a dedicated pool cannot
    /// be started.
    pub fn matmul_with(&self, other: &Matrix<T>, policy: &ExecPolicy) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(CoreError::InnerDimensionMismatch {
                left_cols: self.cols,
                right_rows: other.rows,
            });
        }

        let (m, k, n) = (self.rows, self.cols, other.cols);
        if policy.is_parallel() {
            log::debug!("parallel matmul {m}x{k} * {k}x{n}");
        }

        let (a, b) = (&self.data, &other.data);
        let mut data = vec![T::zero(); m * n];
        exec::for_each_row(&mut data, n, policy, |i, row| {
            let a_row = &a[i * k..(i + 1) * k];
            for (j, out) in row.iter_mut().enumerate() {
                let mut sum = T::zero();
                for (p, &a_ip) in a_row.iter().enumerate() {
                    sum += a_ip * b[p * n + j];
                }
                *out = sum;
            }
        })?;

        Ok(Matrix {
            data,
            rows: m,
            cols: n,
        })
    }

    // ------------------------------------------------------------------
    // Structural
    // ------------------------------------------------------------------

    /// Transpose: `result[j][i] = conj(self[i][j])`.
    ///
    /// For real and integer elements [`Scalar::conj`] is the identity, so
    /// this is the plain transpose. For [`Complex`](crate::Complex) elements
    /// it is the conjugate transpose.
    ///
    /// ```
    /// # use genmat_core::{Complex, Matrix};
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.transpose().as_slice(), &[1, 3, 2, 4]);
    ///
    /// let z = Matrix::from_vec(1, 1, vec![Complex::new(1.0, 2.0)]).unwrap();
    /// assert_eq!(*z.transpose().get(0, 0).unwrap(), Complex::new(1.0, -2.0));
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = vec![T::zero(); self.data.len()];

        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c].conj();
            }
        }

        Matrix {
            data,
            rows: cols,
            cols: rows,
        }
    }

    /// Sum of the main diagonal. The empty matrix has trace `T::zero()`.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotSquare`] if `rows != cols`.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(CoreError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut sum = T::zero();
        for i in 0..self.rows {
            sum += self.data[i * self.cols + i];
        }
        Ok(sum)
    }
}

// ======================================================================
// Operator sugar (panics on shape mismatch)
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<'a, T: Scalar> $trait for &'a Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &'a Matrix<T>) -> Matrix<T> {
                match Matrix::<T>::$checked(self, rhs) {
                    Ok(m) => m,
                    Err(e) => panic!("{}: {e}", stringify!($method)),
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, add);
impl_matrix_binop!(Sub, sub, sub);
impl_matrix_binop!(Mul, mul, matmul);

macro_rules! impl_matrix_assign {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<'a, T: Scalar> $trait<&'a Matrix<T>> for Matrix<T> {
            fn $method(&mut self, rhs: &'a Matrix<T>) {
                match Matrix::<T>::$checked(self, rhs) {
                    Ok(m) => *self = m,
                    Err(e) => panic!("{}: {e}", stringify!($method)),
                }
            }
        }
    };
}

impl_matrix_assign!(AddAssign, add_assign, add);
impl_matrix_assign!(SubAssign, sub_assign, sub);
impl_matrix_assign!(MulAssign, mul_assign, matmul);
