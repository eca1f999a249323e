//! Complex numbers as matrix elements.
//!
//! [`Complex`] implements [`Scalar`] with a real conjugate, so a
//! `Matrix<Complex<R>>` transposes to its conjugate transpose while every
//! other matrix operation uses complex arithmetic unchanged.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::{Real, Scalar};

/// A complex number `re + im·i` over a real component type.
///
/// ```
/// # use genmat_core::Complex;
/// let z = Complex::new(1.0_f64, 2.0);
/// assert_eq!(z.conj(), Complex::new(1.0, -2.0));
/// assert_eq!(z * z.conj(), Complex::from(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<R> {
    pub re: R,
    pub im: R,
}

impl<R: Real> Complex<R> {
    /// Create a complex number from its real and imaginary parts.
    #[inline]
    pub fn new(re: R, im: R) -> Self {
        Self { re, im }
    }

    /// The imaginary unit `i`.
    #[inline]
    pub fn i() -> Self {
        Self::new(R::zero(), R::one())
    }

    /// Complex conjugate: `re - im·i`.
    #[inline]
    #[must_use]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm_sqr(self) -> R {
        self.re * self.re + self.im * self.im
    }
}

impl<R: Real> From<R> for Complex<R> {
    #[inline]
    fn from(re: R) -> Self {
        Self::new(re, R::zero())
    }
}

impl<R: Real> Add for Complex<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<R: Real> Sub for Complex<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<R: Real> Mul for Complex<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<R: Real> Neg for Complex<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<R: Real> AddAssign for Complex<R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<R: Real> fmt::Display for Complex<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < R::zero() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            // -0.0 renders as "+0", not "+-0"
            write!(f, "{}+{}i", self.re, self.im + R::zero())
        }
    }
}

impl<R: Real> Scalar for Complex<R> {
    #[inline]
    fn zero() -> Self {
        Self::new(R::zero(), R::zero())
    }

    #[inline]
    fn one() -> Self {
        Self::new(R::one(), R::zero())
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(self)
    }
}
