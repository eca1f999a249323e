//! Element type contract for generic matrices.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar            every matrix element (integers, floats, Complex<R>)
//!   └── Real        real-valued floats usable as complex components (f32, f64)
//! ```
//!
//! A type is usable as a matrix element once it provides a zero, the ring
//! operators `+`, `-`, `*`, an accumulating `+=`, equality and a textual
//! rendering. Element types with a meaningful conjugate override
//! [`Scalar::conj`]; everyone else inherits the identity.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Scalar — the root trait for every matrix element type
// ---------------------------------------------------------------------------

/// Base trait for all element types storable in a [`Matrix`](crate::Matrix).
///
/// `Send + Sync` are required so that the row-parallel executor may share
/// operands across worker threads.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Conjugate of the value.
    ///
    /// Identity for real-valued types. Complex-like types override this,
    /// which turns [`Matrix::transpose`](crate::Matrix::transpose) into the
    /// conjugate (Hermitian) transpose.
    #[inline]
    #[must_use]
    fn conj(self) -> Self {
        self
    }
}

// ---------------------------------------------------------------------------
// Real — component type for complex numbers
// ---------------------------------------------------------------------------

/// Real-valued floating-point scalars (`f32`, `f64`).
pub trait Real: Scalar + Neg<Output = Self> + PartialOrd {}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
        }

        impl Real for $ty {}
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
        }
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(i128);
impl_scalar_int!(u8);
impl_scalar_int!(u16);
impl_scalar_int!(u32);
impl_scalar_int!(u64);
impl_scalar_int!(u128);
impl_scalar_int!(usize);
impl_scalar_int!(isize);
