//! `genmat-core` — generic, dimension-checked matrices.
//!
//! Provides the [`Matrix`] container, the [`Scalar`] element contract, a
//! [`Complex`] element type with conjugate transpose, and an execution
//! policy that runs addition and multiplication row-parallel on rayon.
//!
//! # Design
//!
//! - Every shape or bounds violation is a [`CoreError`] value; failed
//!   operations leave their operands untouched.
//! - The execution strategy never changes a result, only where it is
//!   computed. See [`exec`].
//! - No `unsafe`: parallel workers receive disjoint `&mut` rows.

pub mod complex;
pub mod dtype;
pub mod error;
pub mod exec;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use complex::Complex;
pub use dtype::{Real, Scalar};
pub use error::{CoreError, Result};
pub use exec::{ExecPolicy, Strategy, default_policy, is_parallel, set_parallel};
pub use matrix::Matrix;

/// Items intended for glob-import: `use genmat_core::prelude::*;`
pub mod prelude {
    pub use crate::complex::Complex;
    pub use crate::dtype::{Real, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::exec::{ExecPolicy, Strategy, set_parallel};
    pub use crate::matrix::Matrix;
}
