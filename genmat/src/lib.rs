//! # genmat
//!
//! Generic, dimension-checked matrices over any numeric element type, with
//! an optional row-parallel strategy for addition and multiplication.
//!
//! One `use genmat::prelude::*;` gives you [`Matrix`](core::Matrix),
//! [`Complex`](core::Complex), the [`Scalar`](core::Scalar) element contract
//! and the execution policy types.
//!
//! ```
//! use genmat::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4])?;
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8])?;
//! let p = a.matmul_with(&b, &ExecPolicy::parallel())?;
//! assert_eq!(p.render(), "19\t22\n43\t50\n");
//! # Ok::<(), CoreError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrices, element contract, execution policy |

#[cfg(feature = "core")]
pub use genmat_core as core;

/// Glob-import convenience: `use genmat::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use genmat_core::prelude::*;
}
