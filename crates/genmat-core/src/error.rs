use core::fmt;

/// All errors returned by `genmat-core`.
///
/// A failed operation never touches its operands, and a failed constructor
/// never produces a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Exactly one of `rows`/`cols` is zero, or the supplied data length
    /// does not equal `rows * cols`.
    InvalidShape {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// Element-wise operation on matrices of different shapes.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Multiplication where the left operand's column count differs from the
    /// right operand's row count.
    InnerDimensionMismatch { left_cols: usize, right_rows: usize },

    /// A `(row, col)` index outside the matrix bounds.
    OutOfRange {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },

    /// Trace requested on a non-square matrix.
    NotSquare { rows: usize, cols: usize },

    /// A configuration value could not be accepted.
    InvalidArgument { reason: &'static str },

    /// A dedicated worker pool could not be started.
    WorkerPool { reason: String },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { rows, cols, reason } => {
                write!(f, "invalid shape {rows}x{cols}: {reason}")
            }
            Self::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "dimension mismatch: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::InnerDimensionMismatch {
                left_cols,
                right_rows,
            } => {
                write!(
                    f,
                    "cannot multiply: left has {left_cols} columns but right has {right_rows} rows"
                )
            }
            Self::OutOfRange { row, col, shape } => {
                write!(
                    f,
                    "index ({row}, {col}) out of range for {}x{} matrix",
                    shape.0, shape.1
                )
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "trace of a non-square {rows}x{cols} matrix")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::WorkerPool { reason } => write!(f, "worker pool: {reason}"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Convenience alias used throughout `genmat-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
