//! Execution strategy for the row-parallel operations (addition and
//! multiplication).
//!
//! A call either receives an explicit [`ExecPolicy`] (`add_with`,
//! `matmul_with`) or falls back to the process-wide default selected with
//! [`set_parallel`]. The default is read once when an operation begins, so a
//! concurrent toggle never changes the strategy of an operation in flight.
//!
//! The parallel path is bulk-synchronous: every output row is computed by a
//! rayon task that owns exactly that row, and the call returns only after
//! all rows are done. Rows are grouped into tasks of at least
//! [`ExecPolicy::min_rows_per_task`] rows, and the number of OS threads is
//! bounded by the pool size rather than by the row count.

use core::fmt;
use core::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::error::{CoreError, Result};

const ENV_STRATEGY: &str = "GENMAT_STRATEGY";
const ENV_THREADS: &str = "GENMAT_THREADS";
const ENV_MIN_ROWS: &str = "GENMAT_MIN_ROWS";

static PARALLEL_DEFAULT: AtomicBool = AtomicBool::new(false);

// ======================================================================
// Strategy
// ======================================================================

/// How a row-parallel operation is executed. Never affects the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Single pass on the calling thread.
    #[default]
    Sequential,
    /// Rows fanned out over a rayon pool, joined before returning.
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Self::Sequential),
            "parallel" | "par" => Ok(Self::Parallel),
            _ => Err(CoreError::InvalidArgument {
                reason: "strategy must be \"sequential\" or \"parallel\"",
            }),
        }
    }
}

// ======================================================================
// ExecPolicy
// ======================================================================

/// Configuration for a single row-parallel operation.
///
/// ```
/// # use genmat_core::{ExecPolicy, Strategy};
/// let policy = ExecPolicy::parallel().with_min_rows_per_task(16);
/// assert_eq!(policy.strategy(), Strategy::Parallel);
/// assert_eq!(policy.min_rows_per_task(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecPolicy {
    strategy: Strategy,
    min_rows_per_task: usize,
    num_threads: Option<usize>,
}

impl Default for ExecPolicy {
    fn default() -> Self {
        Self {
            strategy: Strategy::Sequential,
            min_rows_per_task: 1,
            num_threads: None,
        }
    }
}

impl ExecPolicy {
    /// Sequential execution on the calling thread.
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Parallel execution on rayon's global pool.
    pub fn parallel() -> Self {
        Self::default().with_strategy(Strategy::Parallel)
    }

    /// Replace the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Lower bound on the number of rows handed to one task. Values below 1
    /// are clamped to 1.
    #[must_use]
    pub fn with_min_rows_per_task(mut self, rows: usize) -> Self {
        self.min_rows_per_task = rows.max(1);
        self
    }

    /// Run parallel work on a dedicated pool of `threads` workers instead of
    /// the global pool. `None` restores the global pool.
    ///
    /// The dedicated pool is built and torn down on every call that uses
    /// this policy, so prefer the global pool for many small operations.
    /// `Some(0)` is rejected with [`CoreError::InvalidArgument`] when the
    /// policy is used, the same as `GENMAT_THREADS=0`.
    #[must_use]
    pub fn with_num_threads(mut self, threads: Option<usize>) -> Self {
        self.num_threads = threads;
        self
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn min_rows_per_task(&self) -> usize {
        self.min_rows_per_task
    }

    #[inline]
    pub fn num_threads(&self) -> Option<usize> {
        self.num_threads
    }

    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.strategy == Strategy::Parallel
    }

    /// Build a policy from `GENMAT_STRATEGY`, `GENMAT_THREADS` and
    /// `GENMAT_MIN_ROWS`. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] if a variable is set but unparsable, or
    /// if `GENMAT_THREADS` is zero.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = Self::default();

        if let Some(v) = lookup(ENV_STRATEGY) {
            policy.strategy = v.parse()?;
        }
        if let Some(v) = lookup(ENV_THREADS) {
            let n: usize = v.trim().parse().map_err(|_| CoreError::InvalidArgument {
                reason: "GENMAT_THREADS must be a positive integer",
            })?;
            if n == 0 {
                return Err(CoreError::InvalidArgument {
                    reason: "GENMAT_THREADS must be a positive integer",
                });
            }
            policy.num_threads = Some(n);
        }
        if let Some(v) = lookup(ENV_MIN_ROWS) {
            let n: usize = v.trim().parse().map_err(|_| CoreError::InvalidArgument {
                reason: "GENMAT_MIN_ROWS must be a non-negative integer",
            })?;
            policy = policy.with_min_rows_per_task(n);
        }

        log::debug!("exec policy from environment: {policy:?}");
        Ok(policy)
    }
}

// ======================================================================
// Process-wide default
// ======================================================================

/// Select the strategy used by [`Matrix::add`](crate::Matrix::add) and
/// [`Matrix::matmul`](crate::Matrix::matmul) when no explicit policy is
/// given. A change of mode is logged at `info` level.
pub fn set_parallel(parallel: bool) {
    let previous = PARALLEL_DEFAULT.swap(parallel, Ordering::SeqCst);
    if previous != parallel {
        if parallel {
            log::info!("matrix mode changed to parallel");
        } else {
            log::info!("matrix mode changed to sequential");
        }
    }
}

/// Whether the process-wide default is currently parallel.
pub fn is_parallel() -> bool {
    PARALLEL_DEFAULT.load(Ordering::SeqCst)
}

/// Snapshot of the process-wide default as a policy.
pub fn default_policy() -> ExecPolicy {
    if is_parallel() {
        ExecPolicy::parallel()
    } else {
        ExecPolicy::sequential()
    }
}

// ======================================================================
// Row executor
// ======================================================================

/// Fill `out`, viewed as rows of `cols` elements, by calling
/// `kernel(row_index, row)` once per row.
///
/// `out` must already have its final length; each invocation receives the
/// only mutable borrow of its row. Returns after every row is written.
pub(crate) fn for_each_row<T, F>(
    out: &mut [T],
    cols: usize,
    policy: &ExecPolicy,
    kernel: F,
) -> Result<()>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if out.is_empty() || cols == 0 {
        return Ok(());
    }
    debug_assert_eq!(out.len() % cols, 0, "buffer is not a whole number of rows");

    match policy.strategy {
        Strategy::Sequential => {
            for (r, row) in out.chunks_mut(cols).enumerate() {
                kernel(r, row);
            }
            Ok(())
        }
        Strategy::Parallel => {
            let rows = out.len() / cols;
            let min_len = policy.min_rows_per_task;
            let mut run = move || {
                out.par_chunks_mut(cols)
                    .enumerate()
                    .with_min_len(min_len)
                    .for_each(|(r, row)| kernel(r, row));
            };

            match policy.num_threads {
                None => {
                    log::trace!("parallel rows={rows} min_len={min_len} pool=global");
                    run();
                }
                Some(0) => {
                    return Err(CoreError::InvalidArgument {
                        reason: "worker pool size must be a positive integer",
                    });
                }
                Some(threads) => {
                    log::trace!("parallel rows={rows} min_len={min_len} pool={threads}");
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(threads)
                        .build()
                        .map_err(|e| CoreError::WorkerPool {
                            reason: e.to_string(),
                        })?;
                    pool.install(run);
                }
            }
            Ok(())
        }
    }
}
