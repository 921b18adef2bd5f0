//! Execution engine for the jackknife regression.
//!
//! ## Purpose
//!
//! This module orchestrates a regression run: validation, zero-uncertainty
//! repair, the full-sample fit and the leave-one-out pass, executed either
//! sequentially or on the rayon thread pool.
//!
//! ## Design notes
//!
//! * **Pluggable pass**: the leave-one-out pass is a plain function pointer,
//!   so sequential and parallel execution share everything else.
//! * **Parallelism**: with the `cpu` feature, fits are distributed with
//!   `rayon`; each fit is computed identically, so results match the
//!   sequential pass bit for bit.
//! * **Copy, never mutate**: the caller's uncertainty array is never changed.
//!
//! ## Invariants
//!
//! * The leave-one-out pass returns one estimate per sample, in sample order.
//! * The pass only runs for more than two samples.
//!
//! ## Non-goals
//!
//! * This module does not implement the fitting formulas (see `regression`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{assemble, fit_line, Regression};
use crate::engine::validator::Validator;
use crate::primitives::errors::ErrvalError;

// ============================================================================
// Types
// ============================================================================

/// Leave-one-out pass: `(A_k, B_k)` for every sample `k`.
pub type LeaveOneOutFn<T> = fn(&[T], &[T], &[T]) -> Vec<(T, T)>;

/// Minimum number of samples for a jackknife estimate.
pub const MIN_JACKKNIFE_POINTS: usize = 3;

/// Options of a regression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegressionConfig {
    /// Replace zero uncertainties by a tenth of the smallest nonzero one.
    pub overwrite_zero_errors: bool,

    /// Run the leave-one-out pass in parallel (requires the `cpu` feature).
    pub parallel: bool,
}

// ============================================================================
// Leave-One-Out Passes
// ============================================================================

/// Sequential leave-one-out pass.
pub fn leave_one_out_sequential<T: Float>(x: &[T], y: &[T], sigma: &[T]) -> Vec<(T, T)> {
    (0..x.len()).map(|k| fit_line(x, y, sigma, Some(k))).collect()
}

/// Parallel leave-one-out pass.
#[cfg(feature = "cpu")]
pub fn leave_one_out_parallel<T>(x: &[T], y: &[T], sigma: &[T]) -> Vec<(T, T)>
where
    T: Float + Send + Sync,
{
    (0..x.len())
        .into_par_iter()
        .map(|k| fit_line(x, y, sigma, Some(k)))
        .collect()
}

/// Select the pass for the requested execution mode.
///
/// Without the `cpu` feature the sequential pass is always used.
pub fn select_pass<T>(parallel: bool) -> LeaveOneOutFn<T>
where
    T: Float + Send + Sync,
{
    #[cfg(feature = "cpu")]
    {
        if parallel {
            return leave_one_out_parallel::<T>;
        }
    }
    #[cfg(not(feature = "cpu"))]
    let _ = parallel;

    leave_one_out_sequential::<T>
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a full regression.
pub struct RegressionExecutor;

impl RegressionExecutor {
    /// Fit `y = A + B·x` with weights `1/σ²` and jackknife errors.
    pub fn run<T>(
        x: &[T],
        y: &[T],
        sigma: &[T],
        config: RegressionConfig,
    ) -> Result<Regression<T>, ErrvalError>
    where
        T: Float + Send + Sync,
    {
        Validator::validate_regression_inputs(x, y, sigma)?;
        let repaired = Validator::validate_uncertainties(sigma, config.overwrite_zero_errors)?;
        let sigma: &[T] = &repaired;

        let full = fit_line(x, y, sigma, None);

        let estimates = if x.len() >= MIN_JACKKNIFE_POINTS {
            select_pass::<T>(config.parallel)(x, y, sigma)
        } else {
            Vec::new()
        };

        Ok(assemble(full, &estimates))
    }
}
