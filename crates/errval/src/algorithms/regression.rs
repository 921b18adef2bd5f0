//! Weighted linear regression with jackknife uncertainties.
//!
//! ## Purpose
//!
//! This module fits `y = A + B·x` by weighted least squares with weights
//! `w_i = 1/σ_i²` and estimates the errors of `A` and `B` by leave-one-out
//! (jackknife) resampling.
//!
//! ## Design notes
//!
//! * **Closed form**: the fit uses the five weighted sums below; no matrix solve.
//! * **Resampling**: the `n` leave-one-out fits are independent, so the
//!   engine may run them in parallel without changing the result.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! ```text
//! S   = Σ w_i        Sx  = Σ w_i x_i      Sy  = Σ w_i y_i
//! Sxx = Σ w_i x_i²   Sxy = Σ w_i x_i y_i
//!
//! B = (S·Sxy - Sx·Sy) / (S·Sxx - Sx²)
//! A = Σ w_i (y_i - B·x_i) / S
//!
//! σ_θ = sqrt(n - 1) · sqrt(Σ (θ_k - θ̄)² / n)      (θ_k fitted without sample k)
//! ```
//!
//! ## Invariants
//!
//! * With `n <= 2` points the uncertainties are `NaN`: removing a point
//!   leaves nothing to resample.
//! * All x-values equal make the denominator zero; the result is `NaN`/`inf`
//!   as produced by the float arithmetic.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * The covariance between `A` and `B` is not reported.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::value::ValueWithError;

// ============================================================================
// Result Structure
// ============================================================================

/// Fitted line `y = intercept + slope·x` with jackknife errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression<T = f64> {
    /// Intercept `A`.
    pub intercept: ValueWithError<T>,

    /// Slope `B`.
    pub slope: ValueWithError<T>,
}

impl<T: Float + Display> Display for Regression<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Linear Regression (y = A + B*x):")?;
        writeln!(f, "  A: {}", self.intercept)?;
        write!(f, "  B: {}", self.slope)
    }
}

// ============================================================================
// Weighted Least Squares
// ============================================================================

/// Weighted sums of a line fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSums<T> {
    /// `Σ w_i`
    pub s: T,
    /// `Σ w_i x_i`
    pub sx: T,
    /// `Σ w_i y_i`
    pub sy: T,
    /// `Σ w_i x_i²`
    pub sxx: T,
    /// `Σ w_i x_i y_i`
    pub sxy: T,
}

/// Accumulate the weighted sums, optionally leaving out sample `skip`.
#[inline]
pub fn accumulate_weighted<T: Float>(
    x: &[T],
    y: &[T],
    sigma: &[T],
    skip: Option<usize>,
) -> WeightedSums<T> {
    let mut sums = WeightedSums {
        s: T::zero(),
        sx: T::zero(),
        sy: T::zero(),
        sxx: T::zero(),
        sxy: T::zero(),
    };

    for i in 0..x.len() {
        if Some(i) == skip {
            continue;
        }
        let w = (sigma[i] * sigma[i]).recip();
        let wx = w * x[i];

        sums.s = sums.s + w;
        sums.sx = sums.sx + wx;
        sums.sy = sums.sy + w * y[i];
        sums.sxx = sums.sxx + wx * x[i];
        sums.sxy = sums.sxy + wx * y[i];
    }

    sums
}

/// Solve the weighted sums for `(A, B)`.
#[inline]
pub fn solve_line<T: Float>(sums: &WeightedSums<T>) -> (T, T) {
    let slope = (sums.s * sums.sxy - sums.sx * sums.sy) / (sums.s * sums.sxx - sums.sx * sums.sx);
    let intercept = (sums.sy - slope * sums.sx) / sums.s;
    (intercept, slope)
}

/// Fit `(A, B)` on all samples except `skip`.
#[inline]
pub fn fit_line<T: Float>(x: &[T], y: &[T], sigma: &[T], skip: Option<usize>) -> (T, T) {
    solve_line(&accumulate_weighted(x, y, sigma, skip))
}

// ============================================================================
// Jackknife
// ============================================================================

/// Jackknife standard errors of `(A, B)` from the leave-one-out estimates.
pub fn jackknife_errors<T: Float>(estimates: &[(T, T)]) -> (T, T) {
    let n = T::from(estimates.len()).unwrap();

    let (sum_a, sum_b) = estimates
        .iter()
        .fold((T::zero(), T::zero()), |(sa, sb), &(a, b)| (sa + a, sb + b));
    let (a_dot, b_dot) = (sum_a / n, sum_b / n);

    let (ss_a, ss_b) = estimates.iter().fold((T::zero(), T::zero()), |(sa, sb), &(a, b)| {
        (sa + (a - a_dot).powi(2), sb + (b - b_dot).powi(2))
    });

    let scale = (n - T::one()).sqrt();
    (scale * (ss_a / n).sqrt(), scale * (ss_b / n).sqrt())
}

/// Combine the full-sample fit with its leave-one-out estimates.
///
/// `estimates` is empty when there were too few samples to resample.
pub fn assemble<T: Float>(full: (T, T), estimates: &[(T, T)]) -> Regression<T> {
    let (err_a, err_b) = if estimates.is_empty() {
        (T::nan(), T::nan())
    } else {
        jackknife_errors(estimates)
    };

    Regression {
        intercept: ValueWithError::from_parts(full.0, err_a, Default::default()),
        slope: ValueWithError::from_parts(full.1, err_b, Default::default()),
    }
}
