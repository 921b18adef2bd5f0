//! High-level API for regression and interpolation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: fluent builders for
//! the jackknife regression and for piecewise interpolation, plus the
//! `linreg` convenience function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builders reject parameters set twice when `.build()` is called.
//! * **Type-Safe**: Builders are untyped; the float type is chosen per call.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `LinReg::new()` or `Interpolator::new()`.
//! 2. Chain configuration methods (`.overwrite_zero_errors()`, `.parallel()`, ...).
//! 3. Call `.build()` and reuse the resulting model for any number of fits.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::RegressionExecutor;
use crate::primitives::sequence::{errors, values};

// Publicly re-exported types
pub use crate::algorithms::interpolation::{
    interp, interp_sequence, ExtrapolationWarning, Interpolated, Point,
};
pub use crate::algorithms::mean::weighted_mean;
pub use crate::algorithms::regression::Regression;
pub use crate::algorithms::search::{closest, max, min, SearchMode};
pub use crate::engine::executor::RegressionConfig;
pub use crate::primitives::display::DisplayMode;
pub use crate::primitives::errors::ErrvalError;
pub use crate::primitives::sequence::ErrvalList;
pub use crate::primitives::sorting::{reorder, sort_by_value, sorting_indices};
pub use crate::primitives::value::{Operand, ValueWithError};

// ============================================================================
// Regression Builder
// ============================================================================

/// Fluent builder for the weighted linear regression.
#[derive(Debug, Clone, Default)]
pub struct LinRegBuilder {
    /// Replace zero uncertainties instead of failing (default: false).
    pub overwrite_zero_errors: Option<bool>,

    /// Run the leave-one-out pass in parallel (default: false).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl LinRegBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace zero uncertainties by `0.1 × min(nonzero σ)`.
    pub fn overwrite_zero_errors(mut self, overwrite: bool) -> Self {
        if self.overwrite_zero_errors.is_some() {
            self.duplicate_param = Some("overwrite_zero_errors");
        }
        self.overwrite_zero_errors = Some(overwrite);
        self
    }

    /// Run the jackknife on the rayon thread pool (`cpu` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<LinRegModel, ErrvalError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(ErrvalError::DuplicateParameter { parameter });
        }

        Ok(LinRegModel {
            config: RegressionConfig {
                overwrite_zero_errors: self.overwrite_zero_errors.unwrap_or(false),
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

/// Configured weighted linear regression `y = A + B·x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinRegModel {
    config: RegressionConfig,
}

impl LinRegModel {
    /// The resolved configuration.
    pub fn config(&self) -> RegressionConfig {
        self.config
    }

    /// Fit with explicit per-sample uncertainties.
    pub fn fit<T>(&self, x: &[T], y: &[T], sigma: &[T]) -> Result<Regression<T>, ErrvalError>
    where
        T: Float + Send + Sync,
    {
        RegressionExecutor::run(x, y, sigma, self.config)
    }

    /// Fit using the errors of `y` as uncertainties.
    pub fn fit_values<T>(
        &self,
        x: &[T],
        y: &[ValueWithError<T>],
    ) -> Result<Regression<T>, ErrvalError>
    where
        T: Float + Send + Sync,
    {
        let (y_values, sigma): (Vec<T>, Vec<T>) = (values(y), errors(y));
        self.fit(x, &y_values, &sigma)
    }
}

/// Fit `y = A + B·x` with weights `1/σ²` and jackknife errors.
///
/// The uncertainty array is never modified; with `overwrite_zero_errors`
/// zeros are repaired on an internal copy.
pub fn linreg<T>(
    x: &[T],
    y: &[T],
    sigma: &[T],
    overwrite_zero_errors: bool,
) -> Result<Regression<T>, ErrvalError>
where
    T: Float + Send + Sync,
{
    RegressionExecutor::run(
        x,
        y,
        sigma,
        RegressionConfig {
            overwrite_zero_errors,
            parallel: false,
        },
    )
}

// ============================================================================
// Interpolation Builder
// ============================================================================

/// Fluent builder for piecewise interpolation.
#[derive(Debug, Clone, Default)]
pub struct InterpolatorBuilder {
    /// Report extrapolation outside the x-range (default: true).
    pub warn_on_extrapolation: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl InterpolatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable extrapolation warnings.
    pub fn warn_on_extrapolation(mut self, warn: bool) -> Self {
        if self.warn_on_extrapolation.is_some() {
            self.duplicate_param = Some("warn_on_extrapolation");
        }
        self.warn_on_extrapolation = Some(warn);
        self
    }

    /// Validate the configuration and build the interpolator.
    pub fn build(self) -> Result<PiecewiseInterpolator, ErrvalError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(ErrvalError::DuplicateParameter { parameter });
        }

        Ok(PiecewiseInterpolator {
            warn_on_extrapolation: self.warn_on_extrapolation.unwrap_or(true),
        })
    }
}

/// Configured piecewise linear interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecewiseInterpolator {
    warn_on_extrapolation: bool,
}

impl PiecewiseInterpolator {
    /// Interpolate at `v` over ascending `xs` and matching `ys`.
    pub fn at<T, X>(
        &self,
        v: T,
        xs: &[X],
        ys: &[ValueWithError<T>],
    ) -> Result<Interpolated<T>, ErrvalError>
    where
        T: Float,
        X: Copy + Into<Operand<T>>,
    {
        interp_sequence(v, xs, ys, self.warn_on_extrapolation)
    }
}
