//! Elementary functions of a value with error.
//!
//! ## Purpose
//!
//! Single-argument functions with first-order propagation,
//! `σ_f = |f'(x)| · σ_x`.
//!
//! ## Key concepts
//!
//! For a fixed base `b`, `log_b(x) = ln(x)/ln(b)`, hence
//!
//! ```text
//! σ(log_b x) = |σx / (x · ln b)|
//! ```
//!
//! ## Invariants
//!
//! * Results keep the display mode of the input.
//! * Logarithms of non-positive values are not guarded: they yield `NaN`
//!   or `-inf` exactly like the underlying float functions.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::value::{Operand, ValueWithError};

// ============================================================================
// Elementary Functions
// ============================================================================

impl<T: Float> ValueWithError<T> {
    /// Absolute value; the error is unchanged.
    pub fn abs(&self) -> Self {
        ValueWithError::from_parts(self.value().abs(), self.error(), self.display_mode())
    }

    /// Square root, defined as `self ^ 0.5`.
    pub fn sqrt(&self) -> Self {
        self.pow(Operand::Exact(half::<T>()))
    }

    /// Natural logarithm.
    pub fn ln(&self) -> Self {
        self.log_with(self.value().ln(), T::one())
    }

    /// Base-10 logarithm.
    pub fn log10(&self) -> Self {
        self.log_with(self.value().log10(), T::from(10.0).unwrap().ln())
    }

    /// Base-2 logarithm.
    pub fn log2(&self) -> Self {
        self.log_with(self.value().log2(), T::from(2.0).unwrap().ln())
    }

    /// Round value and error independently to `digits` decimal places.
    ///
    /// Negative `digits` round to tens, hundreds, etc. Halfway cases round
    /// to even. A precision beyond the float range returns `self` unchanged;
    /// a magnitude beyond it rounds to zero.
    pub fn round(&self, digits: i32) -> Self {
        let scale = T::from(10.0).unwrap().powi(digits);
        if !scale.is_finite() {
            return *self;
        }
        if scale == T::zero() {
            return ValueWithError::from_parts(T::zero(), T::zero(), self.display_mode());
        }

        let round = |x: T| round_half_even(x * scale) / scale;
        ValueWithError::from_parts(round(self.value()), round(self.error()), self.display_mode())
    }

    #[inline]
    fn log_with(&self, value: T, ln_base: T) -> Self {
        let error = (self.error() / (self.value() * ln_base)).abs();
        ValueWithError::from_parts(value, error, self.display_mode())
    }
}

/// Round to the nearest integer, ties to even.
#[inline]
fn round_half_even<T: Float>(y: T) -> T {
    if (y - y.trunc()).abs() == half() {
        let two = T::one() + T::one();
        two * (y / two).round()
    } else {
        y.round()
    }
}

#[inline]
fn half<T: Float>() -> T {
    T::from(0.5).unwrap()
}
