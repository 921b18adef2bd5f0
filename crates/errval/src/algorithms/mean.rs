//! Inverse-variance weighted mean.
//!
//! ## Key concepts
//!
//! ```text
//! W   = Σ 1/σ_i²
//! <x> = Σ (x_i/σ_i²) / W
//! σ   = 1/sqrt(W)
//! ```
//!
//! ## Invariants
//!
//! * Every element must have a nonzero error.
//! * The result carries the display mode of the first element.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ErrvalError;
use crate::primitives::value::ValueWithError;

/// Weighted mean of `seq` with weights `1/σ_i²`.
pub fn weighted_mean<T: Float>(seq: &[ValueWithError<T>]) -> Result<ValueWithError<T>, ErrvalError> {
    if seq.is_empty() {
        return Err(ErrvalError::EmptyInput);
    }
    if let Some(index) = seq.iter().position(|e| e.error() == T::zero()) {
        return Err(ErrvalError::DivisionByZero { index });
    }

    let (sum_w, sum_wx) = seq.iter().fold((T::zero(), T::zero()), |(sw, swx), e| {
        let w = (e.error() * e.error()).recip();
        (sw + w, swx + w * e.value())
    });

    Ok(ValueWithError::from_parts(
        sum_wx / sum_w,
        sum_w.sqrt().recip(),
        seq[0].display_mode(),
    ))
}
