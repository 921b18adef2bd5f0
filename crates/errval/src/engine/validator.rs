//! Input validation for regression data.
//!
//! ## Purpose
//!
//! This module validates regression inputs before a run: matching,
//! non-empty array lengths and nonzero uncertainties.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Copy, never mutate**: zero-uncertainty repair returns a new array.
//!
//! ## Key concepts
//!
//! * **Zero-error repair**: zeros are replaced by a tenth of the smallest
//!   nonzero uncertainty.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort or filter input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(feature = "std")]
use std::borrow::Cow;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ErrvalError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression inputs.
///
/// Provides static methods that return `Result<_, ErrvalError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Reject empty inputs.
    #[inline]
    pub fn validate_nonempty(len: usize) -> Result<(), ErrvalError> {
        if len == 0 {
            return Err(ErrvalError::EmptyInput);
        }
        Ok(())
    }

    /// Require regression arrays of equal, nonzero length.
    pub fn validate_regression_inputs<T: Float>(
        x: &[T],
        y: &[T],
        sigma: &[T],
    ) -> Result<(), ErrvalError> {
        // Check 1: Matching lengths
        if x.len() != y.len() || x.len() != sigma.len() {
            return Err(ErrvalError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
                sigma_len: sigma.len(),
            });
        }

        // Check 2: Non-empty arrays
        Self::validate_nonempty(x.len())
    }

    // ========================================================================
    // Uncertainty Validation
    // ========================================================================

    /// Check `sigma` for zeros, optionally repairing them on a copy.
    ///
    /// Without zeros the input is borrowed unchanged. With `overwrite` set
    /// and at least one nonzero entry, each zero becomes
    /// `0.1 × min(nonzero |σ|)`. Otherwise fails with `ZeroUncertainty`.
    pub fn validate_uncertainties<T: Float>(
        sigma: &[T],
        overwrite: bool,
    ) -> Result<Cow<'_, [T]>, ErrvalError> {
        let first_zero = match sigma.iter().position(|&s| s == T::zero()) {
            None => return Ok(Cow::Borrowed(sigma)),
            Some(i) => i,
        };

        let smallest = sigma
            .iter()
            .filter(|&&s| s != T::zero())
            .map(|s| s.abs())
            .fold(None, |acc: Option<T>, s| Some(acc.map_or(s, |m| m.min(s))));

        match smallest {
            Some(min_valid) if overwrite => {
                let replacement = T::from(0.1).unwrap() * min_valid;
                Ok(Cow::Owned(
                    sigma
                        .iter()
                        .map(|&s| if s == T::zero() { replacement } else { s })
                        .collect(),
                ))
            }
            _ => Err(ErrvalError::ZeroUncertainty { index: first_zero }),
        }
    }
}
