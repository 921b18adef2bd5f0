//! Closest-match search over a sequence of values with errors.
//!
//! ## Purpose
//!
//! Locate the element whose value is closest to a target computed from all
//! values (for example their maximum), together with its index.
//!
//! ## Design notes
//!
//! * **Sorted (fast path)**: binary search for the first value `>= target`
//!   in an ascending sequence; a closer value below the target is ignored,
//!   and the index is clamped to the last element.
//! * **Exact (slow path)**: linear scan for a value equal to the target;
//!   correct for unsorted input and deterministic under ties (first wins).
//!
//! ## Invariants
//!
//! * Sorted mode assumes ascending values; it does not check.
//!
//! ## Non-goals
//!
//! * This module does not sort the input.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ErrvalError;
use crate::primitives::sequence::values;
use crate::primitives::value::ValueWithError;

// ============================================================================
// Search Mode
// ============================================================================

/// Strategy used by [`closest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Binary search in a value-sorted sequence (default).
    #[default]
    Sorted,

    /// Linear scan requiring exact equality.
    Exact,
}

// ============================================================================
// Search Functions
// ============================================================================

/// Element whose value is closest to `target(values)`, with its index.
pub fn closest<T, F>(
    seq: &[ValueWithError<T>],
    target: F,
    mode: SearchMode,
) -> Result<(ValueWithError<T>, usize), ErrvalError>
where
    T: Float,
    F: Fn(&[T]) -> T,
{
    if seq.is_empty() {
        return Err(ErrvalError::EmptyInput);
    }

    let vals = values(seq);
    let wanted = target(&vals);

    let idx = match mode {
        SearchMode::Sorted => vals.partition_point(|&v| v < wanted).min(vals.len() - 1),
        SearchMode::Exact => vals
            .iter()
            .position(|&v| v == wanted)
            .ok_or_else(|| ErrvalError::NoExactMatch(wanted.to_f64().unwrap_or(f64::NAN)))?,
    };

    Ok((seq[idx], idx))
}

/// Element with the largest value, with its index.
pub fn max<T: Float>(seq: &[ValueWithError<T>]) -> Result<(ValueWithError<T>, usize), ErrvalError> {
    closest(seq, |v| fold(v, T::max), SearchMode::Exact)
}

/// Element with the smallest value, with its index.
pub fn min<T: Float>(seq: &[ValueWithError<T>]) -> Result<(ValueWithError<T>, usize), ErrvalError> {
    closest(seq, |v| fold(v, T::min), SearchMode::Exact)
}

#[inline]
fn fold<T: Float>(v: &[T], pick: fn(T, T) -> T) -> T {
    v.iter().copied().fold(T::nan(), pick)
}
