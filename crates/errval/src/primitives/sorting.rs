//! Sorting utilities for sequences of values with errors.
//!
//! ## Purpose
//!
//! This module generates value-sorted index groups and gathers sequences
//! by explicit index lists.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting, so tied values keep their original order.
//! * **Full tie groups**: each distinct value maps to *all* indices holding it.
//! * **Robustness**: NaN sorts last; infinities sort by sign.
//!
//! ## Key concepts
//!
//! ### Sort-Gather Pattern
//! 1. **Sort**: `sorting_indices` groups original positions by ascending value.
//! 2. **Gather**: `reorder` materializes a new sequence from a flat index list.
//!
//! ## Invariants
//!
//! * Flattening the groups of `sorting_indices` yields a permutation of `0..n`.
//! * Within a group, indices are ascending.
//! * Every NaN forms its own group, after all other values.
//!
//! ## Non-goals
//!
//! * This module does not sort by error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ErrvalError;
use crate::primitives::sequence::ErrvalList;
use crate::primitives::value::ValueWithError;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Order finite values first, then infinities by sign, then NaN.
#[inline]
fn total_order<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Group original indices by ascending value.
///
/// Returns one group per distinct value; each group lists every index whose
/// value compares equal to it. Equal values are matched with `==`, so `-0.0`
/// and `0.0` share a group while each NaN stands alone.
pub fn sorting_indices<T: Float>(seq: &[ValueWithError<T>]) -> Vec<Vec<usize>> {
    let mut order: Vec<(T, usize)> = seq.iter().map(|e| e.value()).zip(0..).collect();

    // Stable sort keeps ascending original indices within ties
    order.sort_by(|a, b| total_order(a.0, b.0));

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut current: Option<T> = None;

    for (value, idx) in order {
        match (current, groups.last_mut()) {
            (Some(prev), Some(group)) if prev == value => group.push(idx),
            _ => groups.push(vec![idx]),
        }
        current = Some(value);
    }

    groups
}

/// Gather `seq` at `indices` into a new list.
pub fn reorder<T: Float>(
    seq: &[ValueWithError<T>],
    indices: &[usize],
) -> Result<ErrvalList<T>, ErrvalError> {
    indices
        .iter()
        .map(|&i| {
            seq.get(i).copied().ok_or(ErrvalError::IndexOutOfBounds {
                index: i,
                len: seq.len(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ErrvalList::from)
}

/// Stable sort by value.
pub fn sort_by_value<T: Float>(seq: &[ValueWithError<T>]) -> ErrvalList<T> {
    // Fast path: already sorted
    let is_sorted = seq.windows(2).all(|w| w[0].value() <= w[1].value());
    if is_sorted {
        return seq.iter().copied().collect();
    }

    sorting_indices(seq)
        .into_iter()
        .flatten()
        .map(|i| seq[i])
        .collect()
}
