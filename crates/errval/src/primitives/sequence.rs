//! Sequences of values with errors.
//!
//! ## Purpose
//!
//! Every routine in this crate takes `&[ValueWithError<T>]`. This module
//! provides the owned [`ErrvalList`] (which derefs to that slice for free)
//! and the projections onto plain numbers.
//!
//! ## Design notes
//!
//! * **Single abstraction**: there is no implicit coercion from raw numbers;
//!   converting `(value, error)` pairs is an explicit, validated step.
//! * **Order preserving**: projections keep the element order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::iter::FromIterator;
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ErrvalError;
use crate::primitives::value::ValueWithError;

// ============================================================================
// Projections
// ============================================================================

/// Central values of `seq`, in order.
pub fn values<T: Float>(seq: &[ValueWithError<T>]) -> Vec<T> {
    seq.iter().map(|e| e.value()).collect()
}

/// Errors of `seq`, in order.
pub fn errors<T: Float>(seq: &[ValueWithError<T>]) -> Vec<T> {
    seq.iter().map(|e| e.error()).collect()
}

/// `(value, error)` pairs of `seq`, in order.
pub fn tuples<T: Float>(seq: &[ValueWithError<T>]) -> Vec<(T, T)> {
    seq.iter().map(|e| e.to_tuple()).collect()
}

// ============================================================================
// Owned List
// ============================================================================

/// Owned, ordered collection of values with errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrvalList<T = f64>(Vec<ValueWithError<T>>);

impl<T: Float> ErrvalList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from `(value, error)` pairs, rejecting negative errors.
    pub fn try_from_pairs(pairs: &[(T, T)]) -> Result<Self, ErrvalError> {
        pairs
            .iter()
            .map(|&(v, e)| ValueWithError::new(v, e))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Build from separate value and error arrays.
    pub fn try_from_columns(values: &[T], errors: &[T]) -> Result<Self, ErrvalError> {
        if values.len() != errors.len() {
            return Err(ErrvalError::MismatchedColumns {
                values_len: values.len(),
                errors_len: errors.len(),
            });
        }
        values
            .iter()
            .zip(errors)
            .map(|(&v, &e)| ValueWithError::new(v, e))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Build from exact values (error 0).
    pub fn from_exact(values: &[T]) -> Self {
        values.iter().map(|&v| ValueWithError::exact(v)).collect()
    }

    /// Append an element.
    pub fn push(&mut self, item: ValueWithError<T>) {
        self.0.push(item);
    }

    /// Central values, in order.
    pub fn values(&self) -> Vec<T> {
        values(&self.0)
    }

    /// Errors, in order.
    pub fn errors(&self) -> Vec<T> {
        errors(&self.0)
    }

    /// Borrow as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[ValueWithError<T>] {
        &self.0
    }

    /// Unwrap into the underlying vector.
    pub fn into_inner(self) -> Vec<ValueWithError<T>> {
        self.0
    }
}

impl<T> Deref for ErrvalList<T> {
    type Target = [ValueWithError<T>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ErrvalList<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<ValueWithError<T>>> for ErrvalList<T> {
    fn from(v: Vec<ValueWithError<T>>) -> Self {
        Self(v)
    }
}

impl<T> FromIterator<ValueWithError<T>> for ErrvalList<T> {
    fn from_iter<I: IntoIterator<Item = ValueWithError<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for ErrvalList<T> {
    type Item = ValueWithError<T>;
    type IntoIter = <Vec<ValueWithError<T>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ErrvalList<T> {
    type Item = &'a ValueWithError<T>;
    type IntoIter = core::slice::Iter<'a, ValueWithError<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
