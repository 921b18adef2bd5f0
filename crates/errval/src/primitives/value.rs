//! The value-with-error type.
//!
//! ## Purpose
//!
//! This module defines [`ValueWithError`], a measured quantity paired with
//! its standard error, and [`Operand`], the tag every binary operation
//! dispatches on (bare number vs. uncertain value).
//!
//! ## Design notes
//!
//! * **Immutable**: value and error are private; every operation returns a new instance.
//! * **Presentation**: the display mode is the only field that can change in place.
//! * **Generics**: Generic over `Float` types, `f64` by default.
//!
//! ## Invariants
//!
//! * The error is never negative. Constructors reject negative and NaN
//!   errors with `InvalidErrorValue`. Only internal results may carry a NaN
//!   error, which marks an unknown uncertainty (see the regression module).
//! * Equality compares value and error only; the display mode is ignored.
//!
//! ## Non-goals
//!
//! * No covariance between instances is tracked.
//! * No parsing from text.

// External dependencies
use core::convert::TryFrom;
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::display::DisplayMode;
use crate::primitives::errors::ErrvalError;

// ============================================================================
// Value With Error
// ============================================================================

/// A value and its non-negative standard error.
#[derive(Debug, Clone, Copy)]
pub struct ValueWithError<T = f64> {
    value: T,
    error: T,
    display_mode: DisplayMode,
}

impl<T: Float> ValueWithError<T> {
    /// Create a value with the given error and the default display mode.
    pub fn new(value: T, error: T) -> Result<Self, ErrvalError> {
        Self::with_display_mode(value, error, DisplayMode::default())
    }

    /// Create a value with the given error and display mode.
    pub fn with_display_mode(value: T, error: T, mode: DisplayMode) -> Result<Self, ErrvalError> {
        if !(error >= T::zero()) {
            return Err(ErrvalError::InvalidErrorValue(
                error.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(Self::from_parts(value, error, mode))
    }

    /// Create an exact value (error 0).
    #[inline]
    pub fn exact(value: T) -> Self {
        Self::from_parts(value, T::zero(), DisplayMode::default())
    }

    /// Copy `source`, optionally overriding its display mode.
    #[inline]
    pub fn from_source(source: &Self, display_mode: Option<DisplayMode>) -> Self {
        Self {
            value: source.value,
            error: source.error,
            display_mode: display_mode.unwrap_or(source.display_mode),
        }
    }

    /// Build from already-validated parts.
    ///
    /// Callers guarantee `error` is not negative (propagation formulas only
    /// produce square roots and absolute values).
    #[inline]
    pub(crate) fn from_parts(value: T, error: T, display_mode: DisplayMode) -> Self {
        debug_assert!(!(error < T::zero()), "negative error {:?}", error.to_f64());
        Self {
            value,
            error,
            display_mode,
        }
    }

    /// The central value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// The standard error.
    #[inline]
    pub fn error(&self) -> T {
        self.error
    }

    /// The current display mode.
    #[inline]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Change the display mode in place.
    #[inline]
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// `(value, error)` pair.
    #[inline]
    pub fn to_tuple(&self) -> (T, T) {
        (self.value, self.error)
    }

    /// True when the error is exactly zero.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.error == T::zero()
    }
}

impl<T: Float> Default for ValueWithError<T> {
    fn default() -> Self {
        Self::exact(T::zero())
    }
}

impl<T: PartialEq> PartialEq for ValueWithError<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.error == other.error
    }
}

impl<T: Float + Display> Display for ValueWithError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.display_mode.render(f, self.value, self.error)
    }
}

impl<T: Float> TryFrom<(T, T)> for ValueWithError<T> {
    type Error = ErrvalError;

    fn try_from((value, error): (T, T)) -> Result<Self, Self::Error> {
        Self::new(value, error)
    }
}

impl<T: Float> TryFrom<(T, T, DisplayMode)> for ValueWithError<T> {
    type Error = ErrvalError;

    fn try_from((value, error, mode): (T, T, DisplayMode)) -> Result<Self, Self::Error> {
        Self::with_display_mode(value, error, mode)
    }
}

// ============================================================================
// Operand
// ============================================================================

/// One side of a binary operation: a bare number or an uncertain value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T = f64> {
    /// A plain number, treated as exact.
    Exact(T),

    /// A value with error.
    Uncertain(ValueWithError<T>),
}

impl<T: Float> Operand<T> {
    /// The central value.
    #[inline]
    pub fn value(&self) -> T {
        match self {
            Operand::Exact(v) => *v,
            Operand::Uncertain(u) => u.value(),
        }
    }

    /// The error (zero for exact operands).
    #[inline]
    pub fn error(&self) -> T {
        match self {
            Operand::Exact(_) => T::zero(),
            Operand::Uncertain(u) => u.error(),
        }
    }

    /// True for the `Uncertain` variant, even when its error is zero.
    #[inline]
    pub fn is_uncertain(&self) -> bool {
        matches!(self, Operand::Uncertain(_))
    }

    /// Name of the variant, used in error messages.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Exact(_) => "number",
            Operand::Uncertain(_) => "ValueWithError",
        }
    }

    /// Coerce to a value with error; exact operands get error 0.
    #[inline]
    pub fn to_value_with_error(self) -> ValueWithError<T> {
        match self {
            Operand::Exact(v) => ValueWithError::exact(v),
            Operand::Uncertain(u) => u,
        }
    }
}

impl<T> From<ValueWithError<T>> for Operand<T> {
    #[inline]
    fn from(v: ValueWithError<T>) -> Self {
        Operand::Uncertain(v)
    }
}

impl<T: Copy> From<&ValueWithError<T>> for Operand<T> {
    #[inline]
    fn from(v: &ValueWithError<T>) -> Self {
        Operand::Uncertain(*v)
    }
}

macro_rules! impl_scalar_conversions {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand<$t> {
                #[inline]
                fn from(v: $t) -> Self {
                    Operand::Exact(v)
                }
            }

            impl From<$t> for ValueWithError<$t> {
                #[inline]
                fn from(v: $t) -> Self {
                    ValueWithError::exact(v)
                }
            }
        )*
    };
}

impl_scalar_conversions!(f32, f64);
