//! Linear interpolation with uncertain coordinates.
//!
//! ## Purpose
//!
//! This module interpolates (and extrapolates) linearly between two points
//! whose coordinates may carry errors, and piecewise across an ascending
//! sequence of abscissae.
//!
//! ## Design notes
//!
//! * **Exact fast path**: if no coordinate is uncertain, plain linear
//!   interpolation is used and the result is exact.
//! * **Error blend**: otherwise the error is a linear blend of the endpoint
//!   errors, `e(y0) + s·|e(y1) - e(y0)|` with `s = (v - x0)/(x1 - x0)`.
//!   This is a known simplification, not Gaussian propagation; x errors do
//!   not contribute. Below `x0` the blend can drop under zero and is
//!   floored at zero.
//! * **Degenerate bracket**: `x0 == x1` returns `y0` unchanged.
//! * **Soft extrapolation**: piecewise interpolation outside the x-range
//!   clamps to the boundary pair and reports an [`ExtrapolationWarning`].
//!
//! ## Key concepts
//!
//! * **Bracket search**: `i0 = #{x_i <= v}`; the pair is `(i0 - 1, i0)`
//!   clamped into `[0, n - 1]`.
//! * **Linear Interpolation**: `y = y0 + s · (y1 - y0)`.
//!
//! ## Invariants
//!
//! * Abscissae must be in ascending order.
//! * Extrapolation never fails; the blended error is never negative.
//!
//! ## Non-goals
//!
//! * This module does not provide higher-order interpolation.
//! * This module does not sort the input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ErrvalError;
use crate::primitives::value::{Operand, ValueWithError};

// ============================================================================
// Data Structures
// ============================================================================

/// An `(x, y)` interpolation boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T = f64> {
    /// Abscissa.
    pub x: Operand<T>,

    /// Ordinate.
    pub y: Operand<T>,
}

impl<T: Float> Point<T> {
    /// Create a point from any mix of bare numbers and uncertain values.
    pub fn new(x: impl Into<Operand<T>>, y: impl Into<Operand<T>>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Create a point from a coordinate slice, which must hold exactly two entries.
    pub fn from_slice(coords: &[Operand<T>]) -> Result<Self, ErrvalError> {
        match coords {
            [x, y] => Ok(Self { x: *x, y: *y }),
            _ => Err(ErrvalError::InvalidBoundaryFormat { got: coords.len() }),
        }
    }

    /// True if either coordinate is uncertain.
    #[inline]
    pub fn is_uncertain(&self) -> bool {
        self.x.is_uncertain() || self.y.is_uncertain()
    }
}

impl<T, A, B> From<(A, B)> for Point<T>
where
    T: Float,
    A: Into<Operand<T>>,
    B: Into<Operand<T>>,
{
    fn from((x, y): (A, B)) -> Self {
        Point::new(x, y)
    }
}

/// Soft warning: the requested abscissa lies outside the known range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrapolationWarning<T = f64> {
    /// The requested abscissa.
    pub requested: T,

    /// First abscissa of the sequence.
    pub lower: T,

    /// Last abscissa of the sequence.
    pub upper: T,
}

impl<T: Float + Display> Display for ExtrapolationWarning<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let side = if self.requested < self.lower {
            "below"
        } else {
            "above"
        };
        write!(
            f,
            "Extrapolating: {} is {} the interpolation range [{}, {}]",
            self.requested, side, self.lower, self.upper
        )
    }
}

/// Result of a piecewise interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolated<T = f64> {
    /// Interpolated value.
    pub value: ValueWithError<T>,

    /// Set when the abscissa was outside the range and warnings were requested.
    pub warning: Option<ExtrapolationWarning<T>>,
}

impl<T> Interpolated<T> {
    /// True if an extrapolation warning was raised.
    #[inline]
    pub fn is_extrapolated(&self) -> bool {
        self.warning.is_some()
    }
}

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Interpolate linearly at `v` between two points.
///
/// # Special cases
///
/// * **All exact**: plain linear interpolation; the result has error 0.
/// * **Tied x-values**: `x0 == x1` returns `y0` as given.
/// * **Outside `[x0, x1]`**: extrapolates; a blended error below zero is
///   floored at zero.
pub fn interp<T: Float>(
    v: T,
    point0: impl Into<Point<T>>,
    point1: impl Into<Point<T>>,
) -> Result<ValueWithError<T>, ErrvalError> {
    let (p0, p1) = (point0.into(), point1.into());

    let (x0, x1) = (p0.x.value(), p1.x.value());
    if x1 == x0 {
        return Ok(p0.y.to_value_with_error());
    }

    let scaling = (v - x0) / (x1 - x0);

    if !p0.is_uncertain() && !p1.is_uncertain() {
        let (y0, y1) = (p0.y.value(), p1.y.value());
        return Ok(ValueWithError::exact(y0 + scaling * (y1 - y0)));
    }

    let (y0, y1) = (p0.y.to_value_with_error(), p1.y.to_value_with_error());
    let y = y0.value() + scaling * (y1.value() - y0.value());
    let blend = y0.error() + scaling * (y1.error() - y0.error()).abs();
    let error = if blend < T::zero() { T::zero() } else { blend };

    Ok(ValueWithError::from_parts(y, error, Default::default()))
}

/// Piecewise linear interpolation at `v` over ascending `xs` and matching `ys`.
///
/// Outside `[xs[0], xs[n - 1]]` the boundary pair is extrapolated; with
/// `warn_on_extrapolation` the result then carries an [`ExtrapolationWarning`].
pub fn interp_sequence<T, X>(
    v: T,
    xs: &[X],
    ys: &[ValueWithError<T>],
    warn_on_extrapolation: bool,
) -> Result<Interpolated<T>, ErrvalError>
where
    T: Float,
    X: Copy + Into<Operand<T>>,
{
    let n = xs.len();
    if n != ys.len() {
        return Err(ErrvalError::MismatchedInputs {
            x_len: n,
            y_len: ys.len(),
        });
    }
    if n < 2 {
        return Err(ErrvalError::TooFewPoints { got: n, min: 2 });
    }

    // Errors on the abscissae never reach the result
    let x: Vec<T> = xs.iter().map(|&xi| xi.into().value()).collect();
    if let Some(i) = x.windows(2).position(|w| !(w[0] <= w[1])) {
        return Err(ErrvalError::TypeMismatch(format!(
            "xs must be an ascending sequence, but xs[{}]={} precedes xs[{}]={}",
            i,
            x[i].to_f64().unwrap_or(f64::NAN),
            i + 1,
            x[i + 1].to_f64().unwrap_or(f64::NAN)
        )));
    }

    // Count how many abscissae lie at or below v, then clamp the bracket
    let i0 = x.iter().filter(|&&xi| xi <= v).count();
    let lo = i0.saturating_sub(1).min(n - 2);
    let hi = lo + 1;

    let (lower, upper) = (x[0], x[n - 1]);
    let warning = if warn_on_extrapolation && (v < lower || v > upper) {
        Some(ExtrapolationWarning {
            requested: v,
            lower,
            upper,
        })
    } else {
        None
    };

    let value = interp(
        v,
        Point::new(Operand::Exact(x[lo]), ys[lo]),
        Point::new(Operand::Exact(x[hi]), ys[hi]),
    )?;

    Ok(Interpolated { value, warning })
}
