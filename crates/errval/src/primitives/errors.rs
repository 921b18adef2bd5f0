//! Error types for value-with-error operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building
//! values with uncertainties, combining them, and feeding them to the
//! statistical routines (weighted mean, interpolation, regression).
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value, index or length.
//! * **Immediate**: Every error is raised at the point of detection; nothing is retried.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Construction**: Negative or NaN uncertainties are rejected.
//! 2. **Operand dispatch**: Reflected operations only accept a bare number on the left.
//! 3. **Shape checks**: Interpolation boundaries, sequence ordering, array lengths.
//! 4. **Weighting**: Inverse-variance weights are undefined for zero uncertainties.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Extrapolation is not an error; see `ExtrapolationWarning`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for value-with-error operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrvalError {
    /// A negative or NaN uncertainty was supplied.
    InvalidErrorValue(f64),

    /// The operand kind is not supported by the requested operation.
    UnsupportedOperandType {
        /// Operator symbol, e.g. `"-"`.
        operation: &'static str,
        /// Kind of the rejected operand.
        operand: &'static str,
    },

    /// Interpolation boundaries must be `(x, y)` pairs.
    InvalidBoundaryFormat {
        /// Number of coordinates actually supplied.
        got: usize,
    },

    /// A sequence does not have the shape an operation requires.
    TypeMismatch(String),

    /// Regression arrays have different lengths.
    LengthMismatch {
        /// Length of the x array.
        x_len: usize,
        /// Length of the y array.
        y_len: usize,
        /// Length of the uncertainty array.
        sigma_len: usize,
    },

    /// Abscissae and ordinates have different lengths.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Value and error columns have different lengths.
    MismatchedColumns {
        /// Number of values.
        values_len: usize,
        /// Number of errors.
        errors_len: usize,
    },

    /// A sample with zero uncertainty cannot be inverse-variance weighted.
    ZeroUncertainty {
        /// Index of the first offending sample.
        index: usize,
    },

    /// Weighted mean over an element with zero uncertainty.
    DivisionByZero {
        /// Index of the first offending element.
        index: usize,
    },

    /// Input sequence is empty.
    EmptyInput,

    /// Number of points is below the minimum the operation requires.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Gather index outside the source sequence.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the source sequence.
        len: usize,
    },

    /// Exact search found no element equal to the target.
    NoExactMatch(f64),

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ErrvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidErrorValue(err) => {
                write!(f, "Invalid error value: {err} (must be a number >= 0)")
            }
            Self::UnsupportedOperandType { operation, operand } => {
                write!(
                    f,
                    "Unsupported operand type for {operation}: {operand} with ValueWithError"
                )
            }
            Self::InvalidBoundaryFormat { got } => {
                write!(
                    f,
                    "Invalid boundary: expected an (x, y) pair, got {got} coordinates"
                )
            }
            Self::TypeMismatch(msg) => write!(f, "Type mismatch: {msg}"),
            Self::LengthMismatch {
                x_len,
                y_len,
                sigma_len,
            } => {
                write!(
                    f,
                    "Length mismatch: x has {x_len} points, y has {y_len}, sigma has {sigma_len}"
                )
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::MismatchedColumns {
                values_len,
                errors_len,
            } => {
                write!(
                    f,
                    "Length mismatch: {values_len} values but {errors_len} errors"
                )
            }
            Self::ZeroUncertainty { index } => {
                write!(
                    f,
                    "Zero uncertainty at index {index}: inverse-variance weight is undefined"
                )
            }
            Self::DivisionByZero { index } => {
                write!(f, "Division by zero: element {index} has zero error")
            }
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds for sequence of length {len}")
            }
            Self::NoExactMatch(target) => {
                write!(f, "No element is exactly equal to {target}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ErrvalError {}
