//! First-order error propagation for the arithmetic operators.
//!
//! ## Purpose
//!
//! This module implements the binary operations on [`ValueWithError`]:
//! addition, subtraction, multiplication, division and power, in forward
//! and reflected form, plus the `std::ops` operators built on them.
//!
//! ## Design notes
//!
//! * **Dispatch**: every operation matches on [`Operand`]; a bare number is
//!   exact and contributes no error term.
//! * **Left operand wins**: results carry the display mode of `self`.
//! * **IEEE-754**: division by zero and powers of negative bases are not
//!   intercepted; they yield `inf`/`NaN` like plain floats.
//!
//! ## Key concepts
//!
//! For independent errors, `σ_f = sqrt(Σ (∂f/∂x_i · σ_i)²)`:
//!
//! ```text
//! a ± b : σ = sqrt(σa² + σb²)
//! a · b : σ = sqrt((b·σa)² + (a·σb)²)
//! a / b : σ = sqrt((σa/b)² + (a·σb/b²)²)
//! a ^ b : σ = sqrt((b·a^(b-1)·σa)² + (ln(a)·a^b·σb)²)
//! ```
//!
//! ## Non-goals
//!
//! * No correlation between operands is tracked; `a - a` has error `sqrt(2)·σa`.

// External dependencies
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ErrvalError;
use crate::primitives::value::{Operand, ValueWithError};

// ============================================================================
// Forward Operations
// ============================================================================

impl<T: Float> ValueWithError<T> {
    #[inline]
    fn derive(&self, value: T, error: T) -> Self {
        ValueWithError::from_parts(value, error, self.display_mode())
    }

    /// `self + rhs`.
    pub fn plus(&self, rhs: impl Into<Operand<T>>) -> Self {
        match rhs.into() {
            Operand::Exact(s) => self.derive(self.value() + s, self.error()),
            Operand::Uncertain(o) => self.derive(
                self.value() + o.value(),
                self.error().hypot(o.error()),
            ),
        }
    }

    /// `self - rhs`.
    pub fn minus(&self, rhs: impl Into<Operand<T>>) -> Self {
        match rhs.into() {
            Operand::Exact(s) => self.derive(self.value() - s, self.error()),
            Operand::Uncertain(o) => self.derive(
                self.value() - o.value(),
                self.error().hypot(o.error()),
            ),
        }
    }

    /// `self * rhs`.
    pub fn times(&self, rhs: impl Into<Operand<T>>) -> Self {
        match rhs.into() {
            Operand::Exact(s) => self.derive(self.value() * s, self.error() * s.abs()),
            Operand::Uncertain(o) => {
                let (v1, e1, v2, e2) = (self.value(), self.error(), o.value(), o.error());
                self.derive(v1 * v2, (v2 * e1).hypot(v1 * e2))
            }
        }
    }

    /// `self / rhs`.
    pub fn divided_by(&self, rhs: impl Into<Operand<T>>) -> Self {
        match rhs.into() {
            Operand::Exact(s) => self.derive(self.value() / s, self.error() / s.abs()),
            Operand::Uncertain(o) => {
                let (v1, e1, v2, e2) = (self.value(), self.error(), o.value(), o.error());
                self.derive(v1 / v2, (e1 / v2).hypot(v1 * e2 / (v2 * v2)))
            }
        }
    }

    /// `self ^ exponent`.
    ///
    /// A bare-number exponent drops the `ln(self)` term, so negative bases
    /// with exact exponents keep a finite error.
    pub fn pow(&self, exponent: impl Into<Operand<T>>) -> Self {
        let (v1, e1) = (self.value(), self.error());
        match exponent.into() {
            Operand::Exact(p) => {
                let dv = p * v1.powf(p - T::one()) * e1;
                self.derive(v1.powf(p), dv.abs())
            }
            Operand::Uncertain(o) => {
                let (v2, e2) = (o.value(), o.error());
                let value = v1.powf(v2);
                let d_base = v2 * v1.powf(v2 - T::one()) * e1;
                let d_exp = v1.ln() * value * e2;
                self.derive(value, d_base.hypot(d_exp))
            }
        }
    }

    // ========================================================================
    // Reflected Operations
    // ========================================================================

    /// `lhs - self` for a bare-number `lhs`.
    ///
    /// Only the value is negated; the error is the error of `self`.
    pub fn rsub(&self, lhs: impl Into<Operand<T>>) -> Result<Self, ErrvalError> {
        let s = Self::reflected_scalar(lhs.into(), "-")?;
        Ok(self.subtracted_from(s))
    }

    /// `lhs / self` for a bare-number `lhs`.
    pub fn rdiv(&self, lhs: impl Into<Operand<T>>) -> Result<Self, ErrvalError> {
        let s = Self::reflected_scalar(lhs.into(), "/")?;
        Ok(self.dividing(s))
    }

    /// `lhs ^ self` for a bare-number `lhs`.
    pub fn rpow(&self, lhs: impl Into<Operand<T>>) -> Result<Self, ErrvalError> {
        let s = Self::reflected_scalar(lhs.into(), "**")?;
        let value = s.powf(self.value());
        Ok(self.derive(value, (s.ln() * value * self.error()).abs()))
    }

    #[inline]
    fn subtracted_from(&self, s: T) -> Self {
        self.derive(s - self.value(), self.error())
    }

    #[inline]
    fn dividing(&self, s: T) -> Self {
        let v1 = self.value();
        self.derive(s / v1, s.abs() / (v1 * v1) * self.error())
    }

    /// Reflected forms exist only for a bare number on the left; an
    /// uncertain left operand uses its own forward operation instead.
    fn reflected_scalar(lhs: Operand<T>, operation: &'static str) -> Result<T, ErrvalError> {
        match lhs {
            Operand::Exact(s) => Ok(s),
            other @ Operand::Uncertain(_) => Err(ErrvalError::UnsupportedOperandType {
                operation,
                operand: other.kind(),
            }),
        }
    }
}

// ============================================================================
// Operator Overloads
// ============================================================================

impl<T: Float> Add for ValueWithError<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl<T: Float> Sub for ValueWithError<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

impl<T: Float> Mul for ValueWithError<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

impl<T: Float> Div for ValueWithError<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.divided_by(rhs)
    }
}

impl<T: Float> Neg for ValueWithError<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.derive(-self.value(), self.error())
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for ValueWithError<$t> {
                type Output = Self;

                fn add(self, rhs: $t) -> Self::Output {
                    self.plus(rhs)
                }
            }

            impl Sub<$t> for ValueWithError<$t> {
                type Output = Self;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.minus(rhs)
                }
            }

            impl Mul<$t> for ValueWithError<$t> {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.times(rhs)
                }
            }

            impl Div<$t> for ValueWithError<$t> {
                type Output = Self;

                fn div(self, rhs: $t) -> Self::Output {
                    self.divided_by(rhs)
                }
            }

            // Reflected forms: the number sits on the left, the result keeps
            // the display mode of the value with error.
            impl Add<ValueWithError<$t>> for $t {
                type Output = ValueWithError<$t>;

                fn add(self, rhs: ValueWithError<$t>) -> Self::Output {
                    rhs.plus(self)
                }
            }

            impl Sub<ValueWithError<$t>> for $t {
                type Output = ValueWithError<$t>;

                fn sub(self, rhs: ValueWithError<$t>) -> Self::Output {
                    rhs.subtracted_from(self)
                }
            }

            impl Mul<ValueWithError<$t>> for $t {
                type Output = ValueWithError<$t>;

                fn mul(self, rhs: ValueWithError<$t>) -> Self::Output {
                    rhs.times(self)
                }
            }

            impl Div<ValueWithError<$t>> for $t {
                type Output = ValueWithError<$t>;

                fn div(self, rhs: ValueWithError<$t>) -> Self::Output {
                    rhs.dividing(self)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);
