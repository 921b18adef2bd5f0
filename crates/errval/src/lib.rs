//! # errval — values with standard errors for Rust
//!
//! A measured quantity together with its standard error, and first-order
//! propagation of that error through arithmetic, elementary functions,
//! weighted means, interpolation and weighted linear regression.
//!
//! ## What is error propagation?
//!
//! For independent, Gaussian-approximated errors, a function `f(x_1, ..., x_n)`
//! of uncertain inputs has the linearized standard error
//!
//! ```text
//! σ_f = sqrt( Σ (∂f/∂x_i)² σ_i² )
//! ```
//!
//! Every operation in this crate applies that rule (with the documented
//! exception of the interpolation error blend).
//!
//! ## Quick Start
//!
//! ### Arithmetic
//!
//! ```rust
//! use errval::prelude::*;
//!
//! let mass = ValueWithError::new(5.0_f64, 0.1)?;
//! let accel = ValueWithError::new(9.81, 0.02)?;
//!
//! // σ = sqrt((9.81·0.1)² + (5·0.02)²)
//! let force = mass * accel;
//! assert!((force.value() - 49.05).abs() < 1e-12);
//! assert!((force.error() - 0.986_084).abs() < 1e-5);
//!
//! // Bare numbers are exact
//! let doubled = 2.0 * mass;
//! assert_eq!(doubled.error(), 0.2);
//!
//! println!("{}", force); // 49.05 \pm 0.98608...
//! # Result::<(), ErrvalError>::Ok(())
//! ```
//!
//! ### Regression
//!
//! ```rust
//! use errval::prelude::*;
//!
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let y = [2.0, 5.0, 8.0, 11.0, 14.0];
//! let sigma = [0.1; 5];
//!
//! let model = LinReg::new().overwrite_zero_errors(false).build()?;
//! let fit = model.fit(&x, &y, &sigma)?;
//!
//! assert!((fit.intercept.value() - 2.0).abs() < 1e-9);
//! assert!((fit.slope.value() - 3.0).abs() < 1e-9);
//! println!("{}", fit);
//! # Result::<(), ErrvalError>::Ok(())
//! ```
//!
//! ### Interpolation
//!
//! ```rust
//! use errval::prelude::*;
//!
//! let xs = [1.0_f64, 2.0, 3.0];
//! let ys = ErrvalList::try_from_pairs(&[(10.0, 1.0), (20.0, 1.0), (30.0, 1.0)])?;
//!
//! let result = Interpolator::new().build()?.at(3.5, &xs, ys.as_slice())?;
//! assert!((result.value.value() - 35.0).abs() < 1e-12);
//! if let Some(warning) = result.warning {
//!     eprintln!("{}", warning);
//! }
//! # Result::<(), ErrvalError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, ErrvalError>`. Extrapolation is not
//! an error: it is reported through [`prelude::ExtrapolationWarning`].
//!
//! ## Features
//!
//! * `std` (default): standard library support. Disable for `no_std` + `alloc`.
//! * `cpu`: parallel jackknife on the `rayon` thread pool.
//! * `dev`: exposes the internal layers under `errval::internals`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - value type, sequences, errors and sorting.
mod primitives;

// Layer 2: Math - error propagation algebra.
mod math;

// Layer 3: Algorithms - search, weighted mean, interpolation, regression.
mod algorithms;

// Layer 4: Engine - validation and regression execution.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        closest, interp, interp_sequence, linreg, max, min, reorder, sort_by_value,
        sorting_indices, weighted_mean, DisplayMode, ErrvalError, ErrvalList,
        ExtrapolationWarning, Interpolated, InterpolatorBuilder as Interpolator,
        LinRegBuilder as LinReg, LinRegModel, Operand, PiecewiseInterpolator, Point,
        Regression, RegressionConfig, SearchMode, ValueWithError,
    };
    pub use crate::primitives::sequence::{errors, tuples, values};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
