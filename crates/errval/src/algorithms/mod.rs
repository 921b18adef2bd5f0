//! Layer 3: Algorithms
//!
//! This layer implements the statistical routines built on the value type:
//! closest-match search, the weighted mean, interpolation and the weighted
//! linear regression. Regression runs are orchestrated by the engine layer.

// Closest-match search.
pub mod search;

// Inverse-variance weighted mean.
pub mod mean;

// Linear and piecewise interpolation.
pub mod interpolation;

// Weighted least squares and jackknife errors.
pub mod regression;
