//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the error-propagation algebra:
//! - Binary operators (forward, reflected and `std::ops`)
//! - Elementary functions (abs, logarithms, square root, rounding)
//!
//! These are the building blocks every higher layer computes with.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Propagation rules for the arithmetic operators.
pub mod propagation;

/// Elementary functions with propagated errors.
pub mod functions;
