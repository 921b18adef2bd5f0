//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value type, the sequence abstraction, the error
//! taxonomy and the sorting utilities used throughout the crate. It has
//! zero internal dependencies on the higher layers.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Presentation modes.
pub mod display;

/// The value-with-error type and operand tag.
pub mod value;

/// Owned sequences and projections.
pub mod sequence;

/// Sorting utilities.
pub mod sorting;
