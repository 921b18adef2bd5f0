//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs and orchestrates the regression run,
//! including the choice between sequential and parallel execution.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Regression execution.
pub mod executor;
