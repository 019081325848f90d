//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a solve and shapes its output:
//! - Validation of data and hyperparameters
//! - The `AccumulatingStatistics → Iterating → Done` pipeline
//! - The result type and its text rendering
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Solve orchestration.
pub mod executor;

/// Result type and formatting.
pub mod output;

/// Input and parameter validation.
pub mod validator;
