//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution modes built on top of the engine:
//! - Batch: fit from a complete in-memory dataset
//! - Aggregate: fold observations into statistics incrementally, combine
//!   partial aggregates, and solve once at the end
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Incremental aggregate lifecycle.
pub mod aggregate;

/// Whole-dataset execution.
pub mod batch;
