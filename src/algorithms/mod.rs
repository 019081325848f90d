//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the numeric core of ridge regression:
//! - Accumulation kernels reducing data into `XᵀX` and `Xᵀy`
//! - Sufficient-statistics types with update and merge
//! - The gradient-descent solver
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scalar and SIMD accumulation kernels.
pub mod accumulators;

/// Gradient-descent solver.
pub mod regression;

/// Sufficient statistics.
pub mod statistics;
