//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing of a finished fit:
//! - Gradient-norm stationarity check from the sufficient statistics
//! - Residual metrics (RMSE, MAE, R²) when the raw data is at hand
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit diagnostics.
pub mod diagnostics;
