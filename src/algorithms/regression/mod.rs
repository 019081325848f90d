//! Regression Module
//!
//! ## Purpose
//!
//! This module provides the gradient-descent solver for ridge regression,
//! in a scalar form for one feature and a general form for `d` features.
//!
//! ## Features
//!
//! - Ridge gradient evaluated from sufficient statistics.
//! - Fixed-length descent loop with per-step access.
//! - Shared hyperparameter type.

/// Gradient formulas
mod gradient;

/// Descent loop
mod solver;

/// Regression Types
mod types;

/// Re-exports
pub use gradient::{data_gradient, gradient, gradient_scalar};
pub use solver::{GradientDescent, ScalarGradientDescent};
pub use types::Hyperparameters;
