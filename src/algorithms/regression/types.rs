//! Regression Types
//!
//! ## Purpose
//!
//! This module defines the hyperparameters shared by the scalar and general
//! gradient-descent solvers.

// External dependencies
use num_traits::Float;

// ============================================================================
// Hyperparameters
// ============================================================================

/// Step size, ridge penalty and fixed trip count of a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperparameters<T> {
    /// Learning rate α.
    pub learning_rate: T,

    /// Ridge penalty λ (0 disables regularization).
    pub lambda: T,

    /// Number of descent steps. There is no early stopping.
    pub iterations: usize,
}

impl<T: Float> Hyperparameters<T> {
    /// Bundle the three hyperparameters.
    pub fn new(learning_rate: T, lambda: T, iterations: usize) -> Self {
        Self {
            learning_rate,
            lambda,
            iterations,
        }
    }
}
