//! Batch gradient descent over sufficient statistics.
//!
//! ## Purpose
//!
//! This module runs the fixed-length descent loop
//! `θ ← θ − α · ((1/n)(Σθ − C) + λθ)` starting from `θ = 1`, in a scalar form
//! for one feature and a general form over `d x 1` weight vectors.
//!
//! ## Design notes
//!
//! * **Fixed trip count**: Exactly `iterations` updates; no convergence test,
//!   no cost evaluation, no early exit.
//! * **Observable**: `gradient` and `step` are public so a caller can drive
//!   the loop one iteration at a time.
//! * **Silent divergence**: Non-finite weights are returned unchanged.
//!
//! ## Invariants
//!
//! * The statistics are borrowed immutably for the whole solve.
//! * Every iteration costs `O(d²)`, independent of the number of observations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use super::{Hyperparameters, gradient, gradient_scalar};
use crate::algorithms::accumulators::StatsLinalg;
use crate::algorithms::statistics::{ScalarStatistics, SufficientStatistics};
use crate::math::algebra;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// General Form
// ============================================================================

/// Gradient descent over `d x d` statistics.
#[derive(Debug, Clone)]
pub struct GradientDescent<'a, T> {
    stats: &'a SufficientStatistics<T>,
    params: Hyperparameters<T>,
    inv_n: T,
}

impl<'a, T: StatsLinalg> GradientDescent<'a, T> {
    /// Prepare a solve. Fails with `EmptyDataset` when `stats` has no observations.
    pub fn new(
        stats: &'a SufficientStatistics<T>,
        params: Hyperparameters<T>,
    ) -> Result<Self, RidgeError> {
        let inv_n = stats.inverse_count().ok_or(RidgeError::EmptyDataset)?;
        Ok(Self {
            stats,
            params,
            inv_n,
        })
    }

    /// Starting weights: a `d x 1` vector of ones.
    pub fn initial_weights(&self) -> Result<Matrix<T>, RidgeError> {
        Matrix::ones(self.stats.dimensions(), 1)
    }

    /// Ridge gradient at `theta`.
    pub fn gradient(&self, theta: &Matrix<T>) -> Result<Matrix<T>, RidgeError> {
        gradient(
            self.stats.sigma(),
            self.stats.c(),
            theta,
            self.inv_n,
            self.params.lambda,
        )
    }

    /// One update `θ − α·g`.
    pub fn step(&self, theta: &Matrix<T>) -> Result<Matrix<T>, RidgeError> {
        let g = self.gradient(theta)?;
        let delta = algebra::scalar_multiply(&g, self.params.learning_rate);
        algebra::subtract(theta, &delta)
    }

    /// Run all iterations from the initial weights.
    pub fn run(&self) -> Result<Matrix<T>, RidgeError> {
        let mut theta = self.initial_weights()?;
        for _ in 0..self.params.iterations {
            theta = self.step(&theta)?;
        }
        Ok(theta)
    }

    /// Hyperparameters of this solve.
    pub fn params(&self) -> &Hyperparameters<T> {
        &self.params
    }
}

// ============================================================================
// Scalar Form
// ============================================================================

/// Gradient descent for a single feature.
#[derive(Debug, Clone, Copy)]
pub struct ScalarGradientDescent<T> {
    stats: ScalarStatistics<T>,
    params: Hyperparameters<T>,
    inv_n: T,
}

impl<T: Float> ScalarGradientDescent<T> {
    /// Prepare a solve. Fails with `EmptyDataset` when `stats` has no observations.
    pub fn new(stats: ScalarStatistics<T>, params: Hyperparameters<T>) -> Result<Self, RidgeError> {
        let inv_n = stats.inverse_count().ok_or(RidgeError::EmptyDataset)?;
        Ok(Self {
            stats,
            params,
            inv_n,
        })
    }

    /// Starting weight.
    #[inline]
    pub fn initial_weight(&self) -> T {
        T::one()
    }

    /// Ridge gradient at `theta`.
    #[inline]
    pub fn gradient(&self, theta: T) -> T {
        gradient_scalar(
            self.stats.sigma,
            self.stats.c,
            theta,
            self.inv_n,
            self.params.lambda,
        )
    }

    /// One update `θ − α·g`.
    #[inline]
    pub fn step(&self, theta: T) -> T {
        theta - self.gradient(theta) * self.params.learning_rate
    }

    /// Run all iterations from the initial weight.
    pub fn run(&self) -> T {
        (0..self.params.iterations).fold(self.initial_weight(), |theta, _| self.step(theta))
    }
}
