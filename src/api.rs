//! High-level API for ridge regression.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the two plain fit
//! functions, and a fluent builder that ends in an execution adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; everything except `iterations` has a default.
//! * **Polymorphic**: Marker types transition to adapter-specific builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Aggregate modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RidgeBuilder`] via `Ridge::new()`.
//! 2. Chain configuration methods (`.learning_rate()`, `.iterations()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::accumulators::StatsLinalg;
use crate::engine::executor::{RidgeConfig, RidgeExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::aggregate::{AggregateRidgeBuilder, RidgeAggregate};
pub use crate::adapters::batch::{BatchRidge, BatchRidgeBuilder};
pub use crate::algorithms::regression::{GradientDescent, Hyperparameters, ScalarGradientDescent};
pub use crate::algorithms::statistics::{ScalarStatistics, SufficientStatistics};
pub use crate::engine::output::RidgeResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::RidgeError;
pub use crate::primitives::matrix::Matrix;

/// Pure matrix operations.
pub mod algebra {
    pub use crate::math::algebra::{add, multiply, scalar_multiply, subtract};
}

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Aggregate, Batch};
}

// ============================================================================
// Plain Fit Functions
// ============================================================================

/// Fit a single weight to integer features and labels.
///
/// Runs exactly `iterations` steps of `θ ← θ − α·((1/n)(Σθ − C) + λθ)`
/// from `θ = 1`, where `Σ = Σxᵢ²` and `C = Σxᵢyᵢ`.
pub fn fit_1d<T: Float>(
    features: &[i32],
    labels: &[i32],
    alpha: T,
    lambda: T,
    iterations: usize,
) -> Result<T, RidgeError> {
    let params = Hyperparameters::new(alpha, lambda, iterations);
    Validator::validate_hyperparameters(&params)?;
    Validator::validate_scalar_inputs(features, labels)?;

    RidgeExecutor::run_scalar(features, labels, params)
}

/// Fit `d` weights to an `n x d` feature set and `n x 1` label set.
///
/// Returns the `d x 1` weight vector.
pub fn fit_nd<T: StatsLinalg>(
    features: &Matrix<T>,
    labels: &Matrix<T>,
    alpha: T,
    lambda: T,
    iterations: usize,
) -> Result<Matrix<T>, RidgeError> {
    let params = Hyperparameters::new(alpha, lambda, iterations);
    Validator::validate_hyperparameters(&params)?;
    Validator::validate_inputs(features, labels)?;

    let config = RidgeConfig {
        hyperparameters: params,
        return_diagnostics: false,
    };
    Ok(RidgeExecutor::run_with_config(features, labels, config)?.theta)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring ridge parameters and execution modes.
#[derive(Debug, Clone)]
pub struct RidgeBuilder<T: StatsLinalg + Debug> {
    /// Learning rate α (default: 0.01).
    pub learning_rate: Option<T>,

    /// Ridge penalty λ (default: 0).
    pub lambda: Option<T>,

    /// Number of descent steps. Required.
    pub iterations: Option<usize>,

    /// Number of features. Required by the aggregate adapter.
    pub dimensions: Option<usize>,

    /// Compute diagnostics after the fit.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: StatsLinalg + Debug> Default for RidgeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StatsLinalg + Debug> RidgeBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: RidgeAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            learning_rate: None,
            lambda: None,
            iterations: None,
            dimensions: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the learning rate α.
    pub fn learning_rate(mut self, alpha: T) -> Self {
        if self.learning_rate.is_some() {
            self.duplicate_param = Some("learning_rate");
        }
        self.learning_rate = Some(alpha);
        self
    }

    /// Set the ridge penalty λ (0 disables regularization).
    pub fn lambda(mut self, lambda: T) -> Self {
        if self.lambda.is_some() {
            self.duplicate_param = Some("lambda");
        }
        self.lambda = Some(lambda);
        self
    }

    /// Set the number of descent steps.
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the number of features.
    pub fn dimensions(mut self, dims: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dims);
        self
    }

    /// Include diagnostics (gradient norm, RMSE, MAE, R²) in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait RidgeAdapter<T: StatsLinalg + Debug> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RidgeBuilder`] into a specialized execution builder.
    fn convert(builder: RidgeBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: StatsLinalg + Debug> RidgeAdapter<T> for Batch {
    type Output = BatchRidgeBuilder<T>;

    fn convert(builder: RidgeBuilder<T>) -> Self::Output {
        let mut result = BatchRidgeBuilder::default();

        if let Some(alpha) = builder.learning_rate {
            result.learning_rate = alpha;
        }
        if let Some(lambda) = builder.lambda {
            result.lambda = lambda;
        }
        result.iterations = builder.iterations;
        result.dimensions = builder.dimensions;
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental aggregation over partitions.
#[derive(Debug, Clone, Copy)]
pub struct Aggregate;

impl<T: StatsLinalg + Debug> RidgeAdapter<T> for Aggregate {
    type Output = AggregateRidgeBuilder<T>;

    fn convert(builder: RidgeBuilder<T>) -> Self::Output {
        let mut result = AggregateRidgeBuilder::default();

        if let Some(alpha) = builder.learning_rate {
            result.learning_rate = alpha;
        }
        if let Some(lambda) = builder.lambda {
            result.lambda = lambda;
        }
        result.iterations = builder.iterations;
        result.dimensions = builder.dimensions;
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
