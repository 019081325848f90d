//! Batch adapter for whole-dataset ridge fits.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It takes a complete
//! feature set and label set in memory, reduces them to sufficient statistics
//! and runs the descent loop.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, accumulates and iterates in a single call.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **General fit**: `fit` over an `n x d` feature matrix.
//! * **Scalar fit**: `fit_1d` over integer features and labels.
//!
//! ## Invariants
//!
//! * Features and labels have the same number of observations.
//! * At least one observation is required.
//! * Either complete weights are returned or an error; never partial output.
//!
//! ## Non-goals
//!
//! * This adapter does not merge partial results (use the aggregate adapter).
//! * This adapter does not stop early.

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::algorithms::accumulators::StatsLinalg;
use crate::algorithms::regression::Hyperparameters;
use crate::engine::executor::{RidgeConfig, RidgeExecutor};
use crate::engine::output::RidgeResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Batch Ridge Builder
// ============================================================================

/// Builder for batch ridge processor.
#[derive(Debug, Clone)]
pub struct BatchRidgeBuilder<T: StatsLinalg> {
    /// Learning rate α
    pub learning_rate: T,

    /// Ridge penalty λ
    pub lambda: T,

    /// Number of descent steps (required)
    pub iterations: Option<usize>,

    /// Expected number of features, checked against the data when set
    pub dimensions: Option<usize>,

    /// Whether to compute diagnostic statistics
    pub return_diagnostics: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: StatsLinalg + Debug> Default for BatchRidgeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StatsLinalg + Debug> BatchRidgeBuilder<T> {
    /// Create a new batch ridge builder with default parameters.
    fn new() -> Self {
        Self {
            learning_rate: T::from(0.01).unwrap_or_else(T::epsilon),
            lambda: T::zero(),
            iterations: None,
            dimensions: None,
            return_diagnostics: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the learning rate α.
    pub fn learning_rate(mut self, alpha: T) -> Self {
        self.learning_rate = alpha;
        self
    }

    /// Set the ridge penalty λ.
    pub fn lambda(mut self, lambda: T) -> Self {
        self.lambda = lambda;
        self
    }

    /// Set the number of descent steps.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Set the expected number of features.
    pub fn dimensions(mut self, dims: usize) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchRidge<T>, RidgeError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Iteration count has no default
        let iterations = Validator::validate_required(self.iterations, "iterations")?;

        let params = Hyperparameters::new(self.learning_rate, self.lambda, iterations);
        Validator::validate_hyperparameters(&params)?;

        if let Some(dims) = self.dimensions {
            Validator::validate_feature_count(dims)?;
        }

        Ok(BatchRidge {
            config: RidgeConfig {
                hyperparameters: params,
                return_diagnostics: self.return_diagnostics,
            },
            dimensions: self.dimensions,
        })
    }
}

// ============================================================================
// Batch Ridge Processor
// ============================================================================

/// Batch ridge processor.
#[derive(Debug, Clone)]
pub struct BatchRidge<T> {
    config: RidgeConfig<T>,
    dimensions: Option<usize>,
}

impl<T: StatsLinalg + Debug> BatchRidge<T> {
    /// Fit weights to an `n x d` feature set and `n x 1` label set.
    pub fn fit(&self, features: &Matrix<T>, labels: &Matrix<T>) -> Result<RidgeResult<T>, RidgeError> {
        Validator::validate_inputs(features, labels)?;
        if let Some(dims) = self.dimensions {
            Validator::validate_dimensions(features, dims)?;
        }

        let output = RidgeExecutor::run_with_config(features, labels, self.config)?;

        let params = self.config.hyperparameters;
        Ok(RidgeResult {
            theta: output.theta,
            n_observations: output.statistics.n(),
            learning_rate: params.learning_rate,
            lambda: params.lambda,
            iterations: params.iterations,
            diagnostics: output.diagnostics,
        })
    }

    /// Fit a single weight to integer features and labels.
    pub fn fit_1d(&self, features: &[i32], labels: &[i32]) -> Result<T, RidgeError> {
        Validator::validate_scalar_inputs(features, labels)?;
        if let Some(dims) = self.dimensions {
            if dims != 1 {
                return Err(RidgeError::DimensionMismatch {
                    operation: "fit_1d",
                    lhs_rows: features.len(),
                    lhs_cols: 1,
                    rhs_rows: dims,
                    rhs_cols: 1,
                });
            }
        }

        RidgeExecutor::run_scalar(features, labels, self.config.hyperparameters)
    }

    /// Hyperparameters this processor was built with.
    pub fn hyperparameters(&self) -> &Hyperparameters<T> {
        &self.config.hyperparameters
    }
}
