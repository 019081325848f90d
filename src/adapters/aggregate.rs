//! Aggregate adapter for incremental and partitioned ridge fits.
//!
//! ## Purpose
//!
//! This module exposes the fit as an aggregate with four phases:
//!
//! ```text
//! initialise → update* → combine* → finalise
//! ```
//!
//! Observations are folded into sufficient statistics as they arrive.
//! Aggregates built over disjoint partitions are combined by adding their
//! statistics, and the descent loop runs once, in `finalise`.
//!
//! ## Design notes
//!
//! * **Memory**: Holds `O(d²)` state regardless of how many rows were seen.
//! * **Order**: Combining is commutative and associative up to floating-point
//!   rounding, so partitions can be merged in any order.
//! * **Finalise**: Does not consume the aggregate; more rows may be added and
//!   `finalise` called again.
//!
//! ## Invariants
//!
//! * All combined aggregates share the same feature count.
//! * `finalise` fails with `EmptyDataset` until at least one row was added.
//!
//! ## Non-goals
//!
//! * Raw-data diagnostics (RMSE, MAE, R²); rows are not retained.
//! * Removing rows once added.

// External dependencies
use core::fmt::Debug;
use tracing::trace;

// Internal dependencies
use crate::algorithms::accumulators::StatsLinalg;
use crate::algorithms::regression::Hyperparameters;
use crate::algorithms::statistics::SufficientStatistics;
use crate::engine::executor::{RidgeConfig, RidgeExecutor};
use crate::engine::output::RidgeResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Aggregate Ridge Builder
// ============================================================================

/// Builder for the ridge aggregate.
#[derive(Debug, Clone)]
pub struct AggregateRidgeBuilder<T: StatsLinalg> {
    /// Learning rate α
    pub learning_rate: T,

    /// Ridge penalty λ
    pub lambda: T,

    /// Number of descent steps (required)
    pub iterations: Option<usize>,

    /// Number of features (required)
    pub dimensions: Option<usize>,

    /// Whether to report the gradient norm at the fitted weights
    pub return_diagnostics: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: StatsLinalg + Debug> Default for AggregateRidgeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StatsLinalg + Debug> AggregateRidgeBuilder<T> {
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

    /// Set the number of features.
    pub fn dimensions(mut self, dims: usize) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Report the gradient norm in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    /// Build an empty aggregate.
    pub fn build(self) -> Result<RidgeAggregate<T>, RidgeError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let iterations = Validator::validate_required(self.iterations, "iterations")?;
        let dimensions = Validator::validate_required(self.dimensions, "dimensions")?;

        let params = Hyperparameters::new(self.learning_rate, self.lambda, iterations);
        let mut aggregate = RidgeAggregate::initialise(dimensions, params)?;
        aggregate.config.return_diagnostics = self.return_diagnostics;
        Ok(aggregate)
    }
}

// ============================================================================
// Ridge Aggregate
// ============================================================================

/// Running sufficient statistics plus the settings to solve them with.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeAggregate<T> {
    statistics: SufficientStatistics<T>,
    config: RidgeConfig<T>,
}

impl<T: StatsLinalg + Debug> RidgeAggregate<T> {
    /// Empty aggregate over `dimensions` features.
    pub fn initialise(dimensions: usize, params: Hyperparameters<T>) -> Result<Self, RidgeError> {
        Validator::validate_feature_count(dimensions)?;
        Validator::validate_hyperparameters(&params)?;

        trace!(dimensions, "aggregate initialised");
        Ok(Self {
            statistics: SufficientStatistics::zeros(dimensions)?,
            config: RidgeConfig {
                hyperparameters: params,
                return_diagnostics: false,
            },
        })
    }

    /// Fold one observation in.
    pub fn update(&mut self, row: &[T], label: T) -> Result<(), RidgeError> {
        self.statistics.update(row, label)
    }

    /// Fold a block of observations (`m x d` features, `m x 1` labels) in.
    pub fn update_batch(
        &mut self,
        features: &Matrix<T>,
        labels: &Matrix<T>,
    ) -> Result<(), RidgeError> {
        self.statistics.update_batch(features, labels)?;
        trace!(rows = features.rows(), total = self.statistics.n(), "aggregate updated");
        Ok(())
    }

    /// Absorb the statistics of an aggregate built over a disjoint partition.
    ///
    /// The hyperparameters of `self` are kept.
    pub fn combine(&mut self, other: &Self) -> Result<(), RidgeError> {
        let (d, other_d) = (self.dimensions(), other.dimensions());
        if d != other_d {
            return Err(RidgeError::DimensionMismatch {
                operation: "combine",
                lhs_rows: d,
                lhs_cols: d,
                rhs_rows: other_d,
                rhs_cols: other_d,
            });
        }

        self.statistics = self.statistics.merge(&other.statistics)?;
        trace!(added = other.statistics.n(), total = self.statistics.n(), "aggregates combined");
        Ok(())
    }

    /// Run the descent loop over everything folded in so far.
    pub fn finalise(&self) -> Result<RidgeResult<T>, RidgeError> {
        if self.statistics.n() == 0 {
            return Err(RidgeError::EmptyDataset);
        }

        let (theta, diagnostics) = RidgeExecutor::solve(&self.statistics, self.config)?;

        let params = self.config.hyperparameters;
        Ok(RidgeResult {
            theta,
            n_observations: self.statistics.n(),
            learning_rate: params.learning_rate,
            lambda: params.lambda,
            iterations: params.iterations,
            diagnostics,
        })
    }

    /// Statistics accumulated so far.
    pub fn statistics(&self) -> &SufficientStatistics<T> {
        &self.statistics
    }

    /// Number of observations folded in.
    pub fn n_observations(&self) -> usize {
        self.statistics.n()
    }

    /// Number of features.
    pub fn dimensions(&self) -> usize {
        self.statistics.dimensions()
    }
}
