//! Execution engine for ridge regression.
//!
//! ## Purpose
//!
//! This module orchestrates a solve as a straight-line pipeline:
//!
//! ```text
//! AccumulatingStatistics → Iterating → Done
//! ```
//!
//! Statistics are accumulated exactly once, then the fixed-length descent
//! loop runs over them, then optional diagnostics are computed.
//!
//! ## Design notes
//!
//! * Provides a data entry point (`run_with_config`), a statistics entry point
//!   (`solve`, used by the aggregate lifecycle) and the scalar entry point.
//! * Every solve allocates its own statistics and weights; nothing is cached.
//! * Stage transitions are logged at `debug` level through `tracing`.
//!
//! ## Invariants
//!
//! * There is no retry, pause or rollback stage.
//! * A failing solve returns an error and no weights.
//!
//! ## Non-goals
//!
//! * This module does not validate hyperparameters (handled by `validator`).
//! * This module does not format results (handled by `output`).

// External dependencies
use core::fmt;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::accumulators::StatsLinalg;
use crate::algorithms::regression::{GradientDescent, Hyperparameters, ScalarGradientDescent};
use crate::algorithms::statistics::{ScalarStatistics, SufficientStatistics};
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Solve Stage
// ============================================================================

/// Stage of a solve, as reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStage {
    /// Reducing the dataset into `Σ`, `C` and `n`.
    AccumulatingStatistics,

    /// Running the descent loop.
    Iterating,

    /// Loop finished; weights are final.
    Done,
}

impl fmt::Display for SolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStage::AccumulatingStatistics => write!(f, "accumulating statistics"),
            SolveStage::Iterating => write!(f, "iterating"),
            SolveStage::Done => write!(f, "done"),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for ridge execution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeConfig<T> {
    /// Learning rate, penalty and iteration count.
    pub hyperparameters: Hyperparameters<T>,

    /// Whether to compute diagnostics after the loop.
    pub return_diagnostics: bool,
}

/// Output from ridge execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Fitted weights (`d x 1`).
    pub theta: Matrix<T>,

    /// Statistics the weights were fitted from.
    pub statistics: SufficientStatistics<T>,

    /// Diagnostics, if requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for ridge solves.
pub struct RidgeExecutor;

impl RidgeExecutor {
    /// Accumulate statistics from data and run the descent loop.
    pub fn run_with_config<T: StatsLinalg>(
        features: &Matrix<T>,
        labels: &Matrix<T>,
        config: RidgeConfig<T>,
    ) -> Result<ExecutorOutput<T>, RidgeError> {
        debug!(stage = %SolveStage::AccumulatingStatistics, n = features.rows(), d = features.cols());
        let statistics = SufficientStatistics::accumulate(features, labels)?;

        let theta = Self::iterate(&statistics, config.hyperparameters)?;

        let diagnostics = if config.return_diagnostics {
            Some(Diagnostics::compute(&statistics, &theta, features, labels)?)
        } else {
            None
        };

        Ok(ExecutorOutput {
            theta,
            statistics,
            diagnostics,
        })
    }

    /// Run the descent loop over already accumulated statistics.
    pub fn solve<T: StatsLinalg>(
        statistics: &SufficientStatistics<T>,
        config: RidgeConfig<T>,
    ) -> Result<(Matrix<T>, Option<Diagnostics<T>>), RidgeError> {
        let theta = Self::iterate(statistics, config.hyperparameters)?;

        let diagnostics = if config.return_diagnostics {
            Some(Diagnostics::from_statistics(statistics, &theta)?)
        } else {
            None
        };

        Ok((theta, diagnostics))
    }

    /// Accumulate integer statistics and run the scalar descent loop.
    pub fn run_scalar<T: Float>(
        features: &[i32],
        labels: &[i32],
        params: Hyperparameters<T>,
    ) -> Result<T, RidgeError> {
        debug!(stage = %SolveStage::AccumulatingStatistics, n = features.len(), d = 1);
        let statistics = ScalarStatistics::accumulate(features, labels)?;

        let solver = ScalarGradientDescent::new(statistics, params)?;
        debug!(stage = %SolveStage::Iterating, iterations = params.iterations);
        let theta = solver.run();

        debug!(
            stage = %SolveStage::Done,
            theta = theta.to_f64().unwrap_or(f64::NAN),
            finite = theta.is_finite()
        );
        Ok(theta)
    }

    fn iterate<T: StatsLinalg>(
        statistics: &SufficientStatistics<T>,
        params: Hyperparameters<T>,
    ) -> Result<Matrix<T>, RidgeError> {
        let solver = GradientDescent::new(statistics, params)?;

        debug!(
            stage = %SolveStage::Iterating,
            n = statistics.n(),
            d = statistics.dimensions(),
            learning_rate = params.learning_rate.to_f64().unwrap_or(f64::NAN),
            lambda = params.lambda.to_f64().unwrap_or(f64::NAN),
            iterations = params.iterations
        );
        let theta = solver.run()?;

        debug!(
            stage = %SolveStage::Done,
            theta_norm = theta.norm().to_f64().unwrap_or(f64::NAN),
            finite = theta.is_finite()
        );
        Ok(theta)
    }
}
