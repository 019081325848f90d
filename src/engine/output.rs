//! Result type and formatting for ridge fits.
//!
//! ## Purpose
//!
//! This module holds the value returned to callers and the human-readable
//! rendering of results and matrices. The numeric core never prints; all
//! presentation lives here behind `Display`.

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::algebra;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Result
// ============================================================================

/// Fitted weights and the settings that produced them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: Clone + serde::Serialize",
        deserialize = "T: Copy + serde::Deserialize<'de>"
    ))
)]
pub struct RidgeResult<T> {
    /// Fitted weights (`d x 1`).
    pub theta: Matrix<T>,

    /// Number of observations the weights were fitted on.
    pub n_observations: usize,

    /// Learning rate used.
    pub learning_rate: T,

    /// Ridge penalty used.
    pub lambda: T,

    /// Number of descent steps performed.
    pub iterations: usize,

    /// Diagnostics, if requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> RidgeResult<T> {
    /// Weights as a plain slice, one entry per feature.
    pub fn weights(&self) -> &[T] {
        self.theta.as_slice()
    }

    /// Number of features.
    pub fn dimensions(&self) -> usize {
        self.theta.rows()
    }

    /// Predict labels for new observations (`m x d`).
    pub fn predict(&self, features: &Matrix<T>) -> Result<Matrix<T>, RidgeError> {
        algebra::multiply(features, &self.theta)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl<T: Float + Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            let mut first = true;
            for v in row {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Float + Display> Display for RidgeResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_observations)?;
        writeln!(f, "  Features: {}", self.dimensions())?;
        writeln!(f, "  Learning rate: {}", self.learning_rate)?;
        writeln!(f, "  Lambda: {}", self.lambda)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;

        if let Some(d) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "Ridge Diagnostics:")?;
            writeln!(f, "  Gradient norm: {:.6}", d.gradient_norm)?;
            if let Some(rmse) = d.rmse {
                writeln!(f, "  RMSE:          {:.6}", rmse)?;
            }
            if let Some(mae) = d.mae {
                writeln!(f, "  MAE:           {:.6}", mae)?;
            }
            if let Some(r2) = d.r_squared {
                writeln!(f, "  R^2:           {:.6}", r2)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Weights:")?;
        writeln!(f, "  {:>8} {:>14}", "Feature", "Theta")?;
        writeln!(f, "  -----------------------")?;
        for (i, w) in self.theta.as_slice().iter().enumerate() {
            writeln!(f, "  {:>8} {:>14.6}", i, w)?;
        }
        Ok(())
    }
}
