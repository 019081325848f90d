//! Post-fit diagnostics.
//!
//! ## Purpose
//!
//! This module summarises how well the fitted weights describe the data,
//! once, after the descent loop has finished.
//!
//! ## Design notes
//!
//! * **Statistics only**: The unregularized gradient norm `‖(1/n)(Σθ − C)‖` needs
//!   nothing but the sufficient statistics, so it is always available.
//! * **Raw data**: RMSE, MAE and R² need the original observations and are
//!   only filled in when the caller still holds them (batch mode).
//!
//! ## Key concepts
//!
//! * **Stationarity**: The gradient norm approaches zero at the least-squares
//!   minimum. With `λ > 0` the minimum of the ridge cost is elsewhere, so the
//!   unregularized norm stays positive.
//!
//! ## Non-goals
//!
//! * Per-iteration cost tracking.
//! * Confidence intervals for the weights.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::accumulators::StatsLinalg;
use crate::algorithms::regression::data_gradient;
use crate::algorithms::statistics::SufficientStatistics;
use crate::math::algebra;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Diagnostics
// ============================================================================

/// Fit-quality summary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics<T> {
    /// Norm of the unregularized gradient `(1/n)(Σθ − C)` at the fitted weights.
    pub gradient_norm: T,

    /// Root mean squared error of `Xθ` against `y`.
    pub rmse: Option<T>,

    /// Mean absolute error of `Xθ` against `y`.
    pub mae: Option<T>,

    /// Coefficient of determination.
    pub r_squared: Option<T>,
}

impl<T: StatsLinalg> Diagnostics<T> {
    /// Diagnostics available from the sufficient statistics alone.
    pub fn from_statistics(
        stats: &SufficientStatistics<T>,
        theta: &Matrix<T>,
    ) -> Result<Self, RidgeError> {
        let inv_n = stats.inverse_count().ok_or(RidgeError::EmptyDataset)?;
        let g = data_gradient(stats.sigma(), stats.c(), theta, inv_n)?;

        Ok(Self {
            gradient_norm: g.norm(),
            rmse: None,
            mae: None,
            r_squared: None,
        })
    }

    /// Full diagnostics, including residual metrics over the raw data.
    pub fn compute(
        stats: &SufficientStatistics<T>,
        theta: &Matrix<T>,
        features: &Matrix<T>,
        labels: &Matrix<T>,
    ) -> Result<Self, RidgeError> {
        let mut diagnostics = Self::from_statistics(stats, theta)?;

        let fitted = algebra::multiply(features, theta)?;
        let residuals = algebra::subtract(labels, &fitted)?;

        let y = labels.as_slice();
        let r = residuals.as_slice();
        let n = T::from(y.len()).unwrap_or_else(T::one);

        let ss_res = r.iter().fold(T::zero(), |acc, &v| acc + v * v);
        let abs_sum = r.iter().fold(T::zero(), |acc, &v| acc + v.abs());
        let mean_y = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;
        let ss_tot = y
            .iter()
            .fold(T::zero(), |acc, &v| acc + (v - mean_y) * (v - mean_y));

        diagnostics.rmse = Some((ss_res / n).sqrt());
        diagnostics.mae = Some(abs_sum / n);
        diagnostics.r_squared = Some(r_squared(ss_res, ss_tot));

        Ok(diagnostics)
    }
}

/// `1 − SS_res/SS_tot`; constant labels give 1 for a perfect fit and 0 otherwise.
fn r_squared<T: Float>(ss_res: T, ss_tot: T) -> T {
    if ss_tot <= T::epsilon() {
        if ss_res <= T::epsilon() {
            T::one()
        } else {
            T::zero()
        }
    } else {
        T::one() - ss_res / ss_tot
    }
}
