//! Input validation for ridge configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for hyperparameters and input
//! data. It checks requirements such as matching observation counts,
//! non-empty datasets and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: α finite and > 0, λ finite and >= 0.
//! * **Shape Agreement**: Features and labels describe the same observations.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check data for NaN/Inf; non-finite data flows
//!   through to non-finite weights.
//! * This module does not bound the iteration count.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::Hyperparameters;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for ridge configuration and input data.
///
/// All methods return `Result<(), RidgeError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a feature set (`n x d`) and label set (`n x 1`).
    pub fn validate_inputs<T: Copy>(
        features: &Matrix<T>,
        labels: &Matrix<T>,
    ) -> Result<(), RidgeError> {
        // Check 1: Labels are a column vector
        if !labels.is_column() {
            return Err(RidgeError::DimensionMismatch {
                operation: "fit",
                lhs_rows: features.rows(),
                lhs_cols: features.cols(),
                rhs_rows: labels.rows(),
                rhs_cols: labels.cols(),
            });
        }

        // Check 2: Same number of observations
        if features.rows() != labels.rows() {
            return Err(RidgeError::MismatchedInputs {
                features: features.rows(),
                labels: labels.rows(),
            });
        }

        Ok(())
    }

    /// Validate integer inputs of the one-feature form.
    pub fn validate_scalar_inputs(features: &[i32], labels: &[i32]) -> Result<(), RidgeError> {
        if features.is_empty() || labels.is_empty() {
            return Err(RidgeError::EmptyDataset);
        }
        if features.len() != labels.len() {
            return Err(RidgeError::MismatchedInputs {
                features: features.len(),
                labels: labels.len(),
            });
        }
        Ok(())
    }

    /// Validate that the features have the expected number of columns.
    pub fn validate_dimensions<T: Copy>(
        features: &Matrix<T>,
        dimensions: usize,
    ) -> Result<(), RidgeError> {
        if features.cols() != dimensions {
            return Err(RidgeError::DimensionMismatch {
                operation: "fit",
                lhs_rows: features.rows(),
                lhs_cols: features.cols(),
                rhs_rows: dimensions,
                rhs_cols: 1,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the learning rate α.
    ///
    /// Non-positive steps are rejected by policy: they can never decrease the cost.
    pub fn validate_learning_rate<T: Float>(alpha: T) -> Result<(), RidgeError> {
        if !alpha.is_finite() || alpha <= T::zero() {
            return Err(RidgeError::InvalidHyperparameter {
                name: "learning_rate",
                value: alpha.to_f64().unwrap_or(f64::NAN),
                reason: "must be finite and > 0",
            });
        }
        Ok(())
    }

    /// Validate the ridge penalty λ.
    pub fn validate_lambda<T: Float>(lambda: T) -> Result<(), RidgeError> {
        if !lambda.is_finite() || lambda < T::zero() {
            return Err(RidgeError::InvalidHyperparameter {
                name: "lambda",
                value: lambda.to_f64().unwrap_or(f64::NAN),
                reason: "must be finite and >= 0",
            });
        }
        Ok(())
    }

    /// Validate all hyperparameters.
    pub fn validate_hyperparameters<T: Float>(
        params: &Hyperparameters<T>,
    ) -> Result<(), RidgeError> {
        Self::validate_learning_rate(params.learning_rate)?;
        Self::validate_lambda(params.lambda)?;
        Ok(())
    }

    /// Validate the configured number of features.
    pub fn validate_feature_count(dimensions: usize) -> Result<(), RidgeError> {
        if dimensions == 0 {
            return Err(RidgeError::InvalidHyperparameter {
                name: "dimensions",
                value: 0.0,
                reason: "must be >= 1",
            });
        }
        Ok(())
    }

    /// Require a parameter that has no default.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, RidgeError> {
        value.ok_or(RidgeError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RidgeError> {
        if let Some(parameter) = duplicate_param {
            return Err(RidgeError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
