//! Error types for ridge regression.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate, from matrix construction through to the fitted
//! weights.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Shape and parameter problems are reported before any
//!   computation starts, so a fit never returns partial weights.
//! * **no_std**: Uses `thiserror` without its `std` feature; messages are
//!   built from `&'static str` and numeric fields only.
//!
//! ## Non-goals
//!
//! * Numerical divergence (weights growing without bound) is not an error.
//!   The returned weights may be non-finite.

use thiserror::Error;

/// Errors reported by ridge regression operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RidgeError {
    /// Operand shapes violate the precondition of a matrix operation.
    #[error(
        "Dimension mismatch in {operation}: left is {lhs_rows}x{lhs_cols}, right is {rhs_rows}x{rhs_cols}"
    )]
    DimensionMismatch {
        /// Name of the failing operation.
        operation: &'static str,
        /// Rows of the left operand.
        lhs_rows: usize,
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
        /// Columns of the right operand.
        rhs_cols: usize,
    },

    /// The dataset has no observations.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// A hyperparameter is outside its accepted range.
    #[error("Invalid hyperparameter: {name}={value} ({reason})")]
    InvalidHyperparameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Accepted range.
        reason: &'static str,
    },

    /// Features and labels disagree on the number of observations.
    #[error("Length mismatch: features have {features} observations, labels have {labels}")]
    MismatchedInputs {
        /// Observations in the feature set.
        features: usize,
        /// Observations in the label set.
        labels: usize,
    },

    /// Matrix storage does not describe a valid `rows x cols` grid.
    #[error("Invalid matrix shape: {rows}x{cols} with {len} elements")]
    InvalidShape {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Number of elements supplied.
        len: usize,
    },

    /// A row of nested input has a different width from the first row.
    #[error("Ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        got: usize,
    },

    /// A required builder parameter was never set.
    #[error("Missing parameter: '{parameter}' must be set explicitly")]
    MissingParameter {
        /// Parameter name.
        parameter: &'static str,
    },

    /// A builder parameter was set more than once.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Parameter name.
        parameter: &'static str,
    },
}
