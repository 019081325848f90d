#![cfg(feature = "dev")]
//! Tests for the validator and executor.

use approx::assert_relative_eq;

use ridge_rs::internals::algorithms::regression::Hyperparameters;
use ridge_rs::internals::algorithms::statistics::SufficientStatistics;
use ridge_rs::internals::engine::executor::{RidgeConfig, RidgeExecutor, SolveStage};
use ridge_rs::internals::engine::validator::Validator;
use ridge_rs::internals::primitives::errors::RidgeError;
use ridge_rs::internals::primitives::matrix::Matrix;

fn data_2d() -> (Matrix<f64>, Matrix<f64>) {
    let x = Matrix::from_rows(&[[-1.0, 3.0], [2.0, -4.0], [5.0, -2.0], [3.0, -1.0]]).unwrap();
    let y = Matrix::column(&[-9.5, 15.0, 21.5, 12.5]).unwrap();
    (x, y)
}

// ============================================================================
// Validator
// ============================================================================

#[test]
fn test_validate_inputs() {
    let (x, y) = data_2d();
    assert!(Validator::validate_inputs(&x, &y).is_ok());

    let short = Matrix::column(&[1.0, 2.0]).unwrap();
    assert_eq!(
        Validator::validate_inputs(&x, &short).unwrap_err(),
        RidgeError::MismatchedInputs {
            features: 4,
            labels: 2
        }
    );

    // Labels must be a single column.
    assert!(matches!(
        Validator::validate_inputs(&x, &x),
        Err(RidgeError::DimensionMismatch {
            operation: "fit",
            rhs_cols: 2,
            ..
        })
    ));
}

#[test]
fn test_validate_scalar_inputs() {
    assert!(Validator::validate_scalar_inputs(&[1, 2], &[3, 4]).is_ok());
    assert_eq!(
        Validator::validate_scalar_inputs(&[], &[1]).unwrap_err(),
        RidgeError::EmptyDataset
    );
    assert_eq!(
        Validator::validate_scalar_inputs(&[1, 2, 3], &[1]).unwrap_err(),
        RidgeError::MismatchedInputs {
            features: 3,
            labels: 1
        }
    );
}

#[test]
fn test_validate_dimensions() {
    let (x, _) = data_2d();
    assert!(Validator::validate_dimensions(&x, 2).is_ok());
    assert_eq!(
        Validator::validate_dimensions(&x, 3).unwrap_err(),
        RidgeError::DimensionMismatch {
            operation: "fit",
            lhs_rows: 4,
            lhs_cols: 2,
            rhs_rows: 3,
            rhs_cols: 1,
        }
    );
}

#[test]
fn test_validate_hyperparameters() {
    assert!(Validator::validate_hyperparameters(&Hyperparameters::new(0.01, 0.0, 0)).is_ok());

    for alpha in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            Validator::validate_learning_rate(alpha),
            Err(RidgeError::InvalidHyperparameter {
                name: "learning_rate",
                ..
            })
        ));
    }

    for lambda in [-1e-9, f64::NAN, f64::NEG_INFINITY] {
        assert!(matches!(
            Validator::validate_lambda(lambda),
            Err(RidgeError::InvalidHyperparameter { name: "lambda", .. })
        ));
    }

    assert_eq!(
        Validator::validate_hyperparameters(&Hyperparameters::new(0.01, -2.0, 10)).unwrap_err(),
        RidgeError::InvalidHyperparameter {
            name: "lambda",
            value: -2.0,
            reason: "must be finite and >= 0",
        }
    );
}

#[test]
fn test_validate_builder_helpers() {
    assert_eq!(Validator::validate_required(Some(5_usize), "iterations"), Ok(5));
    assert_eq!(
        Validator::validate_required::<usize>(None, "iterations").unwrap_err(),
        RidgeError::MissingParameter {
            parameter: "iterations"
        }
    );

    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("lambda")).unwrap_err(),
        RidgeError::DuplicateParameter { parameter: "lambda" }
    );

    assert!(Validator::validate_feature_count(1).is_ok());
    assert!(matches!(
        Validator::validate_feature_count(0),
        Err(RidgeError::InvalidHyperparameter {
            name: "dimensions",
            ..
        })
    ));
}

// ============================================================================
// Executor
// ============================================================================

#[test]
fn test_solve_stage_display() {
    assert_eq!(
        SolveStage::AccumulatingStatistics.to_string(),
        "accumulating statistics"
    );
    assert_eq!(SolveStage::Iterating.to_string(), "iterating");
    assert_eq!(SolveStage::Done.to_string(), "done");
}

#[test]
fn test_run_with_config_and_solve_agree() {
    let (x, y) = data_2d();
    let config = RidgeConfig {
        hyperparameters: Hyperparameters::new(0.01, 0.1, 200),
        return_diagnostics: true,
    };

    let output = RidgeExecutor::run_with_config(&x, &y, config).unwrap();
    assert_eq!(output.statistics.n(), 4);
    assert!(output.diagnostics.unwrap().rmse.is_some());

    let stats = SufficientStatistics::accumulate(&x, &y).unwrap();
    let (theta, diagnostics) = RidgeExecutor::solve(&stats, config).unwrap();
    assert_eq!(theta, output.theta);

    // Statistics alone cannot give residual-based metrics.
    let diagnostics = diagnostics.unwrap();
    assert!(diagnostics.rmse.is_none());
    assert_relative_eq!(
        diagnostics.gradient_norm,
        output.diagnostics.unwrap().gradient_norm,
        max_relative = 1e-12
    );
}

#[test]
fn test_run_without_diagnostics() {
    let (x, y) = data_2d();
    let config = RidgeConfig {
        hyperparameters: Hyperparameters::new(0.01, 0.0, 10),
        return_diagnostics: false,
    };
    let output = RidgeExecutor::run_with_config(&x, &y, config).unwrap();
    assert!(output.diagnostics.is_none());
}

#[test]
fn test_run_scalar() {
    let params = Hyperparameters::new(0.01, 0.0, 1000);
    let theta = RidgeExecutor::run_scalar(&[1, 2, 3, 4, 5], &[-3, -6, -9, -12, -15], params).unwrap();
    assert_relative_eq!(theta, -3.0_f64, epsilon = 1e-6);

    let err = RidgeExecutor::run_scalar(&[], &[], Hyperparameters::new(0.01_f64, 0.0, 10))
        .unwrap_err();
    assert_eq!(err, RidgeError::EmptyDataset);
}
