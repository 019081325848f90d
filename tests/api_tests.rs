//! Tests for the plain fit functions.
//!
//! These tests exercise `fit_1d` and `fit_nd` through the public prelude:
//! - Recovery of an exact linear relation
//! - Shrinkage under a positive penalty
//! - Determinism of repeated fits
//! - Shape and residual of a two-feature fit
//! - The regularized three-feature case
//! - Agreement between the scalar and general forms
//!
//! ## Test Organization
//!
//! 1. **Scalar Form** - `fit_1d`
//! 2. **General Form** - `fit_nd`
//! 3. **Equivalence** - `fit_1d` against `fit_nd`
//! 4. **Input Errors** - Rejected data and hyperparameters

use approx::{assert_abs_diff_eq, assert_relative_eq};

use ridge_rs::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn features_2d() -> Matrix<f64> {
    Matrix::from_rows(&[[-1.0, 3.0], [2.0, -4.0], [5.0, -2.0], [3.0, -1.0]]).unwrap()
}

fn labels_2d() -> Matrix<f64> {
    Matrix::column(&[-9.5, 15.0, 21.5, 12.5]).unwrap()
}

fn features_2d_f32() -> Matrix<f32> {
    Matrix::from_rows(&[[-1.0, 3.0], [2.0, -4.0], [5.0, -2.0], [3.0, -1.0]]).unwrap()
}

fn labels_2d_f32() -> Matrix<f32> {
    Matrix::column(&[-9.5, 15.0, 21.5, 12.5]).unwrap()
}

fn separable_features() -> Matrix<f64> {
    Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]]).unwrap()
}

fn separable_labels() -> Matrix<f64> {
    Matrix::column(&[2.0, 4.0, 2.0, 4.0]).unwrap()
}

// ============================================================================
// Scalar Form Tests
// ============================================================================

/// Test that a perfectly linear relation is recovered.
#[test]
fn test_fit_1d_exact_recovery() {
    let x = [1, 2, 3, 4, 5];
    let y = [-3, -6, -9, -12, -15];

    let theta: f32 = fit_1d(&x, &y, 0.01, 0.0, 100).unwrap();

    assert!((theta + 3.0).abs() < 0.5);
    // Contraction factor per step is 0.89, so 100 steps leave ~4e-5.
    assert_abs_diff_eq!(theta, -3.0, epsilon = 1e-3);
}

/// Test that a positive penalty shrinks the single weight.
#[test]
fn test_fit_1d_shrinkage() {
    let x = [1, 2, 3, 4, 5];
    let y = [-3, -6, -9, -12, -15];

    let plain: f64 = fit_1d(&x, &y, 0.01, 0.0, 100).unwrap();
    let ridge: f64 = fit_1d(&x, &y, 0.01, 0.4, 100).unwrap();

    assert!(ridge.abs() < plain.abs());
    // Fixed point of θ = θ − α((11θ + 33) + 0.4θ)
    assert_abs_diff_eq!(ridge, -33.0 / 11.4, epsilon = 1e-3);
}

/// Test that zero iterations return the starting weight.
#[test]
fn test_fit_1d_zero_iterations() {
    let theta: f64 = fit_1d(&[1, 2, 3], &[2, 4, 6], 0.01, 0.0, 0).unwrap();
    assert_eq!(theta, 1.0);
}

/// Test that divergence is not reported as an error.
#[test]
fn test_fit_1d_divergence_is_silent() {
    let x = [1, 2, 3, 4, 5];
    let y = [-3, -6, -9, -12, -15];

    let theta: f32 = fit_1d(&x, &y, 1.0, 0.0, 100).unwrap();
    assert!(!theta.is_finite());
}

/// Test that the integer sums do not overflow for extreme inputs.
#[test]
fn test_fit_1d_extreme_integers() {
    let x = [i32::MAX, i32::MIN, i32::MAX];
    let y = [i32::MIN, i32::MAX, i32::MIN];

    let theta: f64 = fit_1d(&x, &y, 1e-20, 0.0, 10).unwrap();
    assert!(theta.is_finite());
}

// ============================================================================
// General Form Tests
// ============================================================================

/// Test the two-feature fit: shape, closeness and small residual.
#[test]
fn test_fit_nd_dimensional_consistency() {
    let x = features_2d();
    let y = labels_2d();

    let theta = fit_nd(&x, &y, 0.01, 0.0, 100).unwrap();
    assert_eq!(theta.shape(), (2, 1));

    // Exact solution is (3.5, -2); the slow mode decays by 0.975 per step.
    assert_abs_diff_eq!(theta.as_slice()[0], 3.5, epsilon = 0.1);
    assert_abs_diff_eq!(theta.as_slice()[1], -2.0, epsilon = 0.1);

    let stats = SufficientStatistics::accumulate(&x, &y).unwrap();
    let sigma_theta = algebra::multiply(stats.sigma(), &theta).unwrap();
    let residual = algebra::subtract(&sigma_theta, stats.c()).unwrap();

    assert!(residual.norm() < 0.01 * stats.c().norm());
}

/// Test the regularized three-feature case stays finite.
#[test]
fn test_fit_nd_regularized_three_features() {
    let x = Matrix::from_rows(&[[1.0_f32, 3.0, 5.0], [2.0, 4.0, 6.0]]).unwrap();
    let y = Matrix::column(&[311.0_f32, 414.0]).unwrap();

    let theta = fit_nd(&x, &y, 0.01, 0.4, 100).unwrap();

    assert_eq!(theta.shape(), (3, 1));
    assert!(theta.is_finite());
}

/// Test that repeated fits are bit-identical.
#[test]
fn test_fit_nd_determinism() {
    let x = features_2d();
    let y = labels_2d();

    let first = fit_nd(&x, &y, 0.01, 0.1, 250).unwrap();
    let second = fit_nd(&x, &y, 0.01, 0.1, 250).unwrap();

    let bits = |m: &Matrix<f64>| m.as_slice().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
}

/// Test that increasing the penalty shrinks the weights.
#[test]
fn test_fit_nd_shrinkage() {
    let x = separable_features();
    let y = separable_labels();

    let plain = fit_nd(&x, &y, 0.5, 0.0, 100).unwrap();
    let ridge = fit_nd(&x, &y, 0.5, 0.5, 100).unwrap();

    assert_relative_eq!(plain.as_slice()[0], 2.0, epsilon = 1e-9);
    assert_relative_eq!(plain.as_slice()[1], 4.0, epsilon = 1e-9);
    assert_relative_eq!(ridge.as_slice()[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(ridge.as_slice()[1], 2.0, epsilon = 1e-9);

    assert!(ridge.norm() < plain.norm());
    for (r, p) in ridge.as_slice().iter().zip(plain.as_slice()) {
        assert!(r.abs() < p.abs());
    }
}

/// Test the two-feature fit in single precision.
#[test]
fn test_fit_nd_dimensional_consistency_f32() {
    let x = features_2d_f32();
    let y = labels_2d_f32();

    let theta = fit_nd(&x, &y, 0.01_f32, 0.0, 100).unwrap();
    assert_eq!(theta.shape(), (2, 1));

    assert_abs_diff_eq!(theta.as_slice()[0], 3.5, epsilon = 0.1);
    assert_abs_diff_eq!(theta.as_slice()[1], -2.0, epsilon = 0.1);

    let stats = SufficientStatistics::accumulate(&x, &y).unwrap();
    let sigma_theta = algebra::multiply(stats.sigma(), &theta).unwrap();
    let residual = algebra::subtract(&sigma_theta, stats.c()).unwrap();

    assert!(residual.norm() < 0.01 * stats.c().norm());
}

/// Test that repeated single-precision fits are bit-identical.
#[test]
fn test_fit_nd_determinism_f32() {
    let x = features_2d_f32();
    let y = labels_2d_f32();

    let first = fit_nd(&x, &y, 0.01_f32, 0.1, 250).unwrap();
    let second = fit_nd(&x, &y, 0.01_f32, 0.1, 250).unwrap();

    let bits = |m: &Matrix<f32>| m.as_slice().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
}

/// Test penalty shrinkage in single precision.
#[test]
fn test_fit_nd_shrinkage_f32() {
    let x = Matrix::from_rows(&[[1.0_f32, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
    let y = Matrix::column(&[2.0_f32, 4.0, 2.0, 4.0]).unwrap();

    let plain = fit_nd(&x, &y, 0.5, 0.0, 100).unwrap();
    let ridge = fit_nd(&x, &y, 0.5, 0.5, 100).unwrap();

    assert_relative_eq!(plain.as_slice()[0], 2.0, epsilon = 1e-5);
    assert_relative_eq!(plain.as_slice()[1], 4.0, epsilon = 1e-5);
    assert_relative_eq!(ridge.as_slice()[0], 1.0, epsilon = 1e-5);
    assert_relative_eq!(ridge.as_slice()[1], 2.0, epsilon = 1e-5);
    assert!(ridge.norm() < plain.norm());
}

/// Test that zero iterations return the all-ones start.
#[test]
fn test_fit_nd_zero_iterations() {
    let theta = fit_nd(&features_2d(), &labels_2d(), 0.01, 0.0, 0).unwrap();
    assert_eq!(theta.as_slice(), &[1.0, 1.0]);
}

/// Test that the weights approach the closed-form ridge solution.
#[test]
fn test_fit_nd_matches_closed_form() {
    let x = features_2d();
    let y = labels_2d();
    let stats = SufficientStatistics::accumulate(&x, &y).unwrap();

    for lambda in [0.0, 0.4] {
        let theta = fit_nd(&x, &y, 0.01, lambda, 2000).unwrap();
        let exact = stats.closed_form(lambda).unwrap();

        for (a, b) in theta.as_slice().iter().zip(exact.as_slice()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
        }
    }
}

// ============================================================================
// Equivalence Tests
// ============================================================================

/// Test that the scalar and general forms agree on one-feature data.
#[test]
fn test_fit_1d_matches_fit_nd() {
    let xs = [1, 2, 3, 4, 5];
    let ys = [-3, -6, -9, -12, -15];

    let x = Matrix::column(&xs.map(|v| v as f64)).unwrap();
    let y = Matrix::column(&ys.map(|v| v as f64)).unwrap();

    for (alpha, lambda, iterations) in [(0.01, 0.0, 100), (0.01, 0.4, 100), (0.05, 0.1, 37)] {
        let scalar: f64 = fit_1d(&xs, &ys, alpha, lambda, iterations).unwrap();
        let general = fit_nd(&x, &y, alpha, lambda, iterations).unwrap();

        assert_eq!(general.shape(), (1, 1));
        assert_eq!(scalar, general.as_slice()[0]);
    }
}

/// Test the same agreement in single precision.
#[test]
fn test_fit_1d_matches_fit_nd_f32() {
    let xs = [2, -1, 4, 7];
    let ys = [5, -2, 9, 13];

    let x = Matrix::column(&xs.map(|v| v as f32)).unwrap();
    let y = Matrix::column(&ys.map(|v| v as f32)).unwrap();

    let scalar: f32 = fit_1d(&xs, &ys, 0.01, 0.2, 100).unwrap();
    let general = fit_nd(&x, &y, 0.01, 0.2, 100).unwrap();

    assert_relative_eq!(scalar, general.as_slice()[0], max_relative = 1e-6);
}

// ============================================================================
// Input Error Tests
// ============================================================================

/// Test that empty integer inputs are rejected.
#[test]
fn test_fit_1d_empty() {
    let err = fit_1d::<f64>(&[], &[], 0.01, 0.0, 10).unwrap_err();
    assert_eq!(err, RidgeError::EmptyDataset);
}

/// Test that observation counts must agree.
#[test]
fn test_mismatched_inputs() {
    let err = fit_1d::<f64>(&[1, 2, 3], &[1, 2], 0.01, 0.0, 10).unwrap_err();
    assert_eq!(
        err,
        RidgeError::MismatchedInputs {
            features: 3,
            labels: 2
        }
    );

    let y = Matrix::column(&[1.0, 2.0, 3.0]).unwrap();
    let err = fit_nd(&features_2d(), &y, 0.01, 0.0, 10).unwrap_err();
    assert_eq!(
        err,
        RidgeError::MismatchedInputs {
            features: 4,
            labels: 3
        }
    );
}

/// Test that labels must be a column vector.
#[test]
fn test_labels_not_column() {
    let err = fit_nd(&features_2d(), &features_2d(), 0.01, 0.0, 10).unwrap_err();
    assert_eq!(
        err,
        RidgeError::DimensionMismatch {
            operation: "fit",
            lhs_rows: 4,
            lhs_cols: 2,
            rhs_rows: 4,
            rhs_cols: 2,
        }
    );
}

/// Test hyperparameter bounds.
#[test]
fn test_invalid_hyperparameters() {
    let err = fit_1d::<f64>(&[1], &[1], 0.0, 0.0, 10).unwrap_err();
    assert_eq!(
        err,
        RidgeError::InvalidHyperparameter {
            name: "learning_rate",
            value: 0.0,
            reason: "must be finite and > 0",
        }
    );

    let err = fit_nd(&features_2d(), &labels_2d(), 0.01, -1.0, 10).unwrap_err();
    assert_eq!(
        err,
        RidgeError::InvalidHyperparameter {
            name: "lambda",
            value: -1.0,
            reason: "must be finite and >= 0",
        }
    );

    let err = fit_nd(&features_2d(), &labels_2d(), f64::NAN, 0.0, 10).unwrap_err();
    assert!(matches!(
        err,
        RidgeError::InvalidHyperparameter {
            name: "learning_rate",
            ..
        }
    ));

    let err = fit_1d::<f32>(&[1], &[1], 0.01, f32::INFINITY, 10).unwrap_err();
    assert!(matches!(
        err,
        RidgeError::InvalidHyperparameter { name: "lambda", .. }
    ));
}
