#![cfg(feature = "dev")]
//! Tests for matrix algebra and the dense solver.

use approx::assert_relative_eq;

use ridge_rs::internals::math::algebra::{add, multiply, scalar_multiply, subtract};
use ridge_rs::internals::math::linalg::FloatLinalg;
use ridge_rs::internals::primitives::errors::RidgeError;
use ridge_rs::internals::primitives::matrix::Matrix;

fn m(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows).unwrap()
}

// ============================================================================
// Multiply
// ============================================================================

#[test]
fn test_multiply() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);

    let c = multiply(&a, &b).unwrap();
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn test_multiply_matrix_vector() {
    let a = m(&[&[39.0, -24.0], &[-24.0, 30.0]]);
    let v = Matrix::column(&[3.5, -2.0]).unwrap();

    let c = multiply(&a, &v).unwrap();
    assert_eq!(c.shape(), (2, 1));
    assert_eq!(c.as_slice(), &[184.5, -144.0]);
}

#[test]
fn test_multiply_identity() {
    let a = m(&[&[1.5, -2.0], &[0.25, 4.0]]);
    let i = Matrix::identity(2).unwrap();

    assert_eq!(multiply(&a, &i).unwrap(), a);
    assert_eq!(multiply(&i, &a).unwrap(), a);
}

#[test]
fn test_multiply_mismatch() {
    let a = m(&[&[1.0, 2.0]]);
    let b = m(&[&[1.0, 2.0]]);

    assert_eq!(
        multiply(&a, &b).unwrap_err(),
        RidgeError::DimensionMismatch {
            operation: "multiply",
            lhs_rows: 1,
            lhs_cols: 2,
            rhs_rows: 1,
            rhs_cols: 2,
        }
    );
}

// ============================================================================
// Element-wise
// ============================================================================

#[test]
fn test_add_subtract() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[0.5, -1.0], &[2.0, 8.0]]);

    assert_eq!(add(&a, &b).unwrap().as_slice(), &[1.5, 1.0, 5.0, 12.0]);
    assert_eq!(subtract(&a, &b).unwrap().as_slice(), &[0.5, 3.0, 1.0, -4.0]);
    assert_eq!(subtract(&a, &a).unwrap(), Matrix::zeros(2, 2).unwrap());
}

#[test]
fn test_add_subtract_mismatch() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = Matrix::column(&[1.0, 2.0]).unwrap();

    assert_eq!(
        add(&a, &b).unwrap_err(),
        RidgeError::DimensionMismatch {
            operation: "add",
            lhs_rows: 2,
            lhs_cols: 2,
            rhs_rows: 2,
            rhs_cols: 1,
        }
    );
    assert!(matches!(
        subtract(&b, &a),
        Err(RidgeError::DimensionMismatch {
            operation: "subtract",
            lhs_rows: 2,
            lhs_cols: 1,
            ..
        })
    ));
}

#[test]
fn test_scalar_multiply() {
    let a = m(&[&[1.0, -2.0], &[0.0, 4.0]]);

    assert_eq!(scalar_multiply(&a, 0.5).as_slice(), &[0.5, -1.0, 0.0, 2.0]);
    assert_eq!(scalar_multiply(&a, 0.0).norm(), 0.0);
    // Inputs are left untouched.
    assert_eq!(a.as_slice(), &[1.0, -2.0, 0.0, 4.0]);
}

// ============================================================================
// Dense Solver
// ============================================================================

#[test]
fn test_solve_symmetric() {
    // [[4, 1], [1, 3]] x = [1, 2]  =>  x = (1/11, 7/11)
    let x = f64::solve_symmetric(&[4.0, 1.0, 1.0, 3.0], &[1.0, 2.0], 2).unwrap();
    assert_relative_eq!(x[0], 1.0 / 11.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 7.0 / 11.0, epsilon = 1e-12);

    let x = f32::solve_symmetric(&[4.0, 1.0, 1.0, 3.0], &[1.0, 2.0], 2).unwrap();
    assert_relative_eq!(x[0], 1.0 / 11.0, epsilon = 1e-5);
    assert_relative_eq!(x[1], 7.0 / 11.0, epsilon = 1e-5);
}

#[test]
fn test_solve_symmetric_bad_lengths() {
    assert!(f64::solve_symmetric(&[1.0, 0.0, 0.0], &[1.0, 1.0], 2).is_none());
    assert!(f64::solve_symmetric(&[1.0, 0.0, 0.0, 1.0], &[1.0], 2).is_none());
}
