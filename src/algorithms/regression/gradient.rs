//! Ridge gradient from sufficient statistics.
//!
//! ## Purpose
//!
//! This module evaluates the gradient of the ridge cost
//! `(1/2n)‖Xθ − y‖² + (λ/2)‖θ‖²` using only `Σ`, `C` and `n`:
//!
//! ```text
//! g = (1/n) · (Σθ − C) + λθ
//! ```
//!
//! ## Design notes
//!
//! * The scalar and general forms perform the same floating-point operations
//!   in the same order, so for one feature they agree exactly.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::algebra;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

/// Scalar gradient `(1/n)(Σθ − C) + λθ`.
#[inline]
pub fn gradient_scalar<T: Float>(sigma: T, c: T, theta: T, inv_n: T, lambda: T) -> T {
    (sigma * theta - c) * inv_n + theta * lambda
}

/// Unregularized part `(1/n)(Σθ − C)` of the general gradient.
pub fn data_gradient<T: Float>(
    sigma: &Matrix<T>,
    c: &Matrix<T>,
    theta: &Matrix<T>,
    inv_n: T,
) -> Result<Matrix<T>, RidgeError> {
    let sigma_theta = algebra::multiply(sigma, theta)?;
    let residual = algebra::subtract(&sigma_theta, c)?;
    Ok(algebra::scalar_multiply(&residual, inv_n))
}

/// General gradient `(1/n)(Σθ − C) + λθ`.
pub fn gradient<T: Float>(
    sigma: &Matrix<T>,
    c: &Matrix<T>,
    theta: &Matrix<T>,
    inv_n: T,
    lambda: T,
) -> Result<Matrix<T>, RidgeError> {
    let data = data_gradient(sigma, c, theta, inv_n)?;
    let penalty = algebra::scalar_multiply(theta, lambda);
    algebra::add(&data, &penalty)
}
