//! Dense matrix arithmetic for the gradient computation.
//!
//! ## Purpose
//!
//! This module provides the four matrix primitives the general gradient is
//! built from: matrix product, element-wise addition and subtraction, and
//! scaling by a scalar.
//!
//! ## Design notes
//!
//! * **Pure**: Every operation returns a newly owned matrix and leaves its
//!   operands untouched.
//! * **Checked**: Shape preconditions are validated before any arithmetic;
//!   violations are reported as `RidgeError::DimensionMismatch`.
//! * **Deterministic**: Products are accumulated from zero in column order, so
//!   a `1 x 1` product performs exactly one multiplication.
//!
//! ## Invariants
//!
//! * `multiply(A, B)` has shape `A.rows x B.cols`.
//! * `add`, `subtract` and `scalar_multiply` preserve the operand shape.
//!
//! ## Non-goals
//!
//! * Blocking, SIMD or parallel products (dimensions are small).
//! * In-place variants writing into caller-provided buffers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Shape Checks
// ============================================================================

#[inline]
fn mismatch<T: Copy>(operation: &'static str, a: &Matrix<T>, b: &Matrix<T>) -> RidgeError {
    RidgeError::DimensionMismatch {
        operation,
        lhs_rows: a.rows(),
        lhs_cols: a.cols(),
        rhs_rows: b.rows(),
        rhs_cols: b.cols(),
    }
}

#[inline]
fn require_same_shape<T: Copy>(
    operation: &'static str,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<(), RidgeError> {
    if a.shape() != b.shape() {
        return Err(mismatch(operation, a, b));
    }
    Ok(())
}

// ============================================================================
// Operations
// ============================================================================

/// Standard matrix product `A * B`.
///
/// Requires `a.cols() == b.rows()`.
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, RidgeError> {
    if a.cols() != b.rows() {
        return Err(mismatch("multiply", a, b));
    }

    let (m, k, p) = (a.rows(), a.cols(), b.cols());
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let mut out = Vec::with_capacity(m * p);

    for i in 0..m {
        let row = &lhs[i * k..(i + 1) * k];
        for j in 0..p {
            let mut acc = T::zero();
            for (t, &a_it) in row.iter().enumerate() {
                acc = acc + a_it * rhs[t * p + j];
            }
            out.push(acc);
        }
    }

    Ok(Matrix::from_parts(m, p, out))
}

/// Element-wise sum `A + B`.
pub fn add<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, RidgeError> {
    require_same_shape("add", a, b)?;
    Ok(a.zip_map(b, |x, y| x + y))
}

/// Element-wise difference `A - B`.
pub fn subtract<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, RidgeError> {
    require_same_shape("subtract", a, b)?;
    Ok(a.zip_map(b, |x, y| x - y))
}

/// Element-wise scaling `s * A`.
pub fn scalar_multiply<T: Float>(a: &Matrix<T>, s: T) -> Matrix<T> {
    a.map(|x| x * s)
}
