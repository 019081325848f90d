//! Linear algebra backend for the closed-form ridge solution.
//!
//! ## Purpose
//!
//! This module solves the ridge normal equations
//! `(Σ/n + λI) θ = C/n` directly. The descent solver never uses it; it is the
//! reference answer gradient descent converges toward, used for diagnostics
//! and verification.
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) first.
//! * Falls back to SVD for rank-deficient systems (e.g. `λ = 0` with
//!   collinear features), giving the minimum-norm solution.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the square system `A x = b` where `A` is `n x n`, symmetric.
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_symmetric_system(a, b, n, f64::EPSILON * 100.0)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_symmetric(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_symmetric_system(a, b, n, f32::EPSILON * 100.0)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Solve `A x = b` for a symmetric `A`.
    ///
    /// Symmetry makes row-major and column-major storage interchangeable.
    pub fn solve_symmetric_system<T: RealField + Copy>(
        a: &[T],
        b: &[T],
        n: usize,
        eps: T,
    ) -> Option<Vec<T>> {
        if a.len() != n * n || b.len() != n {
            return None;
        }

        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        // QR only when R has no (numerically) zero pivot
        let qr = matrix.clone().qr();
        let r = qr.r();
        let max_pivot = (0..n).fold(T::zero(), |acc, i| acc.max(r[(i, i)].abs()));
        let full_rank = (0..n).all(|i| r[(i, i)].abs() > eps * max_pivot);
        if full_rank {
            if let Some(solution) = qr.solve(&rhs) {
                return Some(solution.as_slice().to_vec());
            }
        }

        matrix
            .svd(true, true)
            .solve(&rhs, eps)
            .ok()
            .map(|s: DVector<T>| s.as_slice().to_vec())
    }
}
