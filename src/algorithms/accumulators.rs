//! Sufficient-statistics accumulation kernels.
//!
//! ## Purpose
//!
//! This module reduces a row-major feature block and its labels into the
//! upper triangle of `Σ = XᵀX` and into `C = Xᵀy`, then mirrors the triangle.
//! One pass over the rows; cost `O(n·d²)`.
//!
//! ## Design notes
//!
//! * **Additive**: Kernels add into the buffers they are given, so the same
//!   kernel serves a fresh accumulation, a single-row update and a partial
//!   accumulation that is later merged.
//! * **Scalar and SIMD**: `f32` uses the generic scalar kernel; `f64` pairs
//!   consecutive observations into `f64x2` lanes and finishes the tail with
//!   scalar code.
//!
//! ## Invariants
//!
//! * `features.len() == labels.len() * d`, `sigma.len() == d * d`, `c.len() == d`.
//! * On return `sigma` is symmetric.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use wide::f64x2;

// Internal dependencies
use crate::math::linalg::FloatLinalg;

// ============================================================================
// StatsLinalg Trait
// ============================================================================

/// Float types with an accumulation kernel for `XᵀX` and `Xᵀy`.
pub trait StatsLinalg: FloatLinalg {
    /// Add the contribution of `labels.len()` observations to `sigma` and `c`.
    fn accumulate_gram(features: &[Self], labels: &[Self], d: usize, sigma: &mut [Self], c: &mut [Self]);
}

impl StatsLinalg for f32 {
    #[inline]
    fn accumulate_gram(features: &[Self], labels: &[Self], d: usize, sigma: &mut [Self], c: &mut [Self]) {
        accumulate_gram_scalar(features, labels, d, sigma, c);
    }
}

impl StatsLinalg for f64 {
    #[inline]
    fn accumulate_gram(features: &[Self], labels: &[Self], d: usize, sigma: &mut [Self], c: &mut [Self]) {
        accumulate_gram_simd(features, labels, d, sigma, c);
    }
}

// ============================================================================
// Kernels
// ============================================================================

/// Copy the upper triangle of a `d x d` row-major matrix onto the lower one.
#[inline]
fn mirror_upper<T: Copy>(sigma: &mut [T], d: usize) {
    for i in 1..d {
        for j in 0..i {
            sigma[i * d + j] = sigma[j * d + i];
        }
    }
}

/// Generic scalar accumulation.
pub fn accumulate_gram_scalar<T: Float>(
    features: &[T],
    labels: &[T],
    d: usize,
    sigma: &mut [T],
    c: &mut [T],
) {
    debug_assert_eq!(features.len(), labels.len() * d);

    for (row, &y) in features.chunks_exact(d).zip(labels.iter()) {
        for i in 0..d {
            let xi = row[i];
            c[i] = c[i] + xi * y;
            for j in i..d {
                sigma[i * d + j] = sigma[i * d + j] + xi * row[j];
            }
        }
    }

    mirror_upper(sigma, d);
}

/// Accumulation over pairs of observations using SIMD.
pub fn accumulate_gram_simd(
    features: &[f64],
    labels: &[f64],
    d: usize,
    sigma: &mut [f64],
    c: &mut [f64],
) {
    debug_assert_eq!(features.len(), labels.len() * d);

    let n = labels.len();
    let mut s_xx: Vec<f64x2> = vec![f64x2::splat(0.0); d * d];
    let mut s_xy: Vec<f64x2> = vec![f64x2::splat(0.0); d];

    let mut k = 0;
    while k + 2 <= n {
        let r0 = &features[k * d..(k + 1) * d];
        let r1 = &features[(k + 1) * d..(k + 2) * d];
        let y = f64x2::new([labels[k], labels[k + 1]]);

        for i in 0..d {
            let xi = f64x2::new([r0[i], r1[i]]);
            s_xy[i] += xi * y;
            for j in i..d {
                let xj = f64x2::new([r0[j], r1[j]]);
                s_xx[i * d + j] += xi * xj;
            }
        }

        k += 2;
    }

    for i in 0..d {
        c[i] += s_xy[i].reduce_add();
        for j in i..d {
            sigma[i * d + j] += s_xx[i * d + j].reduce_add();
        }
    }

    // Tail
    for k in k..n {
        let row = &features[k * d..(k + 1) * d];
        let y = labels[k];
        for i in 0..d {
            let xi = row[i];
            c[i] += xi * y;
            for j in i..d {
                sigma[i * d + j] += xi * row[j];
            }
        }
    }

    mirror_upper(sigma, d);
}
