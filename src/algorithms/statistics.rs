//! Sufficient statistics for least-squares gradients.
//!
//! ## Purpose
//!
//! This module defines the fixed-size aggregates that fully determine the
//! ridge gradient at any weight vector: `Σ = XᵀX`, `C = Xᵀy` and the number
//! of observations `n`. Once accumulated, no iteration touches the raw data
//! again, so the cost of an iteration is `O(d²)` regardless of `n`.
//!
//! ## Design notes
//!
//! * **Mergeable**: Statistics of disjoint observation subsets combine by
//!   element-wise addition, which is what the aggregate lifecycle relies on.
//! * **Scalar form**: `ScalarStatistics` holds the one-feature case as plain
//!   scalars. Integer inputs are summed exactly before conversion.
//!
//! ## Invariants
//!
//! * `sigma` is `d x d` and symmetric; `c` is `d x 1`.
//! * `sigma`, `c` and `n` change only through `accumulate`, `update`,
//!   `update_batch` and `merge`.
//!
//! ## Non-goals
//!
//! * Centering or scaling of features.
//! * Streaming over data that does not fit in a `Matrix`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::accumulators::StatsLinalg;
use crate::math::algebra;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::RidgeError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Sufficient Statistics
// ============================================================================

/// `Σ = XᵀX`, `C = Xᵀy` and the observation count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawStatistics<T>", into = "RawStatistics<T>"),
    serde(bound(
        serialize = "T: Clone + serde::Serialize",
        deserialize = "T: Copy + serde::Deserialize<'de>"
    ))
)]
pub struct SufficientStatistics<T> {
    sigma: Matrix<T>,
    c: Matrix<T>,
    n: usize,
}

impl<T: StatsLinalg> SufficientStatistics<T> {
    /// Zero statistics for `dimensions` features and no observations.
    pub fn zeros(dimensions: usize) -> Result<Self, RidgeError> {
        Ok(Self {
            sigma: Matrix::zeros(dimensions, dimensions)?,
            c: Matrix::zeros(dimensions, 1)?,
            n: 0,
        })
    }

    /// Reduce a feature set (`n x d`) and label set (`n x 1`) in one pass.
    pub fn accumulate(features: &Matrix<T>, labels: &Matrix<T>) -> Result<Self, RidgeError> {
        let mut stats = Self::zeros(features.cols())?;
        stats.update_batch(features, labels)?;
        Ok(stats)
    }

    /// Fold a block of observations into the statistics.
    pub fn update_batch(
        &mut self,
        features: &Matrix<T>,
        labels: &Matrix<T>,
    ) -> Result<(), RidgeError> {
        if !labels.is_column() {
            return Err(RidgeError::DimensionMismatch {
                operation: "accumulate",
                lhs_rows: features.rows(),
                lhs_cols: features.cols(),
                rhs_rows: labels.rows(),
                rhs_cols: labels.cols(),
            });
        }
        if features.rows() != labels.rows() {
            return Err(RidgeError::MismatchedInputs {
                features: features.rows(),
                labels: labels.rows(),
            });
        }
        if features.cols() != self.dimensions() {
            return Err(RidgeError::DimensionMismatch {
                operation: "accumulate",
                lhs_rows: self.sigma.rows(),
                lhs_cols: self.sigma.cols(),
                rhs_rows: features.rows(),
                rhs_cols: features.cols(),
            });
        }

        let d = self.dimensions();
        T::accumulate_gram(
            features.as_slice(),
            labels.as_slice(),
            d,
            self.sigma.as_mut_slice(),
            self.c.as_mut_slice(),
        );
        self.n += features.rows();

        Ok(())
    }

    /// Fold a single observation into the statistics.
    pub fn update(&mut self, row: &[T], label: T) -> Result<(), RidgeError> {
        let d = self.dimensions();
        if row.len() != d {
            return Err(RidgeError::DimensionMismatch {
                operation: "update",
                lhs_rows: 1,
                lhs_cols: d,
                rhs_rows: 1,
                rhs_cols: row.len(),
            });
        }

        T::accumulate_gram(
            row,
            &[label],
            d,
            self.sigma.as_mut_slice(),
            self.c.as_mut_slice(),
        );
        self.n += 1;

        Ok(())
    }

    /// Statistics of the union of two disjoint observation sets.
    pub fn merge(&self, other: &Self) -> Result<Self, RidgeError> {
        Ok(Self {
            sigma: algebra::add(&self.sigma, &other.sigma)?,
            c: algebra::add(&self.c, &other.c)?,
            n: self.n + other.n,
        })
    }

    /// Closed-form ridge weights solving `(Σ/n + λI) θ = C/n`.
    ///
    /// Returns `None` when there are no observations or the system is
    /// singular beyond what the SVD fallback can handle.
    pub fn closed_form(&self, lambda: T) -> Option<Matrix<T>> {
        let inv_n = self.inverse_count()?;
        let d = self.dimensions();

        let mut a = algebra::scalar_multiply(&self.sigma, inv_n);
        for i in 0..d {
            let diag = &mut a.as_mut_slice()[i * d + i];
            *diag = *diag + lambda;
        }
        let b = algebra::scalar_multiply(&self.c, inv_n);

        <T as FloatLinalg>::solve_symmetric(a.as_slice(), b.as_slice(), d)
            .and_then(|theta| Matrix::new(d, 1, theta).ok())
    }

    /// `XᵀX` (`d x d`).
    #[inline]
    pub fn sigma(&self) -> &Matrix<T> {
        &self.sigma
    }

    /// `Xᵀy` (`d x 1`).
    #[inline]
    pub fn c(&self) -> &Matrix<T> {
        &self.c
    }

    /// Number of observations folded in.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of features `d`.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.c.rows()
    }

    /// `1/n`, or `None` for empty statistics.
    pub(crate) fn inverse_count(&self) -> Option<T> {
        if self.n == 0 {
            return None;
        }
        T::from(self.n).map(|n| T::one() / n)
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Wire form of `SufficientStatistics`; shapes are re-checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(bound(
    serialize = "T: Clone + serde::Serialize",
    deserialize = "T: Copy + serde::Deserialize<'de>"
))]
struct RawStatistics<T> {
    sigma: Matrix<T>,
    c: Matrix<T>,
    n: usize,
}

#[cfg(feature = "serde")]
impl<T: Copy> TryFrom<RawStatistics<T>> for SufficientStatistics<T> {
    type Error = RidgeError;

    fn try_from(raw: RawStatistics<T>) -> Result<Self, Self::Error> {
        let d = raw.c.rows();
        if !raw.c.is_column() || raw.sigma.shape() != (d, d) {
            return Err(RidgeError::DimensionMismatch {
                operation: "deserialize",
                lhs_rows: raw.sigma.rows(),
                lhs_cols: raw.sigma.cols(),
                rhs_rows: raw.c.rows(),
                rhs_cols: raw.c.cols(),
            });
        }
        Ok(Self {
            sigma: raw.sigma,
            c: raw.c,
            n: raw.n,
        })
    }
}

#[cfg(feature = "serde")]
impl<T> From<SufficientStatistics<T>> for RawStatistics<T> {
    fn from(stats: SufficientStatistics<T>) -> Self {
        RawStatistics {
            sigma: stats.sigma,
            c: stats.c,
            n: stats.n,
        }
    }
}

// ============================================================================
// Scalar Statistics
// ============================================================================

/// Sufficient statistics of the one-feature case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarStatistics<T> {
    /// Sum of squared features.
    pub sigma: T,
    /// Sum of feature-label products.
    pub c: T,
    /// Number of observations.
    pub n: usize,
}

impl<T: Float> ScalarStatistics<T> {
    /// Reduce integer features and labels in one pass.
    ///
    /// Sums are exact (`i128`) and converted to `T` once at the end.
    pub fn accumulate(features: &[i32], labels: &[i32]) -> Result<Self, RidgeError> {
        if features.len() != labels.len() {
            return Err(RidgeError::MismatchedInputs {
                features: features.len(),
                labels: labels.len(),
            });
        }
        if features.is_empty() {
            return Err(RidgeError::EmptyDataset);
        }

        let (sigma, c) = features
            .iter()
            .zip(labels.iter())
            .fold((0i128, 0i128), |(s, c), (&x, &y)| {
                let x = x as i128;
                (s + x * x, c + x * y as i128)
            });

        Ok(Self {
            sigma: T::from(sigma).unwrap_or_else(T::nan),
            c: T::from(c).unwrap_or_else(T::nan),
            n: features.len(),
        })
    }

    /// `1/n`, or `None` for empty statistics.
    pub(crate) fn inverse_count(&self) -> Option<T> {
        if self.n == 0 {
            return None;
        }
        T::from(self.n).map(|n| T::one() / n)
    }
}
