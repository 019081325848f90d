//! Dense row-major matrix with enforced shape invariants.
//!
//! ## Purpose
//!
//! This module provides `Matrix`, the value type shared by the feature set,
//! the label set, the sufficient statistics and the fitted weights. A column
//! vector is simply a matrix with one column.
//!
//! ## Invariants
//!
//! * `rows >= 1` and `cols >= 1`.
//! * Storage holds exactly `rows * cols` elements in row-major order.
//! * Shape never changes after construction.
//!
//! ## Non-goals
//!
//! * Sparse storage and views into other matrices.
//! * Arithmetic (see `math::algebra`) and formatting (see `engine::output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RidgeError;

// ============================================================================
// Matrix
// ============================================================================

/// A dense `rows x cols` grid of real numbers stored row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix<T>", into = "RawMatrix<T>"),
    serde(bound(
        serialize = "T: Clone + serde::Serialize",
        deserialize = "T: Copy + serde::Deserialize<'de>"
    ))
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    /// Create a matrix from row-major storage.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, RidgeError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(data.len()) {
            return Err(RidgeError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix with every element set to `value`.
    ///
    /// Fails with `InvalidShape` when a dimension is zero or when
    /// `rows * cols` elements can not be addressed.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, RidgeError> {
        let invalid = RidgeError::InvalidShape { rows, cols, len: 0 };
        if rows == 0 || cols == 0 {
            return Err(invalid);
        }
        let len = rows.checked_mul(cols).ok_or(invalid.clone())?;
        // Vec capacity is bounded by isize::MAX bytes
        let bytes = len.checked_mul(core::mem::size_of::<T>()).ok_or(invalid.clone())?;
        if bytes > isize::MAX as usize {
            return Err(invalid);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![value; len],
        })
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must have the width of the first one.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, RidgeError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if n_rows == 0 || n_cols == 0 {
            return Err(RidgeError::InvalidShape {
                rows: n_rows,
                cols: n_cols,
                len: 0,
            });
        }

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(RidgeError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Create a column vector (`len x 1`).
    pub fn column(values: &[T]) -> Result<Self, RidgeError> {
        Self::new(values.len(), 1, values.to_vec())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over rows.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// Row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Whether the matrix is a column vector.
    #[inline]
    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Build a matrix of the same shape by mapping every element.
    pub(crate) fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Build a matrix of the same shape from two equally shaped operands.
    ///
    /// Callers check the shapes first.
    pub(crate) fn zip_map(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Build a matrix directly from parts already known to be consistent.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert!(rows >= 1 && cols >= 1 && data.len() == rows * cols);
        Self { rows, cols, data }
    }

    /// Mutable row-major storage.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Float> Matrix<T> {
    /// All-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, RidgeError> {
        Self::filled(rows, cols, T::zero())
    }

    /// All-one matrix.
    pub fn ones(rows: usize, cols: usize) -> Result<Self, RidgeError> {
        Self::filled(rows, cols, T::one())
    }

    /// Square identity matrix.
    pub fn identity(size: usize) -> Result<Self, RidgeError> {
        let mut m = Self::zeros(size, size)?;
        for i in 0..size {
            m.data[i * size + i] = T::one();
        }
        Ok(m)
    }

    /// Euclidean (Frobenius) norm of all elements.
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &v| acc + v * v)
            .sqrt()
    }

    /// Whether every element is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Unchecked wire form of a `Matrix`; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Copy> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = RidgeError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, Self::Error> {
        Matrix::new(raw.rows, raw.cols, raw.data)
    }
}

#[cfg(feature = "serde")]
impl<T> From<Matrix<T>> for RawMatrix<T> {
    fn from(m: Matrix<T>) -> Self {
        RawMatrix {
            rows: m.rows,
            cols: m.cols,
            data: m.data,
        }
    }
}
