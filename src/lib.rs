//! # Ridge: L2-regularized linear regression by gradient descent
//!
//! A small, `no_std`-capable ridge regression crate that fits linear weights
//! with fixed-length batch gradient descent over precomputed sufficient
//! statistics.
//!
//! ## What is ridge regression?
//!
//! Given observations `(xᵢ, yᵢ)` with `xᵢ ∈ ℝᵈ`, ridge regression looks for the
//! weight vector `θ` minimising
//!
//! ```text
//! J(θ) = (1/2n)·Σᵢ (xᵢ·θ − yᵢ)² + (λ/2)·‖θ‖²
//! ```
//!
//! The penalty `λ ≥ 0` shrinks the weights toward zero; `λ = 0` is ordinary
//! least squares.
//!
//! **How the fit works:**
//!
//! 1. Reduce the data once to `Σ = XᵀX`, `C = Xᵀy` and the count `n`.
//! 2. Start from `θ = (1, …, 1)`.
//! 3. Repeat exactly `iterations` times: `θ ← θ − α·((1/n)(Σθ − C) + λθ)`.
//!
//! Each step costs `O(d²)` regardless of `n`. There is no early stopping and
//! no divergence detection: a learning rate that is too large produces
//! non-finite weights, which are returned as they are.
//!
//! ## Quick Start
//!
//! ### One feature
//!
//! ```rust
//! use ridge_rs::prelude::*;
//!
//! let x = [1, 2, 3, 4, 5];
//! let y = [-3, -6, -9, -12, -15];
//!
//! let theta: f32 = fit_1d(&x, &y, 0.01, 0.0, 100)?;
//! assert!((theta + 3.0).abs() < 1e-3);
//! # Result::<(), RidgeError>::Ok(())
//! ```
//!
//! ### Many features
//!
//! ```rust
//! use ridge_rs::prelude::*;
//!
//! let x = Matrix::from_rows(&[[1.0_f64, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]])?;
//! let y = Matrix::column(&[2.0, 4.0, 2.0, 4.0])?;
//!
//! let model = Ridge::<f64>::new()
//!     .learning_rate(0.5)
//!     .iterations(100)
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! println!("{}", result);
//! # assert!((result.weights()[0] - 2.0).abs() < 1e-9);
//! # Result::<(), RidgeError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 4
//!   Features: 2
//!   Learning rate: 0.5
//!   Lambda: 0
//!   Iterations: 100
//!
//! Weights:
//!    Feature          Theta
//!   -----------------------
//!          0       2.000000
//!          1       4.000000
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fit returns `Result<_, RidgeError>`. A fit either produces the
//! complete weight vector or fails before any output exists.
//!
//! ```rust
//! use ridge_rs::prelude::*;
//!
//! // Features and labels disagree on the number of observations.
//! let err = fit_1d::<f64>(&[1, 2, 3], &[1, 2], 0.01, 0.0, 10).unwrap_err();
//! assert_eq!(err, RidgeError::MismatchedInputs { features: 3, labels: 2 });
//!
//! // `iterations` has no default.
//! let err = Ridge::<f64>::new().adapter(Batch).build().unwrap_err();
//! assert_eq!(err, RidgeError::MissingParameter { parameter: "iterations" });
//! ```
//!
//! ## Parameters
//!
//! | Parameter              | Default  | Range            | Description                                  | Adapter   |
//! |------------------------|----------|------------------|----------------------------------------------|-----------|
//! | **learning_rate**      | 0.01     | finite, `> 0`    | Step size α                                  | All       |
//! | **lambda**             | 0.0      | finite, `≥ 0`    | Ridge penalty λ                              | All       |
//! | **iterations**         | required | `[0, ∞)`         | Number of descent steps                      | All       |
//! | **dimensions**         | None     | `[1, ∞)`         | Number of features (checked against data)    | All       |
//! | **return_diagnostics** | false    | true/false       | Gradient norm, and RMSE/MAE/R² in batch mode | All       |
//!
//! Setting the same parameter twice is reported as `DuplicateParameter` by `build()`.
//!
//! ## Adapters
//!
//! | Adapter     | Use Case                                              | Notes                                   |
//! |-------------|-------------------------------------------------------|-----------------------------------------|
//! | `Batch`     | Complete dataset in memory                            | Full diagnostics available              |
//! | `Aggregate` | Data arriving in pieces, or split across partitions   | `O(d²)` state; requires `dimensions`    |
//!
//! ### Aggregate Adapter
//!
//! The aggregate keeps only the sufficient statistics. Partial aggregates over
//! disjoint partitions are combined by addition, and the descent loop runs
//! once in `finalise`.
//!
//! ```rust
//! use ridge_rs::prelude::*;
//!
//! let builder = Ridge::<f64>::new().learning_rate(0.5).iterations(100).dimensions(2);
//!
//! let mut left = builder.clone().adapter(Aggregate).build()?;
//! left.update(&[1.0, 0.0], 2.0)?;
//! left.update(&[0.0, 1.0], 4.0)?;
//!
//! let mut right = builder.adapter(Aggregate).build()?;
//! right.update(&[1.0, 0.0], 2.0)?;
//! right.update(&[0.0, 1.0], 4.0)?;
//!
//! left.combine(&right)?;
//! let result = left.finalise()?;
//!
//! assert_eq!(result.n_observations, 4);
//! assert!((result.weights()[1] - 4.0).abs() < 1e-9);
//! # Result::<(), RidgeError>::Ok(())
//! ```
//!
//! ## Stepping the solver
//!
//! `GradientDescent` exposes single steps, so a caller can observe the
//! trajectory instead of only the final weights.
//!
//! ```rust
//! use ridge_rs::prelude::*;
//!
//! let x = Matrix::from_rows(&[[1.0_f64, 0.0], [0.0, 1.0]])?;
//! let y = Matrix::column(&[2.0, 4.0])?;
//! let stats = SufficientStatistics::accumulate(&x, &y)?;
//!
//! let solver = GradientDescent::new(&stats, Hyperparameters::new(0.5, 0.0, 0))?;
//! let theta0 = solver.initial_weights()?;
//! let theta1 = solver.step(&theta0)?;
//!
//! assert!(solver.gradient(&theta1)?.norm() < solver.gradient(&theta0)?.norm());
//! # Result::<(), RidgeError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to drop the standard library dependency. An
//! allocator is still required for matrices.
//!
//! ```toml
//! [dependencies]
//! ridge-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Cargo features
//!
//! - `std` (default): standard library support.
//! - `serde`: `Serialize`/`Deserialize` for `Matrix`, `SufficientStatistics`,
//!   `Hyperparameters`, `Diagnostics` and `RidgeResult`, so partial statistics
//!   can be shipped between workers.
//! - `dev`: exposes the `internals` module for testing.
//!
//! ## Logging
//!
//! Solves emit `tracing` events (`debug` for stage transitions, `trace` for
//! aggregate updates). The crate never installs a subscriber.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the `Matrix` type and the `RidgeError` taxonomy.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains matrix algebra and the dense symmetric solver.
mod math;

// Layer 3: Algorithms - core ridge algorithms.
//
// Contains the sufficient-statistics accumulators and the gradient-descent
// solver in scalar and general form.
mod algorithms;

// Layer 4: Evaluation - diagnostics.
//
// Contains gradient norm and residual metrics (RMSE, MAE, R^2).
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the solve pipeline and result assembly.
mod engine;

// Layer 6: Adapters - execution mode adapters.
//
// Contains the batch adapter and the incremental aggregate.
mod adapters;

// High-level fluent API for ridge regression.
//
// Provides the `Ridge` builder and the plain `fit_1d` / `fit_nd` functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard ridge prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use ridge_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Aggregate, Batch},
        AggregateRidgeBuilder, BatchRidge, BatchRidgeBuilder, Diagnostics, GradientDescent,
        Hyperparameters, Matrix, RidgeAggregate, RidgeBuilder as Ridge, RidgeError, RidgeResult,
        ScalarGradientDescent, ScalarStatistics, SufficientStatistics, algebra, fit_1d, fit_nd,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
