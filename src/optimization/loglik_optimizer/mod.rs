//! loglik_optimizer: argmin-powered log-likelihood fitting.
//!
//! Purpose
//! -------
//! Fit models by optimizing a log-likelihood `ℓ(θ)`. Callers implement one
//! trait, [`LogLikelihood`], and call [`maximize`] (unconstrained) or
//! [`maximize_bounded`] (box constraints) to run L-BFGS with a configurable
//! line search, tolerances and finite-difference fallback.
//!
//! Key behaviors
//! -------------
//! - [`adapter::ArgMinAdapter`] turns `ℓ(θ)` into an argmin cost according
//!   to [`ObjectiveSense`]: `-ℓ(θ)` by default, `ℓ(θ)` under `Minimize`.
//! - [`bounds`] reparametrizes a box `lo ≤ θ ≤ hi` through a logistic map so
//!   the unconstrained solver can handle it.
//! - [`builders`] constructs the L-BFGS solvers and [`run::run_lbfgs`] runs
//!   them, normalizing the result into an [`OptimOutcome`].
//! - [`finite_diff`] supplies gradients when the model has none.
//!
//! Invariants & assumptions
//! ------------------------
//! - Models implement `ℓ(θ)` and, optionally, `∇ℓ(θ)`; never the cost.
//! - [`LogLikelihood::value`] reports invalid inputs as [`OptError`](crate::optimization::errors::OptError)
//!   values, not panics.
//! - [`OptimOutcome::value`] is always `ℓ(θ̂)`, whatever the sense.
//! - [`Tolerances`] and [`MLEOptions`] are validated on construction.
//!
//! Downstream usage
//! ----------------
//! - `model::SpawnModel` and `model::ThresholdRegression` implement
//!   [`LogLikelihood`]; the spawn fit uses [`maximize_bounded`], the
//!   regression uses [`maximize`].
//! - The local searches in `optimization::local_search` share
//!   [`LogLikelihood`], [`Theta`] and [`OptimOutcome`] with this module.
//!
//! Testing notes
//! -------------
//! - Sign conventions and gradient fallback: [`adapter`].
//! - Box maps and chain rule: [`bounds`].
//! - End-to-end solves on toy quadratics, including `Minimize`: [`api`].

pub mod adapter;
pub mod api;
pub mod bounds;
pub mod builders;
pub mod finite_diff;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::{maximize, maximize_bounded};
pub use self::bounds::{Bounds, BoxConstrained};
pub use self::traits::{
    LineSearcher, LogLikelihood, MLEOptions, ObjectiveSense, OptimOutcome, Tolerances,
};
pub use self::types::{COST_COUNT, Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};
