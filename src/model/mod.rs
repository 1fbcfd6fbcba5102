//! model: the Atomas spawn model.
//!
//! Purpose
//! -------
//! Describe atom spawns as `X_t ~ s(t) + Bin(n(t), p)` with a linear
//! threshold `s(t) = a·t + b`, linear trial count `n(t) = c·t + d` and
//! constant success probability `p = e`, and expose its log-likelihood to
//! the optimizers.
//!
//! Key behaviors
//! -------------
//! - [`binomial`]: rounded binomial coefficients and their logarithms.
//! - [`likelihood`]: the per-observation terms and the penalty for
//!   impossible draws.
//! - [`params`]: named parameters and the full / fixed-threshold layouts.
//! - [`spawn`]: [`SpawnModel`], the `LogLikelihood` implementation with a
//!   `fit` method over every [`Estimator`].
//! - [`regression`]: the least-squares threshold fit used to fix `(a, b)`
//!   for the reduced model.
//!
//! Invariants & assumptions
//! ------------------------
//! - The likelihood is finite for every finite parameter set.
//! - Parameter validation covers length and finiteness only.

pub mod binomial;
pub mod errors;
pub mod likelihood;
pub mod params;
pub mod regression;
pub mod spawn;

pub use self::errors::{ModelError, ModelResult};
pub use self::likelihood::{PENALTY, spawn_log_likelihood};
pub use self::params::{ParamLayout, SpawnParams};
pub use self::regression::{ThresholdRegression, fit_threshold, ols_threshold};
pub use self::spawn::{Estimator, SpawnModel};
