//! optimization: parameter search for log-likelihood models.
//!
//! Purpose
//! -------
//! Everything needed to turn a log-likelihood `ℓ(θ)` into parameter
//! estimates: an argmin-backed L-BFGS optimizer with optional box
//! constraints, three derivative-free local searches, the numerically stable
//! transforms behind the box constraints, and a single error surface.
//!
//! Key behaviors
//! -------------
//! - `loglik_optimizer`: [`maximize`](loglik_optimizer::maximize) and
//!   [`maximize_bounded`](loglik_optimizer::maximize_bounded), with the
//!   objective sense, tolerances and line search set through `MLEOptions`.
//! - `local_search`: window search, coordinate sweep and forward-difference
//!   ascent, each with an iteration cap and a positive floor.
//! - `numerical_stability`: logistic/logit maps between a box and ℝ.
//! - `errors`: [`OptError`](errors::OptError) and
//!   [`OptResult`](errors::OptResult), covering configuration, model and
//!   argmin backend failures.
//!
//! Conventions
//! -----------
//! - Parameters are `ndarray::Array1<f64>` (`Theta`).
//! - Outcomes always report `ℓ(θ̂)`, never the internal cost.
//! - Library code here never prints; progress is emitted through the slog
//!   observer (`obs_slog`) and `tracing` events (`tracing`).
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests on synthetic objectives with known
//!   optima; the integration tests under `tests/` run the full spawn fits.

pub mod errors;
pub mod local_search;
pub mod loglik_optimizer;
pub mod numerical_stability;
