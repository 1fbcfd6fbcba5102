//! atomas_estimate: maximum-likelihood fit of the Atomas spawn model.
//!
//! Purpose
//! -------
//! Estimate how the game Atomas picks the element number of each spawned
//! atom. The model is `X_t ~ s(t) + Bin(n(t), p)` with a linear threshold
//! `s(t) = a·t + b`, a linear trial count `n(t) = c·t + d` and a constant
//! success probability `p = e`, fitted to a recorded sequence of spawns.
//!
//! Key behaviors
//! -------------
//! - [`atoms`]: the embedded sequence, special-atom tags and the validated
//!   observation container.
//! - [`model`]: the spawn log-likelihood, its parameter layouts and the
//!   least-squares threshold regression.
//! - [`optimization`]: L-BFGS (argmin) with optional box constraints, plus
//!   the derivative-free window and finite-difference searches.
//! - [`analysis`]: one full run producing a printable report.
//!
//! Invariants & assumptions
//! ------------------------
//! - Library code never prints. Progress goes through the `tracing`
//!   feature (search and pipeline events) and the `obs_slog` feature
//!   (per-iteration solver state).
//! - Every fallible operation returns a typed error (`AtomError`,
//!   `ModelError`, `OptError`).
//!
//! Downstream usage
//! ----------------
//! - `atomas-estimate` runs [`analysis::run_analysis`] on
//!   [`atoms::ATOM_SEQUENCE`] and prints the report.

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod analysis;
pub mod atoms;
pub mod model;
pub mod optimization;
