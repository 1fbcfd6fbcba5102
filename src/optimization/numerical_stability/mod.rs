//! numerical_stability: stable transforms between box and unconstrained space.
//!
//! Purpose
//! -------
//! Collect the scalar transforms the bounded optimizer needs to run an
//! unconstrained solver (L-BFGS) on a box-constrained problem. This module
//! centralizes the small tolerance used near the box edges so every caller
//! clamps the same way.
//!
//! Key behaviors
//! -------------
//! - Provide a stable logistic (`safe_logistic`) and logit (`safe_logit`)
//!   that never overflow and never return `±∞` for finite inputs.
//! - Map single coordinates between `[lo, hi]` and ℝ (`to_bounded`,
//!   `to_unbounded`) and expose the Jacobian of that map
//!   (`bounded_jacobian`) for chain-rule gradient propagation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite and `lo < hi`; bound validation happens in
//!   `loglik_optimizer::bounds`, not here.
//! - `to_unbounded` clamps points at or beyond the box edge to
//!   `LOGIT_EPS` inside it, so starting points on a bound are accepted.
//!
//! Conventions
//! -----------
//! - Pure scalar functions over `f64`; vector-level mapping lives with the
//!   `Bounds` type.
//! - No logging, I/O or global state.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with naïve formulas
//!   on safe grids, tail saturation, edge round trips and the Jacobian.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    LOGIT_EPS, bounded_jacobian, safe_logistic, safe_logit, to_bounded, to_unbounded,
};
