//! Numerical stability utilities.
//!
//! Provides safe implementations of the transforms used to move between a
//! box-constrained parameter space and the unconstrained space the L-BFGS
//! solver works in. The naïve formulas overflow (`exp` of large arguments)
//! or hit `ln(0)` at the box edges; the versions here stay finite for every
//! finite input.
//!
//! # Provided items
//! - [`LOGIT_EPS`]: distance kept from the box edges when mapping a point
//!   into unconstrained space (default 1e-12).
//! - [`safe_logistic(x)`]: stable `1 / (1 + exp(-x))`, mapping ℝ → [0, 1].
//! - [`safe_logit(p)`]: inverse of the logistic on `[LOGIT_EPS, 1 - LOGIT_EPS]`.
//! - [`to_bounded`] / [`to_unbounded`]: the affine-logistic map
//!   `θ = lo + (hi - lo)·σ(u)` and its inverse.
//! - [`bounded_jacobian`]: `dθ/du` for the same map.

/// Distance kept from `0` and `1` before taking a logit.
///
/// Points sitting exactly on a box edge (the usual case for bounds like
/// `e ∈ [0, 1]` with a start at `0`) would otherwise map to `±∞`.
pub const LOGIT_EPS: f64 = 1e-12;

/// Numerically stable logistic: `σ(x) = 1 / (1 + exp(-x))`.
///
/// Branches on the sign of `x` so `exp` is only ever called on a
/// non-positive argument.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

/// Stable logit `ln(p / (1 - p))`, with `p` clamped to
/// `[LOGIT_EPS, 1 - LOGIT_EPS]` first.
pub fn safe_logit(p: f64) -> f64 {
    let p = p.clamp(LOGIT_EPS, 1.0 - LOGIT_EPS);
    p.ln() - (-p).ln_1p()
}

/// Map an unconstrained coordinate into `[lower, upper]`.
pub fn to_bounded(u: f64, lower: f64, upper: f64) -> f64 {
    lower + (upper - lower) * safe_logistic(u)
}

/// Map a point of `[lower, upper]` into unconstrained space.
///
/// Points outside the box are treated as if they sat on the nearest edge.
pub fn to_unbounded(theta: f64, lower: f64, upper: f64) -> f64 {
    safe_logit((theta - lower) / (upper - lower))
}

/// Derivative `dθ/du` of [`to_bounded`] at `u`.
pub fn bounded_jacobian(u: f64, lower: f64, upper: f64) -> f64 {
    let s = safe_logistic(u);
    (upper - lower) * s * (1.0 - s)
}
