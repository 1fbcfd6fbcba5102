//! Log-likelihood of the spawn model.
//!
//! For an observation `(t, x)` the distance to the threshold is
//! `D_t = |x - s(t)|`. With `n = round(n(t))` and `k = round(D_t)`, the
//! observation contributes
//!
//! ```text
//! D_t · ln(e) · ln(1 - e) + ln C(n, k)     if C(n, k) > 0
//! -PENALTY                                 otherwise
//! ```
//!
//! `D_t` itself is never rounded in the first term. When `e` is not
//! strictly inside `(0, 1)` the factor `ln(e)·ln(1 - e)` is replaced by
//! `-PENALTY`. The total is finite for every finite parameter set.
use crate::{
    atoms::observations::{Observation, Observations},
    model::{binomial::ln_binomial_coefficient, params::SpawnParams},
};

/// Finite stand-in for `-∞` on impossible draws and degenerate `e`.
pub const PENALTY: f64 = 10_000.0;

/// `ln(e)·ln(1 - e)`, or `-PENALTY` unless `0 < e < 1`.
pub fn success_term(e: f64) -> f64 {
    if e > 0.0 && e < 1.0 { e.ln() * (-e).ln_1p() } else { -PENALTY }
}

/// Contribution of one observation, given the precomputed
/// [`success_term`] `t1`.
pub fn observation_term(params: &SpawnParams, t1: f64, obs: &Observation) -> f64 {
    let t = obs.t as f64;
    let distance = (f64::from(obs.x) - params.threshold(t)).abs();
    match ln_binomial_coefficient(params.trials(t), distance) {
        Some(ln_c) => distance * t1 + ln_c,
        None => -PENALTY,
    }
}

/// Total log-likelihood over every observation.
pub fn spawn_log_likelihood(params: &SpawnParams, observations: &Observations) -> f64 {
    let t1 = success_term(params.success());
    observations.iter().map(|obs| observation_term(params, t1, obs)).sum()
}
