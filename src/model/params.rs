//! Spawn-model parameters and how they map onto the optimizer's vector.
//!
//! Purpose
//! -------
//! Name the five model parameters and describe which of them the optimizer
//! is free to move. A [`ParamLayout`] turns a free vector `θ` into a full
//! [`SpawnParams`] and back, so the likelihood has a single implementation
//! whether `(a, b)` is estimated or held at a regression fit.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`ParamLayout::expand`] rejects wrong lengths and non-finite entries;
//!   it does **not** enforce the box. Box constraints belong to the bounded
//!   optimizer, and out-of-box values are absorbed by the likelihood
//!   penalty.
//! - Parameter order is always `(a, b, c, d, e)`; a reduced layout keeps the
//!   order of the remaining `(c, d, e)`.
use ndarray::{Array1, array};

use crate::model::errors::{ModelError, ModelResult};

/// Full parameter set of the spawn model.
///
/// - threshold `s(t) = a·t + b`,
/// - trials `n(t) = c·t + d`,
/// - success probability `p(t) = e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl SpawnParams {
    pub const NAMES: [&'static str; 5] = ["a", "b", "c", "d", "e"];

    pub fn threshold(&self, t: f64) -> f64 {
        self.a * t + self.b
    }

    pub fn trials(&self, t: f64) -> f64 {
        self.c * t + self.d
    }

    pub fn success(&self) -> f64 {
        self.e
    }

    pub fn to_array(&self) -> Array1<f64> {
        array![self.a, self.b, self.c, self.d, self.e]
    }
}

/// Which parameters the optimizer sees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamLayout {
    /// `θ = (a, b, c, d, e)`.
    #[default]
    Full,
    /// `θ = (c, d, e)` with the threshold held at `s(t) = a·t + b`.
    FixedThreshold { a: f64, b: f64 },
}

impl ParamLayout {
    /// Length of the free vector.
    pub fn free_len(&self) -> usize {
        match self {
            ParamLayout::Full => 5,
            ParamLayout::FixedThreshold { .. } => 3,
        }
    }

    /// Names of the free parameters, in order.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            ParamLayout::Full => &SpawnParams::NAMES,
            ParamLayout::FixedThreshold { .. } => &SpawnParams::NAMES[2..],
        }
    }

    /// Build the full parameter set from a free vector.
    ///
    /// # Errors
    /// - [`ModelError::ThetaLengthMismatch`] if `theta.len() != free_len()`.
    /// - [`ModelError::InvalidThetaInput`] for the first non-finite entry.
    pub fn expand(&self, theta: &Array1<f64>) -> ModelResult<SpawnParams> {
        if theta.len() != self.free_len() {
            return Err(ModelError::ThetaLengthMismatch {
                expected: self.free_len(),
                actual: theta.len(),
            });
        }
        if let Some((index, &value)) = theta.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ModelError::InvalidThetaInput { index, value });
        }
        Ok(match *self {
            ParamLayout::Full => {
                SpawnParams { a: theta[0], b: theta[1], c: theta[2], d: theta[3], e: theta[4] }
            }
            ParamLayout::FixedThreshold { a, b } => {
                SpawnParams { a, b, c: theta[0], d: theta[1], e: theta[2] }
            }
        })
    }

    /// The free part of a full parameter set.
    pub fn project(&self, params: &SpawnParams) -> Array1<f64> {
        match self {
            ParamLayout::Full => params.to_array(),
            ParamLayout::FixedThreshold { .. } => array![params.c, params.d, params.e],
        }
    }

    /// Default search box: `a, c, e ∈ [0, 1]`, `b ∈ [0, 1000]`,
    /// `d ∈ [0, 10]`, restricted to the free parameters.
    pub fn default_bounds(&self) -> (Array1<f64>, Array1<f64>) {
        let lower = array![0.0, 0.0, 0.0, 0.0, 0.0];
        let upper = array![1.0, 1000.0, 1.0, 10.0, 1.0];
        match self {
            ParamLayout::Full => (lower, upper),
            ParamLayout::FixedThreshold { .. } => {
                (lower.slice_move(ndarray::s![2..]), upper.slice_move(ndarray::s![2..]))
            }
        }
    }
}
