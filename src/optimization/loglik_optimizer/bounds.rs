//! loglik_optimizer::bounds: box constraints via an unconstrained reparametrization.
//!
//! Purpose
//! -------
//! Let the unconstrained L-BFGS solver fit models whose parameters live in a
//! box `lo_i ≤ θ_i ≤ hi_i`. Each coordinate is written as
//! `θ_i = lo_i + (hi_i - lo_i)·σ(u_i)` with `σ` the logistic function, and
//! the solver works on `u ∈ ℝᵏ`.
//!
//! Key behaviors
//! -------------
//! - [`Bounds`] validates the box and maps whole vectors between the two
//!   spaces.
//! - [`BoxConstrained`] wraps any [`LogLikelihood`] so that it can be handed
//!   to [`maximize`](super::maximize) in `u`-space; analytic gradients are
//!   pushed through the Jacobian of the map.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every bound is finite and `lo_i < hi_i`.
//! - Estimates mapped back with [`Bounds::to_model`] always satisfy the box,
//!   so callers never see an out-of-bounds `θ̂`.
//! - Starting points on an edge are nudged `LOGIT_EPS` inside it.
//!
//! Testing notes
//! -------------
//! - Unit tests cover validation, the vector maps and the chain-rule
//!   gradient against finite differences.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{Grad, Theta, traits::LogLikelihood},
    numerical_stability::{bounded_jacobian, to_bounded, to_unbounded},
};
use ndarray::Zip;

/// Closed box `[lower_i, upper_i]` for every parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Theta,
    upper: Theta,
}

impl Bounds {
    /// Build a validated box.
    ///
    /// # Errors
    /// - [`OptError::BoundsDimMismatch`] if the vectors differ in length.
    /// - [`OptError::InvalidBounds`] for the first coordinate whose bounds
    ///   are non-finite or not strictly ordered.
    pub fn new(lower: Theta, upper: Theta) -> OptResult<Self> {
        if lower.len() != upper.len() {
            return Err(OptError::BoundsDimMismatch { expected: lower.len(), found: upper.len() });
        }
        for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(OptError::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                    reason: "Bounds must be finite.",
                });
            }
            if lo >= hi {
                return Err(OptError::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                    reason: "Lower bound must be strictly below the upper bound.",
                });
            }
        }
        Ok(Self { lower, upper })
    }

    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    pub fn lower(&self) -> &Theta {
        &self.lower
    }

    pub fn upper(&self) -> &Theta {
        &self.upper
    }

    /// Whether `theta` lies inside the box, edges included.
    pub fn contains(&self, theta: &Theta) -> bool {
        theta.len() == self.len()
            && Zip::from(theta)
                .and(&self.lower)
                .and(&self.upper)
                .all(|&t, &lo, &hi| lo <= t && t <= hi)
    }

    /// Map an unconstrained vector `u` into the box.
    ///
    /// `u` must have length [`Bounds::len`]; callers inside this module
    /// check dimensions before mapping.
    pub fn to_model(&self, u: &Theta) -> Theta {
        Zip::from(u).and(&self.lower).and(&self.upper).map_collect(|&u, &lo, &hi| to_bounded(u, lo, hi))
    }

    /// Map a point of the box into unconstrained space.
    ///
    /// # Errors
    /// - [`OptError::BoundsDimMismatch`] if `theta` has the wrong length.
    /// - [`OptError::InvalidThetaInput`] if any entry is non-finite.
    pub fn to_unconstrained(&self, theta: &Theta) -> OptResult<Theta> {
        self.check_dim(theta)?;
        if let Some((index, &value)) = theta.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(OptError::InvalidThetaInput { index, value });
        }
        Ok(Zip::from(theta)
            .and(&self.lower)
            .and(&self.upper)
            .map_collect(|&t, &lo, &hi| to_unbounded(t, lo, hi)))
    }

    /// `dθ_i/du_i` evaluated at `u`.
    pub fn jacobian(&self, u: &Theta) -> Theta {
        Zip::from(u)
            .and(&self.lower)
            .and(&self.upper)
            .map_collect(|&u, &lo, &hi| bounded_jacobian(u, lo, hi))
    }

    pub(crate) fn check_dim(&self, theta: &Theta) -> OptResult<()> {
        if theta.len() != self.len() {
            return Err(OptError::BoundsDimMismatch { expected: self.len(), found: theta.len() });
        }
        Ok(())
    }
}

/// A log-likelihood viewed through the box reparametrization.
///
/// `value(u)` is `ℓ(to_model(u))`; `grad(u)` is `∇ℓ(θ) ⊙ dθ/du` when the
/// wrapped model provides an analytic gradient, and otherwise defers to the
/// optimizer's finite differences.
#[derive(Debug, Clone)]
pub struct BoxConstrained<'a, F: LogLikelihood> {
    inner: &'a F,
    bounds: &'a Bounds,
}

impl<'a, F: LogLikelihood> BoxConstrained<'a, F> {
    pub fn new(inner: &'a F, bounds: &'a Bounds) -> Self {
        Self { inner, bounds }
    }
}

impl<'a, F: LogLikelihood> LogLikelihood for BoxConstrained<'a, F> {
    type Data = F::Data;

    fn value(&self, u: &Theta, data: &Self::Data) -> OptResult<f64> {
        self.bounds.check_dim(u)?;
        self.inner.value(&self.bounds.to_model(u), data)
    }

    fn check(&self, u: &Theta, data: &Self::Data) -> OptResult<()> {
        self.bounds.check_dim(u)?;
        self.inner.check(&self.bounds.to_model(u), data)
    }

    fn grad(&self, u: &Theta, data: &Self::Data) -> OptResult<Grad> {
        self.bounds.check_dim(u)?;
        let g = self.inner.grad(&self.bounds.to_model(u), data)?;
        if g.len() != u.len() {
            return Err(OptError::GradientDimMismatch { expected: u.len(), found: g.len() });
        }
        Ok(g * self.bounds.jacobian(u))
    }
}
