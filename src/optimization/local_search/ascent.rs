//! Forward-difference coordinate ascent.
//!
//! Each iteration measures `Δ_i = ℓ(θ + dx·e_i) - ℓ(θ)` for every coordinate
//! at the same base point and then moves all coordinates at once by
//! `rate_i · global_rate · Δ_i / dx`, clamping the result to
//! `[floor, ceiling_i]`. There is no line
//! search and no guarantee of convergence; this is a best-effort local
//! ascent.
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use ndarray::Array1;

use crate::optimization::{
    errors::{OptError, OptResult},
    local_search::{
        counter::{CountingEval, clamp_to_range},
        options::AscentOptions,
    },
    loglik_optimizer::{LogLikelihood, OptimOutcome, Theta},
};

/// Climb `ℓ` from `theta0` with forward-difference steps.
///
/// Stops once `Σ Δ_i² < opts.tol` at the current point, or after
/// `opts.max_iter` updates with `converged == false`. `grad_norm` is the
/// norm of the last forward-difference estimate `Δ / dx`.
///
/// # Errors
/// - [`OptError::LearningRateDimMismatch`] if `opts.rates` does not match
///   `theta0`.
/// - [`OptError::CeilingDimMismatch`] if `opts.ceilings` does not match
///   `theta0`.
/// - Propagates `f.check(theta0)` and evaluation errors.
pub fn finite_diff_ascent<F: LogLikelihood>(
    f: &F, theta0: &Theta, data: &F::Data, opts: &AscentOptions,
) -> OptResult<OptimOutcome> {
    if let Some(rates) = &opts.rates {
        if rates.len() != theta0.len() {
            return Err(OptError::LearningRateDimMismatch {
                expected: theta0.len(),
                found: rates.len(),
            });
        }
    }
    if let Some(ceilings) = &opts.ceilings {
        if ceilings.len() != theta0.len() {
            return Err(OptError::CeilingDimMismatch {
                expected: theta0.len(),
                found: ceilings.len(),
            });
        }
    }
    f.check(theta0, data)?;
    let counter = CountingEval::new(f, data);
    let dim = theta0.len();
    let mut theta = theta0.clone();
    let mut deltas = Array1::<f64>::zeros(dim);
    let mut iterations = 0;
    let mut converged = false;

    loop {
        let base = counter.value(&theta)?;
        let mut bumped = theta.clone();
        for i in 0..dim {
            bumped[i] += opts.step;
            deltas[i] = counter.value(&bumped)? - base;
            bumped[i] = theta[i];
        }
        if deltas.dot(&deltas) < opts.tol {
            converged = true;
            break;
        }
        if iterations == opts.max_iter {
            break;
        }
        iterations += 1;
        for i in 0..dim {
            let moved = theta[i] + opts.rate(i) * opts.global_rate * deltas[i] / opts.step;
            theta[i] = clamp_to_range(moved, opts.floor, opts.ceiling(i));
        }
        trace_debug!(iterations, loglik = base, "ascent step");
    }

    let value = counter.value(&theta)?;
    trace_info!(iterations, converged, value, "finite-difference ascent finished");
    let termination = if converged {
        TerminationStatus::Terminated(TerminationReason::SolverConverged)
    } else {
        TerminationStatus::Terminated(TerminationReason::MaxItersReached)
    };
    let grad_estimate = &deltas / opts.step;
    let mut outcome = OptimOutcome::new(
        Some(theta),
        value,
        termination,
        iterations as u64,
        counter.fn_evals(),
        None,
    )?;
    outcome.grad_norm = Some(grad_estimate.l2_norm());
    Ok(outcome)
}
