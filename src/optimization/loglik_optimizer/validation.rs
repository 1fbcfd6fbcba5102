//! Finiteness and tolerance checks shared by the spawn-model fits.
//!
//! Every path that hands a number back to a caller goes through here:
//!
//! - `MLEOptions` and `Tolerances` reject a zero, negative or infinite
//!   stopping rule before L-BFGS starts ([`verify_tol_grad`],
//!   [`verify_tol_cost`]).
//! - The cost adapter and the finite-difference routines reject a gradient
//!   of the wrong length or with a non-finite entry ([`validate_grad`]).
//!   A difference across a rounding boundary of `n(t)` is large but finite
//!   and passes.
//! - `OptimOutcome::new` refuses to report a missing or non-finite `θ̂`
//!   ([`validate_theta_hat`]).
//! - `OptimOutcome::new` and the counting evaluator of the window, sweep and
//!   ascent searches reject a non-finite `ℓ` ([`validate_value`]). The spawn
//!   likelihood replaces impossible draws with a finite penalty, so a
//!   non-finite value always means a bad parameter vector.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{Grad, Theta},
};

/// Index and value of the first non-finite entry, if any.
fn first_non_finite(values: &Theta) -> Option<(usize, f64)> {
    values.iter().copied().enumerate().find(|(_, v)| !v.is_finite())
}

/// Reason a stopping tolerance is unusable, if it is.
fn tol_problem(tol: f64) -> Option<&'static str> {
    if !tol.is_finite() {
        Some("Tolerance must be finite.")
    } else if tol <= 0.0 {
        Some("Tolerance must be positive.")
    } else {
        None
    }
}

/// Check the gradient-norm stopping rule; `None` disables it.
///
/// # Errors
/// [`OptError::InvalidTolGrad`] for a non-finite or non-positive value.
pub fn verify_tol_grad(tol: Option<f64>) -> OptResult<()> {
    match tol.and_then(|t| tol_problem(t).map(|reason| (t, reason))) {
        Some((tol, reason)) => Err(OptError::InvalidTolGrad { tol, reason }),
        None => Ok(()),
    }
}

/// Check the cost-change stopping rule; `None` disables it.
///
/// # Errors
/// [`OptError::InvalidTolCost`] for a non-finite or non-positive value.
pub fn verify_tol_cost(tol: Option<f64>) -> OptResult<()> {
    match tol.and_then(|t| tol_problem(t).map(|reason| (t, reason))) {
        Some((tol, reason)) => Err(OptError::InvalidTolCost { tol, reason }),
        None => Ok(()),
    }
}

/// Check that `grad` has one finite entry per free parameter.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if `grad.len() != dim`.
/// - [`OptError::InvalidGradient`] at the first non-finite entry.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    match first_non_finite(grad) {
        Some((index, value)) => Err(OptError::InvalidGradient {
            index,
            value,
            reason: "Gradient elements must be finite.",
        }),
        None => Ok(()),
    }
}

/// Unwrap the final estimate of a search, refusing missing or non-finite
/// parameters.
///
/// # Errors
/// - [`OptError::MissingThetaHat`] if the solver kept no best parameter.
/// - [`OptError::InvalidThetaHat`] at the first non-finite entry.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    let theta_hat = theta_hat.ok_or(OptError::MissingThetaHat)?;
    match first_non_finite(&theta_hat) {
        Some((index, value)) => Err(OptError::InvalidThetaHat {
            index,
            value,
            reason: "Parameter estimates must be finite.",
        }),
        None => Ok(theta_hat),
    }
}

/// Check one evaluation of `ℓ`. Large negative values such as the
/// impossible-draw penalty pass.
///
/// # Errors
/// [`OptError::NonFiniteCost`] if `value` is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn verify_tolerances_accept_none_and_positive_values() {
        assert!(verify_tol_grad(None).is_ok());
        assert!(verify_tol_grad(Some(1e-8)).is_ok());
        assert!(verify_tol_cost(Some(1e-12)).is_ok());
    }

    #[test]
    fn verify_tolerances_reject_zero_and_infinite_values() {
        assert!(matches!(verify_tol_grad(Some(0.0)), Err(OptError::InvalidTolGrad { .. })));
        assert!(matches!(
            verify_tol_cost(Some(f64::INFINITY)),
            Err(OptError::InvalidTolCost { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Gradient validation reports the first problem it meets.
    //
    // Given
    // -----
    // - A gradient of the wrong length.
    // - A gradient of the right length with a NaN in position 1.
    //
    // Expect
    // ------
    // - `GradientDimMismatch` for the first, `InvalidGradient { index: 1 }`
    //   for the second.
    fn validate_grad_reports_dimension_then_finiteness() {
        assert_eq!(
            validate_grad(&array![1.0, 2.0], 3),
            Err(OptError::GradientDimMismatch { expected: 3, found: 2 })
        );
        assert!(matches!(
            validate_grad(&array![0.0, f64::NAN, 1.0], 3),
            Err(OptError::InvalidGradient { index: 1, .. })
        ));
    }

    #[test]
    fn theta_hat_must_exist_and_be_finite() {
        assert_eq!(validate_theta_hat(None), Err(OptError::MissingThetaHat));
        assert!(matches!(
            validate_theta_hat(Some(array![0.02, f64::INFINITY, 0.5])),
            Err(OptError::InvalidThetaHat { index: 1, .. })
        ));
        assert_eq!(validate_theta_hat(Some(array![0.02, 1.5, 0.5])), Ok(array![0.02, 1.5, 0.5]));
    }

    #[test]
    fn validate_value_rejects_non_finite_log_likelihoods() {
        assert!(validate_value(-1.0e4 * 756.0).is_ok());
        assert!(matches!(
            validate_value(f64::NEG_INFINITY),
            Err(OptError::NonFiniteCost { .. })
        ));
    }
}
