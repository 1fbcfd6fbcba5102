//! loglik_optimizer::finite_diff: finite-difference gradient helpers.
//!
//! Purpose
//! -------
//! Provide finite-difference gradient approximations around a parameter
//! vector, together with error capture and validation, so that the adapter
//! can fall back to numerical derivatives without depending directly on the
//! `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - Compute central-difference gradients with error capture via
//!   [`run_central_diff`].
//! - Compute forward-difference gradients with error capture via
//!   [`run_fd_diff`]; used as the fallback when the central scheme fails.
//!
//! Invariants & assumptions
//! ------------------------
//! - The objective closure returns `f64`, so it cannot use `?`. Callers wrap
//!   their fallible objective in a closure that writes the first error into
//!   a shared `closure_err` cell and returns `NaN`.
//! - Gradients returned from this module satisfy [`validate_grad`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, error capture, and the non-finite
//!   gradient rejection for both schemes.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{Grad, Theta, validation::validate_grad},
};
use argmin::core::Error;
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// run_central_diff: central-difference gradient with error capture.
///
/// Parameters
/// ----------
/// - `theta`: point at which the gradient is approximated.
/// - `func`: objective closure; routes evaluation errors into `closure_err`
///   and returns `NaN` in that case.
/// - `closure_err`: shared error slot, cleared on entry.
///
/// Returns
/// -------
/// `OptResult<Grad>`
///   - `Ok(grad)` when no error was captured and the gradient validates.
///   - `Err(e)` with the captured error, or the validation error.
pub fn run_central_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.central_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, theta.len())?;
    Ok(fd_grad)
}

/// run_fd_diff: forward-difference gradient with error capture and validation.
///
/// Purpose
/// -------
/// Compute a forward-difference approximation to the gradient of a scalar
/// objective at `theta`, while capturing any error raised inside the
/// evaluation closure and enforcing basic shape/finiteness invariants on
/// the resulting gradient.
///
/// Errors
/// ------
/// - `OptError` (via `impl From<Error> for OptError`)
///   Returned when `closure_err` contains an error captured from inside
///   `func`.
/// - `OptError::GradientDimMismatch` / `OptError::InvalidGradient`
///   Returned by [`validate_grad`].
///
/// Examples
/// --------
/// ```rust
/// # use std::cell::RefCell;
/// # use argmin::core::Error;
/// # use ndarray::Array1;
/// # use atomas_estimate::optimization::loglik_optimizer::Theta;
/// # use atomas_estimate::optimization::loglik_optimizer::finite_diff::run_fd_diff;
/// let theta: Theta = Array1::from(vec![0.0_f64, 1.0]);
/// let closure_err: RefCell<Option<Error>> = RefCell::new(None);
///
/// let f = |x: &Theta| x.dot(x);
///
/// let grad = run_fd_diff(&theta, &f, &closure_err).unwrap();
/// assert_eq!(grad.len(), theta.len());
/// ```
pub fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptError;
    use argmin::core::ArgminError;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Central and forward gradients for a smooth objective.
    // - Propagation of errors captured inside the objective closure.
    // - Validation failures for non-finite gradients.
    //
    // They intentionally DO NOT cover:
    // - The central→forward fallback policy, which lives in the adapter.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Both schemes return a valid gradient for a simple quadratic objective.
    //
    // Given
    // -----
    // - `theta = (0, 1)` and `f(theta) = thetaᵀ theta`, gradient `(0, 2)`.
    //
    // Expect
    // ------
    // - Central differences match `(0, 2)` to 1e-6.
    // - Forward differences have the right length and are finite.
    fn quadratic_objective_yields_valid_gradients() {
        // Arrange
        let theta: Theta = Array1::from(vec![0.0_f64, 1.0]);
        let closure_err: RefCell<Option<Error>> = RefCell::new(None);
        let f = |x: &Theta| x.dot(x);

        // Act
        let central = run_central_diff(&theta, &f, &closure_err).expect("central gradient");
        let forward = run_fd_diff(&theta, &f, &closure_err).expect("forward gradient");

        // Assert
        assert!(central[0].abs() < 1e-6);
        assert!((central[1] - 2.0).abs() < 1e-6);
        assert_eq!(forward.len(), theta.len());
        assert!(forward.iter().all(|v| v.is_finite()));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `run_fd_diff` propagates an error captured in `closure_err`
    // as an `OptError` via the `From<Error>` implementation.
    //
    // Given
    // -----
    // - An objective closure that writes an `ArgminError` into `closure_err`
    //   and returns `NaN`.
    //
    // Expect
    // ------
    // - `Err(OptError::NotImplemented { .. })`.
    fn closure_error_is_propagated() {
        // Arrange
        let theta: Theta = Array1::from(vec![1.0_f64]);
        let closure_err: RefCell<Option<Error>> = RefCell::new(None);
        let f = |_: &Theta| {
            let argmin_err = ArgminError::NotImplemented { text: "fd test".to_string() };
            closure_err.replace(Some(argmin_err.into()));
            f64::NAN
        };

        // Act
        let result = run_fd_diff(&theta, &f, &closure_err);

        // Assert
        match result.expect_err("Error in closure should cause run_fd_diff to fail") {
            OptError::NotImplemented { .. } => {}
            other => panic!("Unexpected OptError variant from closure error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_gradient_yields_invalid_gradient_error() {
        let theta: Theta = Array1::from(vec![0.0_f64, 1.0]);
        let closure_err: RefCell<Option<Error>> = RefCell::new(None);
        let f = |_x: &Theta| f64::NAN;

        let err = run_central_diff(&theta, &f, &closure_err)
            .expect_err("Non-finite gradient should cause an error");
        assert!(matches!(err, OptError::InvalidGradient { .. }));
    }
}
