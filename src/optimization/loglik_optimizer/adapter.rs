//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! argmin only minimizes, so the adapter turns `ℓ(θ)` into a cost through the
//! configured [`ObjectiveSense`]: `c(θ) = -ℓ(θ)` when maximizing and
//! `c(θ) = ℓ(θ)` when minimizing. Analytic gradients are scaled by the same
//! sign. Without one, the **cost** closure is finite-differenced directly, so
//! that branch needs no sign handling.
use std::cell::RefCell;

use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        finite_diff::{run_central_diff, run_fd_diff},
        traits::{LogLikelihood, ObjectiveSense},
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `sense.cost(ℓ(θ))`.
/// - `Gradient::gradient` returns:
///   - `sense.sign() · ∇ℓ(θ)` if the model provides an analytic gradient, or
///   - a finite-difference gradient of the cost.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
    pub sense: ObjectiveSense,
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a model, its data and the objective sense.
    pub fn new(f: &'a F, data: &'a F::Data, sense: ObjectiveSense) -> Self {
        Self { f, data, sense }
    }

    /// Finite-difference gradient of the cost.
    ///
    /// Central differences first. If a cost evaluation failed or the result
    /// does not validate, retry once with forward differences and report
    /// whatever that produces.
    fn numerical_gradient(&self, theta: &Theta) -> Result<Grad, Error> {
        let closure_err: RefCell<Option<Error>> = RefCell::new(None);
        let cost_func = |theta: &Theta| -> f64 {
            match self.cost(theta) {
                Ok(val) => val,
                Err(e) => {
                    let mut slot = closure_err.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                    f64::NAN
                }
            }
        };
        match run_central_diff(theta, &cost_func, &closure_err) {
            Ok(g) => Ok(g),
            Err(_) => Ok(run_fd_diff(theta, &cost_func, &closure_err)?),
        }
    }
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the solver cost at `θ`.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the model's `value`.
    /// - `NonFiniteCost` if `ℓ(θ)` is `NaN` or infinite.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(self.sense.cost(output))
    }
}

impl<'a, F: LogLikelihood> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate the gradient of the cost at `θ`.
    ///
    /// `GradientNotImplemented` from the model selects the finite-difference
    /// path; any other model error is returned as is.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, theta.len())?;
                Ok(g * self.sense.sign())
            }
            Err(OptError::GradientNotImplemented) => self.numerical_gradient(theta),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Cost sign for both objective senses.
    // - Sign of analytic gradients and of the finite-difference fallback.
    // - Rejection of non-finite log-likelihood values.
    // -------------------------------------------------------------------------

    /// ℓ(θ) = -(θ₀ - 1)², with an analytic gradient when `analytic` is set.
    struct Parabola {
        analytic: bool,
    }

    impl LogLikelihood for Parabola {
        type Data = ();

        fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
            Ok(-(theta[0] - 1.0).powi(2))
        }

        fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _: &()) -> OptResult<Grad> {
            if self.analytic {
                Ok(array![-2.0 * (theta[0] - 1.0)])
            } else {
                Err(OptError::GradientNotImplemented)
            }
        }
    }

    struct Broken;

    impl LogLikelihood for Broken {
        type Data = ();

        fn value(&self, _: &Theta, _: &()) -> OptResult<f64> {
            Ok(f64::NAN)
        }

        fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Maximizing negates ℓ, minimizing passes it through.
    //
    // Given
    // -----
    // - ℓ(3) = -4.
    //
    // Expect
    // ------
    // - Maximize cost = 4, Minimize cost = -4.
    fn cost_follows_objective_sense() {
        // Arrange
        let model = Parabola { analytic: true };
        let theta = array![3.0];

        // Act
        let max_cost = ArgMinAdapter::new(&model, &(), ObjectiveSense::Maximize).cost(&theta);
        let min_cost = ArgMinAdapter::new(&model, &(), ObjectiveSense::Minimize).cost(&theta);

        // Assert
        assert_eq!(max_cost.expect("finite cost"), 4.0);
        assert_eq!(min_cost.expect("finite cost"), -4.0);
    }

    #[test]
    // Purpose
    // -------
    // Analytic and numerical gradients of the cost agree in sign and size.
    //
    // Given
    // -----
    // - θ = 3, ∇ℓ = -4, so the maximizing cost gradient is +4.
    //
    // Expect
    // ------
    // - Analytic branch returns exactly 4.
    // - Finite-difference branch is within 1e-5 of 4.
    fn analytic_and_numerical_gradients_agree() {
        // Arrange
        let analytic = Parabola { analytic: true };
        let numeric = Parabola { analytic: false };
        let theta = array![3.0];

        // Act
        let g_analytic = ArgMinAdapter::new(&analytic, &(), ObjectiveSense::Maximize)
            .gradient(&theta)
            .expect("analytic gradient");
        let g_numeric = ArgMinAdapter::new(&numeric, &(), ObjectiveSense::Maximize)
            .gradient(&theta)
            .expect("numerical gradient");

        // Assert
        assert_eq!(g_analytic[0], 4.0);
        assert!((g_numeric[0] - 4.0).abs() < 1e-5);
    }

    #[test]
    fn non_finite_loglik_is_rejected() {
        let adapter = ArgMinAdapter::new(&Broken, &(), ObjectiveSense::Maximize);
        let err = adapter.cost(&array![0.0]).expect_err("NaN must be rejected");
        assert!(matches!(OptError::from(err), OptError::NonFiniteCost { .. }));
    }
}
