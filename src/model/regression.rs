//! Least-squares fit of the threshold `s(t) = a·t + b`.
//!
//! The regression is written as a log-likelihood, `ℓ(a, b) = -Σ (x - a·t - b)²`,
//! so it runs through the same L-BFGS optimizer as the spawn model. An
//! analytic gradient is provided. [`ols_threshold`] gives the closed-form
//! solution for comparison.
use crate::{
    atoms::observations::Observations,
    model::errors::{ModelError, ModelResult},
    optimization::{
        errors::OptResult,
        loglik_optimizer::{Grad, LogLikelihood, MLEOptions, OptimOutcome, Theta, maximize},
    },
};
use ndarray::{Array1, array};

/// Negative residual sum of squares of the threshold line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdRegression;

impl ThresholdRegression {
    fn residuals<'a>(
        theta: &'a Theta, data: &'a Observations,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        data.iter().map(move |obs| {
            let t = obs.t as f64;
            (t, f64::from(obs.x) - theta[0] * t - theta[1])
        })
    }
}

impl LogLikelihood for ThresholdRegression {
    type Data = Observations;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        Ok(-Self::residuals(theta, data).map(|(_, r)| r * r).sum::<f64>())
    }

    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        if theta.len() != 2 {
            return Err(ModelError::ThetaLengthMismatch { expected: 2, actual: theta.len() }.into());
        }
        if let Some((index, &value)) = theta.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ModelError::InvalidThetaInput { index, value }.into());
        }
        Ok(())
    }

    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        let (ga, gb) = Self::residuals(theta, data)
            .fold((0.0, 0.0), |(ga, gb), (t, r)| (ga + 2.0 * r * t, gb + 2.0 * r));
        Ok(array![ga, gb])
    }
}

/// Closed-form least-squares `(a, b)`.
///
/// # Errors
/// [`ModelError::DegenerateRegression`] when the observations do not span
/// at least two distinct time indices.
pub fn ols_threshold(data: &Observations) -> ModelResult<(f64, f64)> {
    let n = data.len();
    if n < 2 {
        return Err(ModelError::DegenerateRegression { n });
    }
    let nf = n as f64;
    let mean_t = data.iter().map(|o| o.t as f64).sum::<f64>() / nf;
    let mean_x = data.iter().map(|o| f64::from(o.x)).sum::<f64>() / nf;
    let (sxx, sxy) = data.iter().fold((0.0, 0.0), |(sxx, sxy), o| {
        let dt = o.t as f64 - mean_t;
        (sxx + dt * dt, sxy + dt * (f64::from(o.x) - mean_x))
    });
    if sxx == 0.0 {
        return Err(ModelError::DegenerateRegression { n });
    }
    let a = sxy / sxx;
    Ok((a, mean_x - a * mean_t))
}

/// Fit `(a, b)` by maximizing [`ThresholdRegression`] from `start`.
///
/// # Errors
/// `DegenerateRegression` when [`ols_threshold`] would fail, plus any
/// optimizer error.
pub fn fit_threshold(
    data: &Observations, start: [f64; 2], opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    ols_threshold(data)?;
    maximize(&ThresholdRegression, Array1::from(start.to_vec()), data, opts)
}
