//! Spawn model: the likelihood of `model::likelihood` behind the optimizer
//! interface, plus a `fit` entry point that dispatches to any of the
//! available searches.
//!
//! The same [`SpawnModel`] serves the full five-parameter fit and the
//! reduced `(c, d, e)` fit; only its [`ParamLayout`] differs.
use ndarray::Array1;

use crate::{
    atoms::observations::Observations,
    model::{
        likelihood::spawn_log_likelihood,
        params::{ParamLayout, SpawnParams},
    },
    optimization::{
        errors::OptResult,
        local_search::{AscentOptions, SweepOptions, coordinate_sweep, finite_diff_ascent},
        loglik_optimizer::{
            Bounds, LogLikelihood, MLEOptions, OptimOutcome, Theta, maximize_bounded,
        },
    },
};

/// How [`SpawnModel::fit`] searches parameter space.
#[derive(Debug, Clone, PartialEq)]
pub enum Estimator {
    /// L-BFGS on the box reparametrization.
    Bounded { bounds: Bounds, opts: MLEOptions },
    /// Repeated three-point window scans over each coordinate.
    CoordinateWindow(SweepOptions),
    /// Forward-difference coordinate ascent.
    FiniteDiffAscent(AscentOptions),
}

impl Estimator {
    /// L-BFGS over the layout's default box with the given options.
    pub fn bounded(layout: &ParamLayout, opts: MLEOptions) -> OptResult<Self> {
        let (lower, upper) = layout.default_bounds();
        Ok(Estimator::Bounded { bounds: Bounds::new(lower, upper)?, opts })
    }

    /// Window sweep capped per coordinate by the upper edge of the layout's
    /// default box.
    ///
    /// # Errors
    /// [`OptError::InvalidCeiling`](crate::optimization::errors::OptError::InvalidCeiling)
    /// if an upper bound lies below the sweep's starting window.
    pub fn coordinate_window(layout: &ParamLayout, sweep: SweepOptions) -> OptResult<Self> {
        let (_, upper) = layout.default_bounds();
        Ok(Estimator::CoordinateWindow(sweep.with_ceilings(upper)?))
    }

    /// Finite-difference ascent capped by the upper edge of the layout's
    /// default box.
    ///
    /// # Errors
    /// [`OptError::InvalidCeiling`](crate::optimization::errors::OptError::InvalidCeiling)
    /// if an upper bound lies below the ascent floor.
    pub fn finite_diff_ascent(layout: &ParamLayout, ascent: AscentOptions) -> OptResult<Self> {
        let (_, upper) = layout.default_bounds();
        Ok(Estimator::FiniteDiffAscent(ascent.with_ceilings(upper)?))
    }

    /// Short name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Estimator::Bounded { .. } => "bounded L-BFGS",
            Estimator::CoordinateWindow(_) => "coordinate window search",
            Estimator::FiniteDiffAscent(_) => "finite-difference ascent",
        }
    }
}

/// Time-varying binomial spawn model.
///
/// After [`SpawnModel::fit`], `results` holds the optimizer outcome (free
/// parameters) and `fitted_params` the corresponding full parameter set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpawnModel {
    pub layout: ParamLayout,
    pub results: Option<OptimOutcome>,
    pub fitted_params: Option<SpawnParams>,
}

impl SpawnModel {
    pub fn new(layout: ParamLayout) -> Self {
        Self { layout, results: None, fitted_params: None }
    }

    /// Fit the free parameters starting from `theta0` and cache the results.
    ///
    /// # Errors
    /// Propagates layout errors for `theta0` and any optimizer error. On
    /// error, previous results are left untouched.
    pub fn fit(
        &mut self, theta0: Array1<f64>, data: &Observations, estimator: &Estimator,
    ) -> OptResult<()> {
        let outcome = match estimator {
            Estimator::Bounded { bounds, opts } => {
                maximize_bounded(&*self, &theta0, bounds, data, opts)?
            }
            Estimator::CoordinateWindow(opts) => coordinate_sweep(&*self, &theta0, data, opts)?,
            Estimator::FiniteDiffAscent(opts) => finite_diff_ascent(&*self, &theta0, data, opts)?,
        };
        trace_info!(
            estimator = estimator.label(),
            loglik = outcome.value,
            converged = outcome.converged,
            "spawn model fitted"
        );
        self.fitted_params = Some(self.layout.expand(&outcome.theta_hat)?);
        self.results = Some(outcome);
        Ok(())
    }
}

impl LogLikelihood for SpawnModel {
    type Data = Observations;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        let params = self.layout.expand(theta)?;
        Ok(spawn_log_likelihood(&params, data))
    }

    /// Shape and finiteness only; the box is the estimator's business.
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        self.layout.expand(theta)?;
        Ok(())
    }
}
