//! Run configuration for [`run_analysis`](super::run_analysis).
use ndarray::{Array1, array, s};

use crate::{
    model::params::ParamLayout,
    optimization::{
        local_search::{AscentOptions, SweepOptions},
        loglik_optimizer::MLEOptions,
    },
};

/// Starting points, fallbacks and optimizer settings for a full run.
///
/// - `theta0`: full five-parameter start `(a, b, c, d, e)`; the reduced fits
///   start from `theta0[2..]`.
/// - `regression_start`: start `(a, b)` for the threshold regression.
/// - `fallback_threshold`: `(a, b)` used by the reduced fits when the
///   regression fails or does not converge.
/// - `mle`, `regression`: L-BFGS options for the spawn model and the
///   regression.
/// - `sweep`, `ascent`: options for the derivative-free fits of the reduced
///   model.
///
/// Bounded fits search the layout's default box
/// ([`ParamLayout::default_bounds`]). The window and ascent fits take the
/// box's upper edge as their per-coordinate ceilings.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub theta0: Array1<f64>,
    pub regression_start: [f64; 2],
    pub fallback_threshold: (f64, f64),
    pub mle: MLEOptions,
    pub regression: MLEOptions,
    pub sweep: SweepOptions,
    pub ascent: AscentOptions,
}

impl AnalysisOptions {
    /// Start for the free parameters of `layout`.
    pub fn start(&self, layout: &ParamLayout) -> Array1<f64> {
        match layout {
            ParamLayout::Full => self.theta0.clone(),
            ParamLayout::FixedThreshold { .. } => self.theta0.slice(s![2..]).to_owned(),
        }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            theta0: array![0.01251, 0.9945, 0.02646, 1.5091, 0.4999],
            regression_start: [0.1, 10.0],
            fallback_threshold: (0.02352571, 2.05071664),
            mle: MLEOptions::default(),
            regression: MLEOptions::default(),
            sweep: SweepOptions::default(),
            ascent: AscentOptions { global_rate: 1e-7, max_iter: 200, ..AscentOptions::default() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_layout_starts_from_trailing_parameters() {
        let opts = AnalysisOptions::default();
        let layout = ParamLayout::FixedThreshold { a: 0.0, b: 0.0 };

        assert_eq!(opts.start(&layout), array![0.02646, 1.5091, 0.4999]);
        assert_eq!(opts.start(&ParamLayout::Full), opts.theta0);
    }
}
