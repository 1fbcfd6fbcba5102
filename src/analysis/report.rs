//! Collected results of one analysis run and their text rendering.
//!
//! Purpose
//! -------
//! Hold every fit of a run side by side, successful or not, and print them
//! in the order they were computed.
//!
//! Conventions
//! -----------
//! - Spawn-model fits print as `->[θ̂]` followed by the estimator, `ℓ(θ̂)` and
//!   the termination status.
//! - The regression prints as `lin regr: [a, b]`.
//! - A failed fit prints as an error line; it never hides the others.
use std::fmt;

use crate::{
    atoms::tags::TagBreakdown,
    model::params::SpawnParams,
    optimization::{errors::OptResult, loglik_optimizer::OptimOutcome},
};

/// Where the reduced fits took their fixed `(a, b)` from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdSource {
    Regression,
    Fallback,
}

/// The `(a, b)` held fixed by the reduced fits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub a: f64,
    pub b: f64,
    pub source: ThresholdSource,
}

impl Threshold {
    /// Take `(a, b)` from a converged regression, else use `fallback`.
    pub fn select(regression: &OptResult<OptimOutcome>, fallback: (f64, f64)) -> Self {
        match regression {
            Ok(out) if out.converged && out.theta_hat.len() == 2 => Threshold {
                a: out.theta_hat[0],
                b: out.theta_hat[1],
                source: ThresholdSource::Regression,
            },
            _ => Threshold { a: fallback.0, b: fallback.1, source: ThresholdSource::Fallback },
        }
    }
}

/// One spawn-model fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitRecord {
    pub label: &'static str,
    pub outcome: OptResult<OptimOutcome>,
    /// Full parameter set behind `outcome.theta_hat`, when the fit succeeded.
    pub params: Option<SpawnParams>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub breakdown: TagBreakdown,
    pub full: FitRecord,
    pub regression: OptResult<OptimOutcome>,
    pub threshold: Threshold,
    pub reduced: FitRecord,
    pub window: FitRecord,
    pub ascent: FitRecord,
}

impl AnalysisReport {
    /// Spawn-model fits in run order.
    pub fn fits(&self) -> [&FitRecord; 4] {
        [&self.full, &self.reduced, &self.window, &self.ascent]
    }
}

impl fmt::Display for FitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(out) => write!(
                f,
                "->{}\t({}: loglik = {}, {})",
                out.theta_hat, self.label, out.value, out.status
            ),
            Err(e) => write!(f, "->error ({}): {e}", self.label),
        }
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.breakdown)?;
        writeln!(f, "{}", self.full)?;
        match &self.regression {
            Ok(out) => writeln!(f, "lin regr: {}", out.theta_hat)?,
            Err(e) => writeln!(f, "lin regr: error: {e}")?,
        }
        if self.threshold.source == ThresholdSource::Fallback {
            writeln!(
                f,
                "using fallback threshold a = {}, b = {}",
                self.threshold.a, self.threshold.b
            )?;
        }
        writeln!(f, "{}", self.reduced)?;
        writeln!(f, "{}", self.window)?;
        writeln!(f, "{}", self.ascent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{errors::OptError, loglik_optimizer::FnEvalMap};
    use argmin::core::{TerminationReason, TerminationStatus};
    use ndarray::array;

    fn outcome(theta: ndarray::Array1<f64>, reason: TerminationReason) -> OptimOutcome {
        OptimOutcome::new(
            Some(theta),
            -1.0,
            TerminationStatus::Terminated(reason),
            3,
            FnEvalMap::new(),
            None,
        )
        .expect("valid outcome")
    }

    #[test]
    fn threshold_prefers_converged_regression() {
        let ok = Ok(outcome(array![0.5, 2.0], TerminationReason::SolverConverged));
        let t = Threshold::select(&ok, (0.1, 0.2));
        assert_eq!((t.a, t.b, t.source), (0.5, 2.0, ThresholdSource::Regression));
    }

    #[test]
    fn threshold_falls_back_on_failure_or_non_convergence() {
        let stalled = Ok(outcome(array![0.5, 2.0], TerminationReason::MaxItersReached));
        let line_search = Ok(outcome(
            array![0.5, 2.0],
            TerminationReason::SolverExit("Line search terminated".to_string()),
        ));
        let failed = Err(OptError::DegenerateRegression { n: 1 });

        for regression in [stalled, line_search, failed] {
            let t = Threshold::select(&regression, (0.1, 0.2));
            assert_eq!((t.a, t.b, t.source), (0.1, 0.2, ThresholdSource::Fallback));
        }
    }

    #[test]
    fn failed_fit_renders_as_error_line() {
        let record = FitRecord {
            label: "bounded L-BFGS",
            outcome: Err(OptError::DegenerateRegression { n: 0 }),
            params: None,
        };
        assert!(record.to_string().starts_with("->error (bounded L-BFGS): "));
    }
}
