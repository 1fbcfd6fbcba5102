//! End-to-end run over one spawn sequence.
use ndarray::Array1;

use crate::{
    analysis::{
        options::AnalysisOptions,
        report::{AnalysisReport, FitRecord, Threshold},
    },
    atoms::{errors::AtomResult, observations::Observations, tags::TagBreakdown},
    model::{
        params::ParamLayout,
        regression::fit_threshold,
        spawn::{Estimator, SpawnModel},
    },
    optimization::errors::{OptError, OptResult},
};

/// Decode `sequence` and run every fit on it.
///
/// Order: tag breakdown, full bounded fit, threshold regression, then the
/// reduced model with `(a, b)` fixed (bounded, coordinate window sweep and
/// finite-difference ascent). Each fit's error is kept in the report.
///
/// # Errors
/// Only decoding errors abort the run (see
/// [`Observations::from_sequence`]).
pub fn run_analysis(sequence: &[i32], opts: &AnalysisOptions) -> AtomResult<AnalysisReport> {
    let breakdown = TagBreakdown::from_sequence(sequence)?;
    let data = Observations::from_sequence(sequence)?;
    trace_info!(total = breakdown.total(), n_reg = data.len(), "atom sequence decoded");

    let full_layout = ParamLayout::Full;
    let full = fit_spawn(
        full_layout,
        opts.start(&full_layout),
        &data,
        Estimator::bounded(&full_layout, opts.mle.clone()),
    );

    let regression = fit_threshold(&data, opts.regression_start, &opts.regression);
    let threshold = Threshold::select(&regression, opts.fallback_threshold);
    trace_info!(a = threshold.a, b = threshold.b, source = ?threshold.source, "threshold fixed");

    let reduced_layout = ParamLayout::FixedThreshold { a: threshold.a, b: threshold.b };
    let theta0 = opts.start(&reduced_layout);
    let reduced = fit_spawn(
        reduced_layout,
        theta0.clone(),
        &data,
        Estimator::bounded(&reduced_layout, opts.mle.clone()),
    );
    let window = fit_spawn(
        reduced_layout,
        theta0.clone(),
        &data,
        Estimator::coordinate_window(&reduced_layout, opts.sweep.clone()),
    );
    let ascent = fit_spawn(
        reduced_layout,
        theta0,
        &data,
        Estimator::finite_diff_ascent(&reduced_layout, opts.ascent.clone()),
    );

    Ok(AnalysisReport { breakdown, full, regression, threshold, reduced, window, ascent })
}

fn fit_spawn(
    layout: ParamLayout, theta0: Array1<f64>, data: &Observations, estimator: OptResult<Estimator>,
) -> FitRecord {
    let label = estimator.as_ref().map_or("estimator setup", Estimator::label);
    let fitted = estimator.and_then(|estimator| {
        let mut model = SpawnModel::new(layout);
        model.fit(theta0, data, &estimator)?;
        let outcome = model.results.take().ok_or(OptError::MissingThetaHat)?;
        Ok((outcome, model.fitted_params))
    });
    match fitted {
        Ok((outcome, params)) => FitRecord { label, outcome: Ok(outcome), params },
        Err(e) => {
            trace_info!(estimator = label, error = %e, "fit failed");
            FitRecord { label, outcome: Err(e), params: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::errors::AtomError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Decoding errors abort the run.
    // - A short synthetic sequence produces a complete report.
    //
    // They intentionally DO NOT cover:
    // - The embedded sequence (see `tests/`).
    // -------------------------------------------------------------------------

    #[test]
    fn decoding_errors_abort_the_run() {
        let opts = AnalysisOptions::default();
        assert_eq!(
            run_analysis(&[2, -9], &opts).expect_err("unknown tag"),
            AtomError::UnknownTag { index: 1, value: -9 }
        );
        assert_eq!(
            run_analysis(&[0, 0], &opts).expect_err("no observations"),
            AtomError::NoPositiveObservations { len: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Every fit is attempted and labelled, and successful fits carry the
    // full parameter set.
    //
    // Given
    // -----
    // - A short sequence with a rising trend and a few tags.
    // - Default options with short iteration caps.
    //
    // Expect
    // ------
    // - Labels in run order.
    // - Reduced fits keep the selected threshold.
    fn short_sequence_produces_complete_report() {
        // Arrange
        let seq = [2, 2, -1, 0, 2, 3, 3, 0, 4, 3, 5, 4, -2, 5, 6, 5, 6, 7, 0, 7];
        let mut opts = AnalysisOptions::default();
        opts.mle.tols.max_iter = Some(50);
        opts.sweep.max_sweeps = 2;
        opts.ascent.max_iter = 10;

        // Act
        let report = run_analysis(&seq, &opts).expect("valid sequence");

        // Assert
        let labels: Vec<&str> = report.fits().iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "bounded L-BFGS",
                "bounded L-BFGS",
                "coordinate window search",
                "finite-difference ascent"
            ]
        );
        for record in [&report.reduced, &report.window, &report.ascent] {
            if let Some(params) = record.params {
                assert_eq!((params.a, params.b), (report.threshold.a, report.threshold.b));
            }
        }
        assert!(report.window.outcome.is_ok());
        assert!(report.ascent.outcome.is_ok());
        assert_eq!(report.breakdown.total(), seq.len());
    }
}
