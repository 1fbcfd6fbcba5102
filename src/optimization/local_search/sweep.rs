//! Cyclic coordinate search built on [`window_search`].
use argmin::core::{TerminationReason, TerminationStatus};

use crate::optimization::{
    errors::OptResult,
    local_search::{counter::CountingEval, options::SweepOptions, window::window_search},
    loglik_optimizer::{COST_COUNT, LogLikelihood, OptimOutcome, Theta},
};

/// Run [`window_search`] on every coordinate in turn, repeating full
/// passes until one changes `ℓ` by less than `opts.tol_change`.
///
/// A coordinate result is only accepted when it does not lower `ℓ`, so the
/// value is non-decreasing across passes. `iterations` counts passes and
/// `fn_evals` totals every evaluation made, including the 1-D searches.
///
/// Coordinate `i` is searched with `opts.ceilings[i]` as its ceiling when
/// per-coordinate ceilings are set.
///
/// # Errors
/// - [`OptError::CeilingDimMismatch`](crate::optimization::errors::OptError::CeilingDimMismatch)
///   if `opts.ceilings` does not match `theta0`.
/// - Propagates `f.check(theta0)`, evaluation errors and errors from the
///   individual window searches.
pub fn coordinate_sweep<F: LogLikelihood>(
    f: &F, theta0: &Theta, data: &F::Data, opts: &SweepOptions,
) -> OptResult<OptimOutcome> {
    let windows = (0..theta0.len())
        .map(|coord| opts.window_for(coord, theta0.len()))
        .collect::<OptResult<Vec<_>>>()?;
    f.check(theta0, data)?;
    let counter = CountingEval::new(f, data);
    let mut theta = theta0.clone();
    let mut value = counter.value(&theta)?;
    let mut inner_evals = 0_u64;
    let mut sweeps = 0;
    let mut converged = false;

    while sweeps < opts.max_sweeps {
        sweeps += 1;
        let start = value;
        for (coord, window) in windows.iter().enumerate() {
            let out = window_search(f, &theta, coord, data, window)?;
            inner_evals += out.fn_evals.get(COST_COUNT).copied().unwrap_or(0);
            if out.value >= value {
                theta = out.theta_hat;
                value = out.value;
            }
        }
        trace_debug!(sweeps, value, "coordinate sweep pass");
        if (value - start).abs() < opts.tol_change {
            converged = true;
            break;
        }
    }
    trace_info!(sweeps, converged, value, "coordinate sweep finished");

    let termination = if converged {
        TerminationStatus::Terminated(TerminationReason::SolverConverged)
    } else {
        TerminationStatus::Terminated(TerminationReason::MaxItersReached)
    };
    let mut fn_evals = counter.fn_evals();
    *fn_evals.entry(COST_COUNT.to_string()).or_insert(0) += inner_evals;
    OptimOutcome::new(Some(theta), value, termination, sweeps as u64, fn_evals, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::OptError,
        local_search::options::WindowOptions,
    };
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Joint convergence on a separable concave objective.
    // - Monotonicity of the value across passes.
    // - Reporting of the pass cap.
    // -------------------------------------------------------------------------

    /// ℓ(θ) = -(θ₀ - 0.3)² - (θ₁ - 0.6)².
    struct Bowl;

    impl LogLikelihood for Bowl {
        type Data = ();

        fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
            Ok(-(theta[0] - 0.3).powi(2) - (theta[1] - 0.6).powi(2))
        }

        fn check(&self, theta: &Theta, _: &()) -> OptResult<()> {
            if theta.len() != 2 {
                return Err(OptError::ThetaLengthMismatch { expected: 2, actual: theta.len() });
            }
            Ok(())
        }
    }

    fn window() -> WindowOptions {
        WindowOptions::new([1e-4, 0.8, 0.9999], 1e-8, 1e-5, 1000).expect("valid window")
    }

    #[test]
    // Purpose
    // -------
    // A separable bowl is solved in a couple of passes.
    //
    // Given
    // -----
    // - Peak (0.3, 0.6), start (0.9, 0.1).
    //
    // Expect
    // ------
    // - θ̂ within 1e-6 of the peak, converged, value not below ℓ(θ₀).
    fn sweep_solves_separable_bowl() {
        // Arrange
        let opts = SweepOptions::new(window(), 10, 1e-12).expect("valid options");
        let theta0 = array![0.9, 0.1];
        let start = Bowl.value(&theta0, &()).expect("finite");

        // Act
        let out = coordinate_sweep(&Bowl, &theta0, &(), &opts).expect("sweep runs");

        // Assert
        assert!(out.converged, "{}", out.status);
        assert!((out.theta_hat[0] - 0.3).abs() < 1e-6);
        assert!((out.theta_hat[1] - 0.6).abs() < 1e-6);
        assert!(out.value >= start);
    }

    #[test]
    fn single_pass_cap_is_reported_when_value_still_moves() {
        let opts = SweepOptions::new(window(), 1, 1e-12).expect("valid options");
        let out = coordinate_sweep(&Bowl, &array![0.9, 0.1], &(), &opts).expect("sweep runs");
        assert!(!out.converged);
        assert_eq!(out.iterations, 1);
    }

    #[test]
    // Purpose
    // -------
    // Per-coordinate ceilings apply to their own coordinate only.
    //
    // Given
    // -----
    // - Peak (0.3, 0.6), ceilings (0.2, 1.0), a starting window below both.
    //
    // Expect
    // ------
    // - θ̂₀ held at 0.2, θ̂₁ at the peak.
    fn per_coordinate_ceilings_cap_their_coordinate() {
        // Arrange
        let narrow = WindowOptions::new([1e-4, 0.1, 0.15], 1e-8, 1e-5, 1000).expect("valid window");
        let opts = SweepOptions::new(narrow, 10, 1e-12)
            .and_then(|o| o.with_ceilings(array![0.2, 1.0]))
            .expect("valid options");

        // Act
        let out = coordinate_sweep(&Bowl, &array![0.9, 0.1], &(), &opts).expect("sweep runs");

        // Assert
        assert!(out.converged, "{}", out.status);
        assert_eq!(out.theta_hat[0], 0.2);
        assert!((out.theta_hat[1] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn check_failure_stops_before_searching() {
        let err = coordinate_sweep(&Bowl, &array![0.9], &(), &SweepOptions::default())
            .expect_err("wrong dimension");
        assert_eq!(err, OptError::ThetaLengthMismatch { expected: 2, actual: 1 });
    }
}
