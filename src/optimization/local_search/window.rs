//! Three-point window search along one coordinate.
//!
//! The window `(prev, curr, next)` moves forward while `ℓ` increases across
//! it, backward while it decreases, and otherwise contracts halfway towards
//! `curr` from both sides. A forward shift extrapolates
//! `next' = 3·next - 2·curr`, lowered to the ceiling if it exceeds it; a
//! backward shift extrapolates `prev' = 3·prev - 2·curr`, raised to the
//! floor if it falls below it. The search stops once both gaps are below
//! `tol`.
//!
//! An objective that keeps increasing settles on the ceiling. Without a
//! finite ceiling the window runs until `max_iter` and reports
//! non-convergence.
use argmin::core::{TerminationReason, TerminationStatus};

use crate::optimization::{
    errors::{OptError, OptResult},
    local_search::{
        counter::{CountingEval, clamp_to_range},
        options::WindowOptions,
    },
    loglik_optimizer::{LogLikelihood, OptimOutcome, Theta},
};

/// What one iteration did to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
    Shrink,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Window {
    prev: f64,
    curr: f64,
    next: f64,
}

impl Window {
    fn from_points([prev, curr, next]: [f64; 3]) -> Self {
        Self { prev, curr, next }
    }

    fn is_closed(&self, tol: f64) -> bool {
        (self.prev - self.curr).abs() < tol && (self.curr - self.next).abs() < tol
    }

    fn classify(l_prev: f64, l_curr: f64, l_next: f64) -> Step {
        if l_prev < l_curr && l_curr < l_next {
            Step::Forward
        } else if l_prev > l_curr && l_curr > l_next {
            Step::Backward
        } else {
            Step::Shrink
        }
    }

    fn advance(self, step: Step, floor: f64, ceiling: f64) -> Self {
        let Window { prev, curr, next } = self;
        match step {
            Step::Forward => Window {
                prev: curr,
                curr: next,
                next: clamp_to_range(3.0 * next - 2.0 * curr, floor, ceiling),
            },
            Step::Backward => Window {
                prev: clamp_to_range(3.0 * prev - 2.0 * curr, floor, ceiling),
                curr: prev,
                next: curr,
            },
            Step::Shrink => Window { prev: 0.5 * (prev + curr), curr, next: 0.5 * (curr + next) },
        }
    }
}

/// Maximize `ℓ` along coordinate `coord`, holding the others at `theta0`.
///
/// The starting value of `theta0[coord]` is ignored; the search starts from
/// `opts.initial`. The returned `theta_hat` equals `theta0` except at
/// `coord`, which holds the final window centre, and `value` is `ℓ` there.
/// Hitting `opts.max_iter` returns `converged == false` with the last
/// centre.
///
/// # Errors
/// - [`OptError::CoordinateOutOfRange`] if `coord >= theta0.len()`.
/// - Propagates `f.check(theta0)` and any evaluation error, including
///   [`OptError::NonFiniteCost`].
pub fn window_search<F: LogLikelihood>(
    f: &F, theta0: &Theta, coord: usize, data: &F::Data, opts: &WindowOptions,
) -> OptResult<OptimOutcome> {
    if coord >= theta0.len() {
        return Err(OptError::CoordinateOutOfRange { index: coord, dim: theta0.len() });
    }
    f.check(theta0, data)?;
    let counter = CountingEval::new(f, data);
    let mut theta = theta0.clone();
    let mut eval_at = |x: f64| -> OptResult<f64> {
        theta[coord] = x;
        counter.value(&theta)
    };

    let mut window = Window::from_points(opts.initial);
    let mut iterations = 0;
    while iterations < opts.max_iter && !window.is_closed(opts.tol) {
        iterations += 1;
        let step = Window::classify(
            eval_at(window.prev)?,
            eval_at(window.curr)?,
            eval_at(window.next)?,
        );
        window = window.advance(step, opts.floor, opts.ceiling);
        trace_debug!(coord, iterations, ?step, curr = window.curr, "window step");
    }

    let converged = window.is_closed(opts.tol);
    let value = eval_at(window.curr)?;
    let mut theta_hat = theta0.clone();
    theta_hat[coord] = window.curr;
    trace_info!(coord, iterations, converged, value, "window search finished");

    let termination = if converged {
        TerminationStatus::Terminated(TerminationReason::SolverConverged)
    } else {
        TerminationStatus::Terminated(TerminationReason::MaxItersReached)
    };
    OptimOutcome::new(
        Some(theta_hat),
        value,
        termination,
        iterations as u64,
        counter.fn_evals(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::loglik_optimizer::COST_COUNT;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Convergence on concave quadratics with interior maxima, both inside
    //   and beyond the starting window.
    // - Flooring when ℓ keeps increasing towards zero.
    // - Non-convergence reporting at the iteration cap.
    // - Argument validation.
    // -------------------------------------------------------------------------

    /// ℓ(θ) = -(θ_k - peak)² - Σ_{j≠k} θ_j², or `slope · θ_k` when `peak`
    /// is `None`.
    struct Axis {
        coord: usize,
        peak: Option<f64>,
        slope: f64,
    }

    impl LogLikelihood for Axis {
        type Data = ();

        fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
            let x = theta[self.coord];
            Ok(match self.peak {
                Some(p) => -(x - p).powi(2),
                None => self.slope * x,
            })
        }

        fn check(&self, theta: &Theta, _: &()) -> OptResult<()> {
            if theta.iter().any(|v| !v.is_finite()) {
                return Err(OptError::InvalidThetaInput { index: 0, value: f64::NAN });
            }
            Ok(())
        }
    }

    fn opts(tol: f64, max_iter: usize) -> WindowOptions {
        WindowOptions::new([1e-4, 0.8, 0.9999], tol, 1e-5, max_iter).expect("valid options")
    }

    #[test]
    // Purpose
    // -------
    // An interior maximum inside the starting window is found to within the
    // tolerance, and the other coordinates are left alone.
    //
    // Given
    // -----
    // - ℓ = -(θ₁ - 0.3)², θ₀ = (7, 0.5, -2), tol 1e-8.
    //
    // Expect
    // ------
    // - θ̂₁ within 1e-7 of 0.3, θ̂₀ and θ̂₂ unchanged, converged.
    // - Three evaluations per iteration plus the final one.
    fn converges_on_interior_quadratic_maximum() {
        // Arrange
        let model = Axis { coord: 1, peak: Some(0.3), slope: 0.0 };
        let theta0 = array![7.0, 0.5, -2.0];

        // Act
        let out = window_search(&model, &theta0, 1, &(), &opts(1e-8, 1000)).expect("search runs");

        // Assert
        assert!(out.converged, "{}", out.status);
        assert!((out.theta_hat[1] - 0.3).abs() < 1e-7);
        assert_eq!(out.theta_hat[0], 7.0);
        assert_eq!(out.theta_hat[2], -2.0);
        assert_eq!(out.fn_evals[COST_COUNT], 3 * out.iterations as u64 + 1);
    }

    #[test]
    fn forward_shifts_reach_maximum_beyond_initial_window() {
        let model = Axis { coord: 0, peak: Some(4.0), slope: 0.0 };
        let out = window_search(&model, &array![0.0], 0, &(), &opts(1e-8, 1000)).expect("search runs");
        assert!(out.converged);
        assert!((out.theta_hat[0] - 4.0).abs() < 1e-6);
    }

    #[test]
    fn maximum_near_upper_edge_is_found() {
        let model = Axis { coord: 0, peak: Some(0.9), slope: 0.0 };
        let out = window_search(&model, &array![0.0], 0, &(), &opts(1e-6, 1000)).expect("search runs");
        assert!(out.converged);
        assert!((out.theta_hat[0] - 0.9).abs() < 1e-5);
    }

    #[test]
    // Purpose
    // -------
    // When ℓ increases towards zero, backward extrapolation is floored and
    // the search settles on the floor instead of crossing it.
    //
    // Given
    // -----
    // - ℓ = -θ₀, floor 1e-5.
    //
    // Expect
    // ------
    // - θ̂₀ == 1e-5 exactly, converged.
    fn decreasing_objective_is_floored() {
        // Arrange
        let model = Axis { coord: 0, peak: None, slope: -1.0 };

        // Act
        let out = window_search(&model, &array![0.5], 0, &(), &opts(1e-6, 1000)).expect("search runs");

        // Assert
        assert!(out.converged);
        assert_eq!(out.theta_hat[0], 1e-5);
        assert_eq!(out.value, -1e-5);
    }

    #[test]
    // Purpose
    // -------
    // An unbounded objective must stop at the cap and say so.
    //
    // Given
    // -----
    // - ℓ = θ₀, max_iter 100.
    //
    // Expect
    // ------
    // - `converged == false`, 100 iterations, status mentions non-convergence.
    fn unbounded_objective_hits_iteration_cap() {
        let model = Axis { coord: 0, peak: None, slope: 1.0 };
        let out = window_search(&model, &array![0.0], 0, &(), &opts(1e-6, 100)).expect("search runs");
        assert!(!out.converged);
        assert_eq!(out.iterations, 100);
        assert!(out.status.starts_with("Did not converge"));
    }

    #[test]
    // Purpose
    // -------
    // An objective that keeps increasing settles on the ceiling and the
    // search reports convergence there.
    //
    // Given
    // -----
    // - ℓ = θ₀, ceiling 1.0.
    //
    // Expect
    // ------
    // - θ̂₀ == 1.0 exactly, converged well before the cap.
    fn increasing_objective_is_capped_at_ceiling() {
        // Arrange
        let model = Axis { coord: 0, peak: None, slope: 1.0 };
        let opts = opts(1e-6, 1000).with_ceiling(1.0).expect("valid ceiling");

        // Act
        let out = window_search(&model, &array![0.0], 0, &(), &opts).expect("search runs");

        // Assert
        assert!(out.converged, "{}", out.status);
        assert_eq!(out.theta_hat[0], 1.0);
        assert!(out.iterations < 100);
    }

    #[test]
    fn coordinate_out_of_range_is_rejected() {
        let model = Axis { coord: 0, peak: Some(0.3), slope: 0.0 };
        let err = window_search(&model, &array![0.0, 0.0], 2, &(), &opts(1e-6, 10))
            .expect_err("coordinate 2 does not exist");
        assert_eq!(err, OptError::CoordinateOutOfRange { index: 2, dim: 2 });
    }

    #[test]
    fn window_steps_follow_extrapolation_rules() {
        let w = Window { prev: 0.2, curr: 0.5, next: 0.9 };
        let fwd = w.advance(Step::Forward, 1e-5, f64::INFINITY);
        assert_eq!((fwd.prev, fwd.curr), (0.5, 0.9));
        assert!((fwd.next - 1.7).abs() < 1e-12);
        let capped = w.advance(Step::Forward, 1e-5, 1.0);
        assert_eq!((capped.prev, capped.curr, capped.next), (0.5, 0.9, 1.0));
        let back = w.advance(Step::Backward, 1e-5, 1.0);
        assert_eq!((back.prev, back.curr, back.next), (1e-5, 0.2, 0.5));
        let shrink = w.advance(Step::Shrink, 1e-5, 1.0);
        assert!((shrink.prev - 0.35).abs() < 1e-12 && (shrink.next - 0.7).abs() < 1e-12);
    }
}
