//! High-level entry points for fitting a user-provided `LogLikelihood`.
//!
//! [`maximize`] selects an L-BFGS solver with either Hager–Zhang or
//! More–Thuente line search, wraps the model in an `ArgMinAdapter` and
//! delegates the run to `run_lbfgs`. [`maximize_bounded`] does the same on the
//! box reparametrization from [`bounds`](super::bounds) and maps the estimate
//! back before returning it.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        bounds::{Bounds, BoxConstrained},
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        run::run_lbfgs,
        traits::{LineSearcher, LogLikelihood, MLEOptions},
    },
};

/// Fit a log-likelihood `ℓ(θ)` using L-BFGS with the chosen line search.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` whose cost follows
///   `opts.sense` (`-ℓ` for the default `Maximize`).
/// - Builds an L-BFGS solver with either **Hager–Zhang** or **More–Thuente**
///   line search based on `opts.line_searcher`.
/// - Calls `run_lbfgs`, which configures the executor (initial params,
///   max iters, optional observers) and returns an `OptimOutcome`.
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_optimizer_*`.
/// - Propagates runtime errors from `run_lbfgs` (e.g., line search failures).
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use atomas_estimate::optimization::errors::{OptError, OptResult};
/// use atomas_estimate::optimization::loglik_optimizer::{
///     maximize, LogLikelihood, MLEOptions, Theta,
/// };
///
/// struct Concave;
/// impl LogLikelihood for Concave {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok(-theta.dot(theta))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = maximize(&Concave, array![0.1, -0.2, 0.3], &(), &MLEOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data, opts.sense);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}

/// Fit `ℓ(θ)` subject to `bounds`, starting from `theta0` in model space.
///
/// The solver runs on `u` with `θ = lo + (hi - lo)·σ(u)`; the returned
/// `theta_hat` is in model space and always inside the box. `grad_norm`
/// refers to the `u`-space gradient.
///
/// # Errors
/// - `BoundsDimMismatch` if `theta0` and `bounds` differ in length.
/// - Propagates `f.check` at `theta0` and every error of [`maximize`].
pub fn maximize_bounded<F: LogLikelihood>(
    f: &F, theta0: &Theta, bounds: &Bounds, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    bounds.check_dim(theta0)?;
    f.check(theta0, data)?;
    let u0 = bounds.to_unconstrained(theta0)?;
    let wrapped = BoxConstrained::new(f, bounds);
    let mut outcome = maximize(&wrapped, u0, data, opts)?;
    outcome.theta_hat = bounds.to_model(&outcome.theta_hat);
    Ok(outcome)
}
