//! Runs an `argmin` solver on an adapted log-likelihood and converts the final
//! state into an [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        Grad, LogLikelihood, MLEOptions, OptimOutcome, Theta, adapter::ArgMinAdapter,
    },
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Run an L-BFGS solve for a log-likelihood problem.
///
/// Shared by both line-search variants. Sets `theta0` and the optional
/// iteration cap on the executor, attaches the slog observer when requested,
/// runs the solver and normalizes the final state.
///
/// The best cost is converted back through `opts.sense`, so
/// [`OptimOutcome::value`] is always `ℓ(θ̂)`. Hitting `max_iter` is reported
/// with `converged == false`.
///
/// # Feature flags
/// With `obs_slog` enabled and `opts.verbose == true`, a terminal slog
/// observer is attached with `ObserverMode::Always`, and ℓ(θ₀) plus the
/// initial gradient norm are printed once before the first iteration.
///
/// # Errors
/// - Propagates any `argmin` runtime error (solver errors, line-search
///   failures, errors raised by the model) through `From<argmin::core::Error>`.
/// - Propagates validation errors from [`OptimOutcome::new`].
pub fn run_lbfgs<'a, F, S>(
    theta0: Theta, opts: &MLEOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
    S: argmin::core::Solver<
            ArgMinAdapter<'a, F>,
            argmin::core::IterState<Theta, Grad, (), (), (), f64>,
        > + Send
        + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    trace_debug!(
        iterations = result.get_iter(),
        best_cost = result.get_best_cost(),
        "L-BFGS finished"
    );
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    OptimOutcome::new(
        result.take_best_param(),
        opts.sense.loglik(result.get_best_cost()),
        termination,
        iterations,
        function_counts,
        grad,
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: LogLikelihood,
{
    let ll0 = problem.sense.loglik(problem.cost(theta0)?);
    let g0n = problem.gradient(theta0).ok().map(|g| g.l2_norm());

    eprintln!(
        "init: ell(theta0) = {:.6} ({:?}){}",
        ll0,
        problem.sense,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    trace_info!(loglik = ll0, "starting L-BFGS");
    Ok(())
}
