//! loglik_optimizer::builders: L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Hide Argmin's generic wiring behind two small builders, one per line
//! search, that apply the crate-level tolerances and L-BFGS memory from
//! [`MLEOptions`].
//!
//! Conventions
//! -----------
//! - Builders never set `theta0` or `max_iters`; the runner does.
//! - `opts.lbfgs_mem == None` falls back to [`DEFAULT_LBFGS_MEM`].
//! - Argmin's own tolerance checks surface as [`OptError`](crate::optimization::errors::OptError)
//!   through the `From<Error>` conversion.
//!
//! Testing notes
//! -------------
//! - Unit tests only check that construction succeeds for the option
//!   combinations the fitting code uses. Solves are tested in `api`.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Construct L-BFGS with a Hager–Zhang line search.
///
/// # Errors
/// Returns an error if Argmin rejects one of the configured tolerances.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    configure_lbfgs(LbfgsHagerZhang::new(HagerZhangLS::new(), mem), opts)
}

/// Construct L-BFGS with a More–Thuente line search.
///
/// # Errors
/// Returns an error if Argmin rejects one of the configured tolerances.
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    configure_lbfgs(LbfgsMoreThuente::new(MoreThuenteLS::new(), mem), opts)
}

/// Apply the optional gradient and cost-change tolerances to an L-BFGS
/// solver, whatever its line search. `None` keeps Argmin's default.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::loglik_optimizer::traits::{LineSearcher, Tolerances};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction with both line searches, with and without explicit memory.
    // - `configure_lbfgs` with present and absent tolerances.
    // -------------------------------------------------------------------------

    fn opts(ls: LineSearcher, tol_cost: Option<f64>, mem: Option<usize>) -> MLEOptions {
        let tols = Tolerances::new(Some(1e-6), tol_cost, Some(50)).expect("valid tolerances");
        MLEOptions::new(tols, ls, false, mem).expect("valid options")
    }

    #[test]
    // Purpose
    // -------
    // Both builders accept the default and an explicit L-BFGS memory.
    //
    // Given
    // -----
    // - Valid tolerances, `lbfgs_mem` of `None` and `Some(11)`.
    //
    // Expect
    // ------
    // - Every combination builds.
    fn builders_accept_default_and_explicit_memory() {
        for mem in [None, Some(11)] {
            assert!(build_optimizer_hager_zhang(&opts(LineSearcher::HagerZhang, Some(1e-8), mem)).is_ok());
            assert!(build_optimizer_more_thuente(&opts(LineSearcher::MoreThuente, None, mem)).is_ok());
        }
    }

    #[test]
    fn configure_lbfgs_handles_absent_tolerances() {
        let raw = LBFGS::new(MoreThuenteLS::new(), DEFAULT_LBFGS_MEM);
        let tols = Tolerances::new(None, None, Some(50)).expect("valid tolerances");
        let opts = MLEOptions::new(tols, LineSearcher::MoreThuente, false, None).expect("valid options");
        assert!(configure_lbfgs(raw, &opts).is_ok());
    }
}
