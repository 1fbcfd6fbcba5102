//! local_search: derivative-free searches over a `LogLikelihood`.
//!
//! Purpose
//! -------
//! Hand-rolled alternatives to the L-BFGS path in `loglik_optimizer`, for
//! objectives that are piecewise constant or noisy enough that gradient
//! methods stall. All three searches take the same
//! [`LogLikelihood`](crate::optimization::loglik_optimizer::LogLikelihood) model and return the same
//! [`OptimOutcome`](crate::optimization::loglik_optimizer::OptimOutcome), so callers can compare them
//! directly against [`maximize_bounded`](crate::optimization::loglik_optimizer::maximize_bounded).
//!
//! Key behaviors
//! -------------
//! - [`window_search`]: three-point window scan along one coordinate.
//! - [`coordinate_sweep`]: repeated window scans over every coordinate.
//! - [`finite_diff_ascent`]: simultaneous forward-difference ascent.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every search has an iteration cap; hitting it is reported as
//!   `converged == false`, never as an error.
//! - Values that would drop below `floor` are raised to it, so the searches
//!   never hand non-positive counts or probabilities to the model.
//! - Values above a coordinate's ceiling are lowered to it. Ceilings default
//!   to `+inf`; the spawn fits take them from the parameter box.
//! - Every evaluation is counted under `cost_count` and checked for
//!   finiteness.
//!
//! Testing notes
//! -------------
//! - Unit tests next to each search use synthetic quadratics and linear
//!   objectives with known optima in place of a real likelihood.

mod counter;

pub mod ascent;
pub mod options;
pub mod sweep;
pub mod window;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::ascent::finite_diff_ascent;
pub use self::options::{AscentOptions, SweepOptions, WindowOptions};
pub use self::sweep::coordinate_sweep;
pub use self::window::window_search;
