//! analysis: one complete estimation run.
//!
//! Purpose
//! -------
//! Chain the tag breakdown, the spawn-model fits and the threshold
//! regression over a spawn sequence, and collect everything into a
//! printable [`AnalysisReport`].
//!
//! Key behaviors
//! -------------
//! - [`run_analysis`] fails only on undecodable input; fit errors are
//!   recorded per fit.
//! - The reduced fits hold `(a, b)` at the regression estimate, or at
//!   [`AnalysisOptions::fallback_threshold`] when the regression fails or
//!   does not converge.
//!
//! Downstream usage
//! ----------------
//! - The `atomas-estimate` binary runs this on the embedded sequence with
//!   default options and prints the report.

pub mod options;
pub mod pipeline;
pub mod report;

pub use self::options::AnalysisOptions;
pub use self::pipeline::run_analysis;
pub use self::report::{AnalysisReport, FitRecord, Threshold, ThresholdSource};
