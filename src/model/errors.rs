//! Errors for the spawn model (parameter layout checks and the threshold
//! regression).
//!
//! [`ModelError`] is returned by the model layer directly and converted into
//! [`OptError`](crate::optimization::errors::OptError) wherever a model is
//! evaluated through the optimizers.
//!
//! ## Conventions
//! - Indices are 0-based positions in the **free** parameter vector, not in
//!   the full `(a, b, c, d, e)` vector.
//! - Out-of-box but finite parameters are not errors; the likelihood absorbs
//!   them through its penalty.

/// Result alias for spawn-model operations that may produce [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Theta length does not match the parameter layout.
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// A parameter is NaN or ±inf.
    InvalidThetaInput { index: usize, value: f64 },

    /// The threshold regression needs two distinct time indices.
    DegenerateRegression { n: usize },
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta has {actual} entries; the parameter layout expects {expected}.")
            }
            ModelError::InvalidThetaInput { index, value } => {
                write!(f, "Parameter at index {index} is non-finite: {value}")
            }
            ModelError::DegenerateRegression { n } => {
                write!(
                    f,
                    "Threshold regression needs at least two distinct time indices; got {n} observations."
                )
            }
        }
    }
}
