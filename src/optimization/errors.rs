use argmin::core::{ArgminError, Error};

use crate::model::errors::ModelError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// Implies that FD should be used
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- MLEOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// Invalid objective sense name.
    InvalidObjectiveSense {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    // ---- Bounds ----
    /// Lower and upper bound vectors differ in length, or do not match theta.
    BoundsDimMismatch {
        expected: usize,
        found: usize,
    },

    /// A box constraint is non-finite or empty.
    InvalidBounds {
        index: usize,
        lower: f64,
        upper: f64,
        reason: &'static str,
    },

    // ---- Local search options ----
    /// Initial search window must be finite and strictly ordered.
    InvalidWindow {
        prev: f64,
        curr: f64,
        next: f64,
        reason: &'static str,
    },

    /// Search tolerance needs to be positive and finite.
    InvalidSearchTol {
        tol: f64,
        reason: &'static str,
    },

    /// Clamping floor needs to be positive and finite.
    InvalidFloor {
        floor: f64,
        reason: &'static str,
    },

    /// Clamping ceiling must lie above the floor and the initial window.
    InvalidCeiling {
        index: Option<usize>,
        ceiling: f64,
        reason: &'static str,
    },

    /// Per-coordinate ceilings do not match theta.
    CeilingDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Finite-difference step needs to be positive and finite.
    InvalidStep {
        step: f64,
        reason: &'static str,
    },

    /// Learning rates need to be finite and non-negative.
    InvalidLearningRate {
        index: Option<usize>,
        value: f64,
        reason: &'static str,
    },

    /// Per-coordinate learning rates do not match theta.
    LearningRateDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Coordinate index is out of range for theta.
    CoordinateOutOfRange {
        index: usize,
        dim: usize,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Model Errors ----
    /// Theta length does not match the parameter layout.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Theta entries must be finite.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    /// Threshold regression needs at least two distinct time indices.
    DegenerateRegression {
        n: usize,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientNotImplemented => {
                write!(f, "Gradient optimization not implemented")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- MLEOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost function change tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::InvalidObjectiveSense { name, reason } => {
                write!(f, "Invalid objective sense '{name}': {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }

            // ---- Bounds ----
            OptError::BoundsDimMismatch { expected, found } => {
                write!(f, "Bounds dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidBounds { index, lower, upper, reason } => {
                write!(f, "Invalid bounds at index {index}: [{lower}, {upper}]: {reason}")
            }

            // ---- Local search options ----
            OptError::InvalidWindow { prev, curr, next, reason } => {
                write!(f, "Invalid search window ({prev}, {curr}, {next}): {reason}")
            }
            OptError::InvalidSearchTol { tol, reason } => {
                write!(f, "Invalid search tolerance {tol}: {reason}")
            }
            OptError::InvalidFloor { floor, reason } => {
                write!(f, "Invalid clamping floor {floor}: {reason}")
            }
            OptError::InvalidCeiling { index, ceiling, reason } => match index {
                Some(index) => write!(f, "Invalid ceiling at index {index}: {ceiling}: {reason}"),
                None => write!(f, "Invalid clamping ceiling {ceiling}: {reason}"),
            },
            OptError::CeilingDimMismatch { expected, found } => {
                write!(f, "Ceiling dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidStep { step, reason } => {
                write!(f, "Invalid finite-difference step {step}: {reason}")
            }
            OptError::InvalidLearningRate { index, value, reason } => match index {
                Some(index) => {
                    write!(f, "Invalid learning rate at index {index}: {value}: {reason}")
                }
                None => write!(f, "Invalid global learning rate {value}: {reason}"),
            },
            OptError::LearningRateDimMismatch { expected, found } => {
                write!(f, "Learning rate dimension mismatch: expected {expected}, found {found}")
            }
            OptError::CoordinateOutOfRange { index, dim } => {
                write!(f, "Coordinate {index} out of range for a parameter vector of length {dim}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Model Errors ----
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }
            OptError::DegenerateRegression { n } => {
                write!(f, "Threshold regression is degenerate over {n} observations")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Errors raised by our own log-likelihoods travel through argmin
        // boxed as `OptError`; recover them before looking for argmin's own.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<ModelError> for OptError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::ThetaLengthMismatch { expected, actual } => {
                OptError::ThetaLengthMismatch { expected, actual }
            }
            ModelError::InvalidThetaInput { index, value } => {
                OptError::InvalidThetaInput { index, value }
            }
            ModelError::DegenerateRegression { n } => OptError::DegenerateRegression { n },
        }
    }
}
