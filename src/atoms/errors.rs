//! Errors for decoding the atom sequence.
//!
//! ## Conventions
//! - Indices are 0-based positions in the raw sequence (the time index `t`).

/// Result alias for atom-data operations that may produce [`AtomError`].
pub type AtomResult<T> = Result<T, AtomError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomError {
    /// Sequence is empty.
    EmptySequence,

    /// A non-positive value that is not one of the four known tags.
    UnknownTag { index: usize, value: i32 },

    /// Every entry is a tag; there is nothing to fit.
    NoPositiveObservations { len: usize },
}

impl std::error::Error for AtomError {}

impl std::fmt::Display for AtomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomError::EmptySequence => write!(f, "Atom sequence is empty."),
            AtomError::UnknownTag { index, value } => {
                write!(f, "Value at index {index} is not a known atom tag: {value}")
            }
            AtomError::NoPositiveObservations { len } => {
                write!(f, "Atom sequence of length {len} contains no positive observation.")
            }
        }
    }
}
