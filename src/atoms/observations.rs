//! Validated observation container for the spawn model.
//!
//! Purpose
//! -------
//! Turn a raw spawn sequence into the `(t, x)` pairs the likelihood and the
//! threshold regression consume. Tag entries are dropped, but every kept
//! observation remembers its position in the raw sequence, so the time index
//! counts every spawn, tags included.
//!
//! Key behaviors
//! -------------
//! - [`Observations::from_sequence`] validates the whole sequence before
//!   keeping anything.
//! - Iteration yields observations in spawn order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every kept `x` is strictly positive.
//! - `t` is strictly increasing across the container and `t < total()`.
//! - The container is non-empty.
//!
//! Downstream usage
//! ----------------
//! - Both `LogLikelihood` implementations in `model` use `Observations` as
//!   their `Data` type.
use crate::atoms::{
    errors::{AtomError, AtomResult},
    tags::AtomTag,
};

/// One element spawn: the raw index `t` and the element number `x > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub t: usize,
    pub x: i32,
}

/// Element spawns of a sequence, tags removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observations {
    items: Vec<Observation>,
    total: usize,
}

impl Observations {
    /// Keep the positive entries of `sequence` together with their indices.
    ///
    /// # Errors
    /// - [`AtomError::EmptySequence`] if `sequence` is empty.
    /// - [`AtomError::UnknownTag`] for the first value below `-3`.
    /// - [`AtomError::NoPositiveObservations`] if every entry is a tag.
    pub fn from_sequence(sequence: &[i32]) -> AtomResult<Self> {
        if sequence.is_empty() {
            return Err(AtomError::EmptySequence);
        }
        let mut items = Vec::with_capacity(sequence.len());
        for (t, &x) in sequence.iter().enumerate() {
            if AtomTag::from_value(t, x)?.is_none() {
                items.push(Observation { t, x });
            }
        }
        if items.is_empty() {
            return Err(AtomError::NoPositiveObservations { len: sequence.len() });
        }
        Ok(Self { items, total: sequence.len() })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed container.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.items
    }

    /// Length of the raw sequence the observations came from.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl<'a> IntoIterator for &'a Observations {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
