//! atoms: the recorded spawn sequence and its decoding.
//!
//! - [`data`]: the embedded sequence.
//! - [`tags`]: special-atom tags and their frequency breakdown.
//! - [`observations`]: element spawns with their time index, the input to
//!   every fit.
//! - [`errors`]: decoding errors.

pub mod data;
pub mod errors;
pub mod observations;
pub mod tags;

pub use self::data::{ATOM_SEQUENCE, ATOM_SEQUENCE_LEN};
pub use self::errors::{AtomError, AtomResult};
pub use self::observations::{Observation, Observations};
pub use self::tags::{AtomTag, TagBreakdown};
