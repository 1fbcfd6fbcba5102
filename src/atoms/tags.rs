//! Special-atom tags and their frequency breakdown.
//!
//! Non-positive entries of the spawn sequence mark special atoms instead of
//! element numbers. [`TagBreakdown`] counts them and reports each as a share
//! of all spawns, the first block of the analysis output.
use std::fmt;

use crate::atoms::errors::{AtomError, AtomResult};

/// Special atom encoded by a non-positive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomTag {
    Plus,
    Minus,
    DarkPlus,
    White,
}

impl AtomTag {
    pub const ALL: [AtomTag; 4] = [AtomTag::Plus, AtomTag::Minus, AtomTag::DarkPlus, AtomTag::White];

    /// Decode a raw value.
    ///
    /// Returns `Ok(None)` for element numbers (`x > 0`).
    ///
    /// # Errors
    /// [`AtomError::UnknownTag`] for values below `-3`; `index` is only
    /// used to locate the value in the error.
    pub fn from_value(index: usize, value: i32) -> AtomResult<Option<AtomTag>> {
        match value {
            v if v > 0 => Ok(None),
            0 => Ok(Some(AtomTag::Plus)),
            -1 => Ok(Some(AtomTag::Minus)),
            -2 => Ok(Some(AtomTag::DarkPlus)),
            -3 => Ok(Some(AtomTag::White)),
            _ => Err(AtomError::UnknownTag { index, value }),
        }
    }

    pub fn value(self) -> i32 {
        match self {
            AtomTag::Plus => 0,
            AtomTag::Minus => -1,
            AtomTag::DarkPlus => -2,
            AtomTag::White => -3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AtomTag::Plus => "Plus",
            AtomTag::Minus => "Minus",
            AtomTag::DarkPlus => "Dark Plus",
            AtomTag::White => "White",
        }
    }

    /// Known spawn rule printed next to the rare tags.
    pub fn note(self) -> Option<&'static str> {
        match self {
            AtomTag::DarkPlus => Some("Known to have 1.25% chance of spawning if score > 750"),
            AtomTag::White => Some("Known to have 1.66% chance of spawning if score > 1500"),
            AtomTag::Plus | AtomTag::Minus => None,
        }
    }

    fn slot(self) -> usize {
        self.value().unsigned_abs() as usize
    }
}

/// Tag counts over a whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagBreakdown {
    counts: [usize; 4],
    total: usize,
}

impl TagBreakdown {
    /// Count tags in `sequence`.
    ///
    /// # Errors
    /// - [`AtomError::EmptySequence`] for an empty slice.
    /// - [`AtomError::UnknownTag`] for the first value below `-3`.
    pub fn from_sequence(sequence: &[i32]) -> AtomResult<Self> {
        if sequence.is_empty() {
            return Err(AtomError::EmptySequence);
        }
        let mut counts = [0; 4];
        for (index, &value) in sequence.iter().enumerate() {
            if let Some(tag) = AtomTag::from_value(index, value)? {
                counts[tag.slot()] += 1;
            }
        }
        Ok(Self { counts, total: sequence.len() })
    }

    pub fn count(&self, tag: AtomTag) -> usize {
        self.counts[tag.slot()]
    }

    /// Length of the whole sequence, tags included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn tagged(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of element entries, i.e. observations available to the fits.
    pub fn n_regression(&self) -> usize {
        self.total - self.tagged()
    }

    /// Share of `tag` among all spawns, in percent.
    pub fn percentage(&self, tag: AtomTag) -> f64 {
        100.0 * self.count(tag) as f64 / self.total as f64
    }
}

impl fmt::Display for TagBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in AtomTag::ALL {
            let pct = self.percentage(tag);
            match tag.note() {
                Some(note) => writeln!(f, "{}: {pct} %\t{note}", tag.label())?,
                None => writeln!(f, "{}: {pct} %", tag.label())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::data::ATOM_SEQUENCE;

    #[test]
    fn tags_round_trip_through_their_values() {
        for tag in AtomTag::ALL {
            assert_eq!(AtomTag::from_value(0, tag.value()), Ok(Some(tag)));
        }
        assert_eq!(AtomTag::from_value(0, 7), Ok(None));
        assert_eq!(AtomTag::from_value(4, -4), Err(AtomError::UnknownTag { index: 4, value: -4 }));
    }

    #[test]
    // Purpose
    // -------
    // Counts and shares on the embedded sequence match the recorded game.
    //
    // Given
    // -----
    // - The embedded 1090-entry sequence.
    //
    // Expect
    // ------
    // - 259 plus, 54 minus, 8 dark plus, 13 white; 756 element entries.
    // - Plus share ≈ 23.761467889908257 %.
    fn embedded_sequence_breakdown() {
        // Act
        let breakdown = TagBreakdown::from_sequence(&ATOM_SEQUENCE).expect("valid sequence");

        // Assert
        assert_eq!(breakdown.count(AtomTag::Plus), 259);
        assert_eq!(breakdown.count(AtomTag::Minus), 54);
        assert_eq!(breakdown.count(AtomTag::DarkPlus), 8);
        assert_eq!(breakdown.count(AtomTag::White), 13);
        assert_eq!(breakdown.total(), 1090);
        assert_eq!(breakdown.n_regression(), 756);
        assert!((breakdown.percentage(AtomTag::Plus) - 23.761_467_889_908_257).abs() < 1e-12);
        assert!((breakdown.percentage(AtomTag::White) - 1.192_660_550_458_715_6).abs() < 1e-12);
    }

    #[test]
    fn breakdown_rejects_empty_and_unknown_input() {
        assert_eq!(TagBreakdown::from_sequence(&[]), Err(AtomError::EmptySequence));
        assert_eq!(
            TagBreakdown::from_sequence(&[3, -7]),
            Err(AtomError::UnknownTag { index: 1, value: -7 })
        );
    }

    #[test]
    fn display_lists_every_tag_with_notes_on_rare_ones() {
        let text = TagBreakdown::from_sequence(&[0, -1, -2, -3]).expect("valid").to_string();
        assert!(text.starts_with("Plus: 25 %\n"));
        assert!(text.contains("Dark Plus: 25 %\tKnown to have 1.25% chance"));
        assert_eq!(text.lines().count(), 4);
    }
}
