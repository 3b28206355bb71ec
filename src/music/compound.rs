// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals wider than an octave.
//!
//! A compound interval is a whole number of octaves plus a simple interval.
//! Perfect and augmented octaves are folded into the octave count (a major
//! tenth is one octave plus a major third; two octaves are two octaves plus a
//! perfect unison). A diminished octave is eleven semitones and stays as is.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, TheoryError};
use crate::music::interval::{intervals, is_valid_quality_for_kind};
use crate::music::{Interval, Pitch, Quality, SEMITONES_PER_OCTAVE};

/// An interval of any size: octaves plus a simple interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawCompoundInterval")]
pub struct CompoundInterval {
    num_octaves: u32,
    simple: Interval,
}

#[derive(Deserialize)]
struct RawCompoundInterval {
    num_octaves: u32,
    simple: Interval,
}

impl From<RawCompoundInterval> for CompoundInterval {
    fn from(raw: RawCompoundInterval) -> Self {
        CompoundInterval::new(raw.num_octaves, raw.simple)
    }
}

impl CompoundInterval {
    /// Octaves plus a simple interval; a perfect or augmented octave adds an
    /// octave and becomes the matching unison
    pub fn new(num_octaves: u32, simple: Interval) -> Self {
        if simple.kind() == 8 && simple.quality() != Quality::Diminished {
            trace!(num_octaves, %simple, "folding octave into octave count");
            let unison = if simple.quality() == Quality::Augmented {
                intervals::augmented::UNISON
            } else {
                intervals::perfect::UNISON
            };
            return CompoundInterval {
                num_octaves: num_octaves + 1,
                simple: unison,
            };
        }
        CompoundInterval {
            num_octaves,
            simple,
        }
    }

    /// Create from a compound kind (9 = ninth, 10 = tenth, ...) and a quality
    pub fn from_kind(kind: u32, quality: Quality) -> Result<Self> {
        let invalid = TheoryError::InvalidCompoundInterval { kind, quality };
        if kind == 1 || !is_valid_quality_for_kind(quality, kind) {
            debug!(kind, %quality, "rejected compound interval");
            return Err(invalid);
        }
        if kind <= 8 {
            // Simple kinds are kept as written, octave included
            return Ok(CompoundInterval {
                num_octaves: 0,
                simple: Interval::new(kind, quality)?,
            });
        }

        let num_octaves = (kind - 1) / 7;
        let simple_kind = kind - 7 * num_octaves;
        if simple_kind == 1 {
            // Fifteenth, twenty-second, ...: whole octaves spelled as an octave
            let octave = Interval::new(8, quality).map_err(|_| invalid)?;
            return Ok(CompoundInterval::new(num_octaves - 1, octave));
        }
        let simple = Interval::new(simple_kind, quality).map_err(|_| invalid)?;
        Ok(CompoundInterval::new(num_octaves, simple))
    }

    /// Canonical compound interval for a semitone count (sign ignored)
    pub fn from_num_semitones(semitones: i32) -> Self {
        let semitones = semitones.unsigned_abs();
        let octave = SEMITONES_PER_OCTAVE as u32;
        let simple = Interval::from_num_semitones((semitones % octave) as i32);
        CompoundInterval::new(semitones / octave, simple)
    }

    /// Distance between two pitches, using their rounded MIDI values
    pub fn from_pitches(first: Pitch, second: Pitch) -> Self {
        CompoundInterval::from_num_semitones(first.rounded_midi() - second.rounded_midi())
    }

    pub fn from_midi_notes(first: i32, second: i32) -> Self {
        CompoundInterval::from_num_semitones(first - second)
    }

    pub fn num_octaves(&self) -> u32 {
        self.num_octaves
    }

    /// The interval left over after removing whole octaves
    pub fn simple_interval(&self) -> Interval {
        self.simple
    }

    pub fn quality(&self) -> Quality {
        self.simple.quality()
    }

    /// Compound ordinal: 1 (unison), 2 (second) ... 8 (octave), 9 (ninth) ...
    pub fn kind(&self) -> u32 {
        let simple_kind = self.simple.kind() as u32;
        let step = if simple_kind == 0 { 0 } else { simple_kind - 1 };
        self.num_octaves * 7 + step + 1
    }

    pub fn num_semitones(&self) -> i32 {
        self.simple.num_semitones() + SEMITONES_PER_OCTAVE * self.num_octaves as i32
    }

    /// Just-intonation sizes of the simple interval, shifted up by the octaves
    pub fn cents_just_intonation(&self) -> Vec<f64> {
        let offset = 1200.0 * self.num_octaves as f64;
        self.simple
            .cents_just_intonation()
            .iter()
            .map(|cents| cents + offset)
            .collect()
    }

    pub fn cents_equal_temperament(&self) -> f64 {
        self.num_semitones() as f64 * 100.0
    }

    /// Same simple interval, ignoring the octave count
    pub fn has_same_simple_interval(&self, other: &CompoundInterval) -> bool {
        self.simple == other.simple
    }

    /// Pitch this interval above or below another (rounded MIDI values)
    pub fn apply_to_pitch(&self, pitch: Pitch, above: bool) -> Pitch {
        let semitones = if above {
            self.num_semitones()
        } else {
            -self.num_semitones()
        };
        Pitch::from_midi_note(pitch.rounded_midi() + semitones)
    }

    /// "2 octaves + Major third", or "2va+M3" in short form
    pub fn description(&self, short: bool) -> String {
        let simple = self.simple.description(short);
        match (self.num_octaves, short) {
            (0, _) => simple,
            (n, true) => format!("{}va+{}", n, simple),
            (1, false) => format!("1 octave + {}", simple),
            (n, false) => format!("{} octaves + {}", n, simple),
        }
    }
}

impl From<Interval> for CompoundInterval {
    fn from(simple: Interval) -> Self {
        CompoundInterval::new(0, simple)
    }
}

impl fmt::Display for CompoundInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description(false))
    }
}

impl PartialEq<Interval> for CompoundInterval {
    fn eq(&self, other: &Interval) -> bool {
        if *other == intervals::perfect::OCTAVE {
            return self.num_octaves == 1 && self.simple == intervals::perfect::UNISON;
        }
        self.simple == *other && self.num_semitones() == other.num_semitones()
    }
}

impl PartialEq<CompoundInterval> for Interval {
    fn eq(&self, other: &CompoundInterval) -> bool {
        other == self
    }
}

impl PartialOrd<Interval> for CompoundInterval {
    fn partial_cmp(&self, other: &Interval) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        Some(
            self.num_semitones()
                .cmp(&other.num_semitones())
                .then(self.simple.cmp(other)),
        )
    }
}

impl PartialOrd<CompoundInterval> for Interval {
    fn partial_cmp(&self, other: &CompoundInterval) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::interval::intervals::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_octave_folding() {
        let folded = CompoundInterval::new(1, perfect::OCTAVE);
        assert_eq!(folded.num_octaves(), 2);
        assert_eq!(folded.simple_interval(), perfect::UNISON);

        let raised = CompoundInterval::new(0, augmented::OCTAVE);
        assert_eq!(raised.num_octaves(), 1);
        assert_eq!(raised.simple_interval(), augmented::UNISON);

        let lowered = CompoundInterval::new(1, diminished::OCTAVE);
        assert_eq!(lowered.num_octaves(), 1);
        assert_eq!(lowered.simple_interval(), diminished::OCTAVE);
    }

    #[test]
    fn test_from_kind_matches_octaves_plus_simple() {
        for octaves in 0..5u32 {
            for simple in Interval::all() {
                if simple.kind() == 0 || simple.kind() == 8 {
                    continue;
                }
                let kind = octaves * 7 + simple.kind() as u32;
                let compound = CompoundInterval::from_kind(kind, simple.quality()).unwrap();
                assert_eq!(compound, CompoundInterval::new(octaves, simple), "kind {}", kind);
                assert_eq!(compound.kind(), kind);
            }
        }
    }

    #[test]
    fn test_from_kind_whole_octaves() {
        let fifteenth = CompoundInterval::from_kind(15, Quality::Perfect).unwrap();
        assert_eq!(fifteenth, CompoundInterval::new(2, perfect::UNISON));
        assert_eq!(fifteenth.num_semitones(), 24);
        assert_eq!(fifteenth.kind(), 15);

        let lowered = CompoundInterval::from_kind(15, Quality::Diminished).unwrap();
        assert_eq!(lowered, CompoundInterval::new(1, diminished::OCTAVE));
        assert_eq!(lowered.kind(), 15);

        let octave = CompoundInterval::from_kind(8, Quality::Perfect).unwrap();
        assert_eq!(octave.num_octaves(), 0);
        assert_eq!(octave.simple_interval(), perfect::OCTAVE);
        assert_eq!(octave.num_semitones(), 12);
        assert_eq!(octave.kind(), 8);

        let raised = CompoundInterval::from_kind(8, Quality::Augmented).unwrap();
        assert_eq!(raised.num_octaves(), 0);
        assert_eq!(raised.simple_interval(), augmented::OCTAVE);
        assert_eq!(raised.num_semitones(), 13);

        let lowered = CompoundInterval::from_kind(8, Quality::Diminished).unwrap();
        assert_eq!(lowered.num_octaves(), 0);
        assert_eq!(lowered.simple_interval(), diminished::OCTAVE);
    }

    #[test]
    fn test_from_num_semitones_extremes() {
        // 2^31 semitones
        let widest = CompoundInterval::from_num_semitones(i32::MIN);
        assert_eq!(widest.num_octaves(), 178_956_970);
        assert_eq!(widest.simple_interval(), minor::SIXTH);

        let widest_positive = CompoundInterval::from_num_semitones(i32::MAX);
        assert_eq!(widest_positive.num_octaves(), 178_956_970);
        assert_eq!(widest_positive.simple_interval(), perfect::FIFTH);
    }

    #[test]
    fn test_from_kind_rejects_invalid() {
        assert_eq!(
            CompoundInterval::from_kind(9, Quality::Perfect),
            Err(TheoryError::InvalidCompoundInterval {
                kind: 9,
                quality: Quality::Perfect
            })
        );
        assert!(CompoundInterval::from_kind(12, Quality::Major).is_err());
        assert!(CompoundInterval::from_kind(1, Quality::Perfect).is_err());
        assert!(CompoundInterval::from_kind(10, Quality::Minor).is_ok());
    }

    #[test]
    fn test_from_num_semitones() {
        let c = CompoundInterval::from_num_semitones(19);
        assert_eq!(c.num_octaves(), 1);
        assert_eq!(c.simple_interval(), perfect::FIFTH);
        assert_eq!(c.num_semitones(), 19);
        assert_eq!(CompoundInterval::from_num_semitones(-19), c);
        assert_eq!(CompoundInterval::from_num_semitones(5).num_octaves(), 0);
    }

    #[test]
    fn test_from_pitches() {
        assert_eq!(CompoundInterval::from_midi_notes(88, 95), perfect::FIFTH);
        assert_eq!(CompoundInterval::from_midi_notes(57, 69), perfect::OCTAVE);

        let ninth = CompoundInterval::from_midi_notes(40, 54);
        assert_eq!(ninth, CompoundInterval::new(1, major::SECOND));
        assert_eq!(ninth.kind(), 9);
        assert_eq!(ninth.num_semitones(), 14);

        let fourteenth = CompoundInterval::from_midi_notes(52, 75);
        assert_eq!(fourteenth, CompoundInterval::new(1, major::SEVENTH));
        assert_eq!(fourteenth.kind(), 14);

        let two_octaves = CompoundInterval::from_pitches(
            Pitch::from_midi_note(32),
            Pitch::from_midi_note(56),
        );
        assert_eq!(two_octaves, CompoundInterval::new(2, perfect::UNISON));
        assert_eq!(two_octaves.kind(), 15);
    }

    #[test]
    fn test_compare_with_simple_interval() {
        let octave = CompoundInterval::new(1, perfect::UNISON);
        assert!(octave == perfect::OCTAVE);
        assert!(perfect::OCTAVE == octave);
        assert!(CompoundInterval::new(0, perfect::UNISON) != perfect::OCTAVE);

        let third = CompoundInterval::from(major::THIRD);
        assert!(third == major::THIRD);
        assert!(CompoundInterval::new(1, major::THIRD) != major::THIRD);

        let ninth = CompoundInterval::new(1, minor::SECOND);
        assert!(ninth > major::SEVENTH);
        assert!(ninth > perfect::OCTAVE);
        assert!(major::SEVENTH < ninth);
        assert!(CompoundInterval::from(augmented::FOURTH) < diminished::FIFTH);
        assert!(CompoundInterval::from(perfect::FOURTH) > major::THIRD);
    }

    #[test]
    fn test_compare_compound_intervals() {
        let tenth = CompoundInterval::new(1, major::THIRD);
        let seventeenth = CompoundInterval::new(2, major::THIRD);
        assert!(seventeenth > tenth);
        assert!(CompoundInterval::new(1, perfect::FIFTH) > tenth);
        assert!(tenth.has_same_simple_interval(&seventeenth));
        assert_ne!(tenth, seventeenth);
    }

    #[test]
    fn test_cents() {
        let twelfth = CompoundInterval::new(1, perfect::FIFTH);
        let cents = twelfth.cents_just_intonation();
        assert_eq!(cents.len(), 1);
        assert_approx_eq!(cents[0], 1901.955);
        assert_eq!(twelfth.cents_equal_temperament(), 1900.0);
    }

    #[test]
    fn test_description() {
        assert_eq!(CompoundInterval::new(1, major::SECOND).to_string(), "1 octave + Major second");
        assert_eq!(CompoundInterval::new(2, minor::THIRD).description(true), "2va+m3");
        assert_eq!(CompoundInterval::from(perfect::FIFTH).description(true), "P5");
    }

    #[test]
    fn test_apply_to_pitch() {
        let tenth = CompoundInterval::new(1, major::THIRD);
        assert_eq!(tenth.apply_to_pitch(Pitch::MIDDLE_C, true), Pitch::from_midi_note(76));
        assert_eq!(tenth.apply_to_pitch(Pitch::MIDDLE_C, false), Pitch::from_midi_note(44));
    }
}
