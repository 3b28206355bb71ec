// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Simple intervals: a kind (unison through octave) and a quality.
//!
//! Kinds are numbered 0 (unison), 2 (second) ... 8 (octave); kind 1 is never
//! valid. Which qualities a kind admits is fixed:
//!
//! | kind | name    | qualities                           |
//! |------|---------|-------------------------------------|
//! | 0    | unison  | Perfect, Augmented                  |
//! | 2    | second  | Diminished, Minor, Major, Augmented |
//! | 3    | third   | Diminished, Minor, Major, Augmented |
//! | 4    | fourth  | Diminished, Perfect, Augmented      |
//! | 5    | fifth   | Diminished, Perfect, Augmented      |
//! | 6    | sixth   | Diminished, Minor, Major, Augmented |
//! | 7    | seventh | Diminished, Minor, Major, Augmented |
//! | 8    | octave  | Diminished, Perfect, Augmented      |
//!
//! Enharmonic spellings (an augmented fourth and a diminished fifth) are
//! distinct values but are totally ordered: by semitone count, then by kind.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TheoryError};
use crate::music::Pitch;

/// Interval quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Diminished,
    Minor,
    Major,
    Augmented,
    Perfect,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Diminished,
        Quality::Minor,
        Quality::Major,
        Quality::Augmented,
        Quality::Perfect,
    ];

    /// Get a human-readable name for this quality
    pub fn name(self) -> &'static str {
        match self {
            Quality::Diminished => "Diminished",
            Quality::Minor => "Minor",
            Quality::Major => "Major",
            Quality::Augmented => "Augmented",
            Quality::Perfect => "Perfect",
        }
    }

    /// One-letter code used in short interval names ("M3", "d5")
    pub fn code(self) -> char {
        match self {
            Quality::Diminished => 'd',
            Quality::Minor => 'm',
            Quality::Major => 'M',
            Quality::Augmented => 'A',
            Quality::Perfect => 'P',
        }
    }
}

impl FromStr for Quality {
    type Err = TheoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Single-letter codes are case sensitive (m vs M)
        match s.trim() {
            "d" => return Ok(Quality::Diminished),
            "m" => return Ok(Quality::Minor),
            "M" => return Ok(Quality::Major),
            "A" => return Ok(Quality::Augmented),
            "P" => return Ok(Quality::Perfect),
            _ => {}
        }
        match s.trim().to_lowercase().as_str() {
            "diminished" | "dim" => Ok(Quality::Diminished),
            "minor" | "min" => Ok(Quality::Minor),
            "major" | "maj" => Ok(Quality::Major),
            "augmented" | "aug" => Ok(Quality::Augmented),
            "perfect" | "perf" => Ok(Quality::Perfect),
            _ => Err(TheoryError::UnknownIntervalName(s.to_string())),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Qualities a simple kind (0, 2-8) admits
fn valid_qualities(kind: u32) -> &'static [Quality] {
    use Quality::*;
    match kind {
        0 => &[Perfect, Augmented],
        2 | 3 | 6 | 7 => &[Diminished, Minor, Major, Augmented],
        4 | 5 | 8 => &[Diminished, Perfect, Augmented],
        _ => &[],
    }
}

/// Whether a quality is valid for an interval kind.
///
/// Kinds above 8 are compound (9 = ninth, 10 = tenth, ...) and are reduced
/// to their simple kind first: `kind % 8 + kind / 8`, repeated while the
/// result is still compound. A fifteenth reduces to an octave.
pub fn is_valid_quality_for_kind(quality: Quality, kind: u32) -> bool {
    let mut base = kind;
    while base > 8 {
        base = base % 8 + base / 8;
    }
    valid_qualities(base).contains(&quality)
}

/// A simple interval, at most an augmented octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    kind: u8,
    quality: Quality,
}

/// Unvalidated serde form of [`Interval`]
#[derive(Deserialize)]
struct RawInterval {
    kind: u32,
    quality: Quality,
}

impl TryFrom<RawInterval> for Interval {
    type Error = TheoryError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Interval::new(raw.kind, raw.quality)
    }
}

impl Interval {
    /// Unchecked constructor for the tables below
    const fn of(kind: u8, quality: Quality) -> Self {
        Interval { kind, quality }
    }

    /// Create an interval from a kind (taken modulo 9) and a quality
    pub fn new(kind: u32, quality: Quality) -> Result<Self> {
        let reduced = kind % 9;
        if reduced == 1 || !is_valid_quality_for_kind(quality, reduced) {
            debug!(kind, %quality, "rejected interval");
            return Err(TheoryError::InvalidInterval { kind, quality });
        }
        Ok(Interval::of(reduced as u8, quality))
    }

    /// Canonical interval for a semitone count.
    ///
    /// Major, minor and perfect spellings are preferred, with the tritone
    /// spelled as an augmented fourth. The sign is ignored; counts wrap
    /// modulo 13, except that 13 itself is an augmented octave.
    pub fn from_num_semitones(semitones: i32) -> Self {
        use intervals::*;
        let n = semitones.unsigned_abs();
        if n == 13 {
            return augmented::OCTAVE;
        }
        match n % 13 {
            0 => perfect::UNISON,
            1 => minor::SECOND,
            2 => major::SECOND,
            3 => minor::THIRD,
            4 => major::THIRD,
            5 => perfect::FOURTH,
            6 => augmented::FOURTH,
            7 => perfect::FIFTH,
            8 => minor::SIXTH,
            9 => major::SIXTH,
            10 => minor::SEVENTH,
            11 => major::SEVENTH,
            _ => perfect::OCTAVE,
        }
    }

    /// Interval between two pitches, using their rounded MIDI values
    pub fn from_pitches(first: Pitch, second: Pitch) -> Self {
        Interval::from_num_semitones(first.rounded_midi() - second.rounded_midi())
    }

    pub fn from_midi_notes(first: i32, second: i32) -> Self {
        Interval::from_num_semitones(first - second)
    }

    /// Every valid interval, smallest first
    pub fn all() -> Vec<Interval> {
        let mut all: Vec<Interval> = [0u8, 2, 3, 4, 5, 6, 7, 8]
            .iter()
            .flat_map(|&kind| {
                valid_qualities(kind as u32)
                    .iter()
                    .map(move |&quality| Interval::of(kind, quality))
            })
            .collect();
        all.sort();
        all
    }

    /// Kind: 0 (unison), 2 (second) ... 8 (octave)
    pub fn kind(&self) -> u8 {
        self.kind
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Name of the kind ("unison", "second", ..., "octave")
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            0 => "unison",
            2 => "second",
            3 => "third",
            4 => "fourth",
            5 => "fifth",
            6 => "sixth",
            7 => "seventh",
            _ => "octave",
        }
    }

    /// Number of semitones spanned
    pub fn num_semitones(&self) -> i32 {
        let base = match self.kind {
            0 => 0,
            2 => 2,
            3 => 4,
            4 => 5,
            5 => 7,
            6 => 9,
            7 => 11,
            _ => 12,
        };
        let offset = match (self.kind, self.quality) {
            (0 | 4 | 5 | 8, Quality::Diminished) => -1,
            (_, Quality::Diminished) => -2,
            (_, Quality::Minor) => -1,
            (_, Quality::Augmented) => 1,
            (_, Quality::Major | Quality::Perfect) => 0,
        };
        base + offset
    }

    /// Same number of semitones, regardless of spelling
    pub fn is_enharmonic_to(&self, other: &Interval) -> bool {
        self.num_semitones() == other.num_semitones()
    }

    /// Move to the next interval up.
    ///
    /// Quality rises within a kind before the kind advances. The augmented
    /// octave is the ceiling.
    pub fn increment(&mut self) {
        use Quality::*;
        let (kind, quality) = match (self.kind, self.quality) {
            (0, Perfect) => (0, Augmented),
            (0, Augmented) => (2, Major),
            (2, Diminished) => (2, Minor),
            (2, Minor) => (2, Major),
            (2, Major) => (2, Augmented),
            (2, Augmented) => (3, Major),
            (3, Diminished) => (3, Minor),
            (3, Minor) => (3, Major),
            (3, Major) => (3, Augmented),
            (3, Augmented) => (4, Augmented),
            (4, Diminished) => (4, Perfect),
            (4, Perfect) => (4, Augmented),
            (4, Augmented) => (5, Perfect),
            (5, Diminished) => (5, Perfect),
            (5, Perfect) => (5, Augmented),
            (5, Augmented) => (6, Major),
            (6, Diminished) => (6, Minor),
            (6, Minor) => (6, Major),
            (6, Major) => (6, Augmented),
            (6, Augmented) => (7, Major),
            (7, Diminished) => (7, Minor),
            (7, Minor) => (7, Major),
            (7, Major) => (7, Augmented),
            (7, Augmented) => (8, Augmented),
            (8, Diminished) => (8, Perfect),
            (8, Perfect) => (8, Augmented),
            other => other,
        };
        *self = Interval::of(kind, quality);
    }

    /// Move to the next interval down.
    ///
    /// Quality falls within a kind before the kind retreats. The perfect
    /// unison is the floor, and a diminished second steps to it directly.
    pub fn decrement(&mut self) {
        use Quality::*;
        let (kind, quality) = match (self.kind, self.quality) {
            (0, Augmented) => (0, Perfect),
            (2, Diminished) => (0, Perfect),
            (2, Minor) => (2, Diminished),
            (2, Major) => (2, Minor),
            (2, Augmented) => (2, Major),
            (3, Diminished) => (2, Minor),
            (3, Minor) => (3, Diminished),
            (3, Major) => (3, Minor),
            (3, Augmented) => (3, Major),
            (4, Diminished) => (3, Minor),
            (4, Perfect) => (4, Diminished),
            (4, Augmented) => (4, Perfect),
            (5, Diminished) => (4, Perfect),
            (5, Perfect) => (5, Diminished),
            (5, Augmented) => (5, Perfect),
            (6, Diminished) => (5, Diminished),
            (6, Minor) => (6, Diminished),
            (6, Major) => (6, Minor),
            (6, Augmented) => (6, Major),
            (7, Diminished) => (6, Minor),
            (7, Minor) => (7, Diminished),
            (7, Major) => (7, Minor),
            (7, Augmented) => (7, Major),
            (8, Diminished) => (7, Minor),
            (8, Perfect) => (8, Diminished),
            (8, Augmented) => (8, Perfect),
            other => other,
        };
        *self = Interval::of(kind, quality);
    }

    /// The interval that completes this one to an octave
    pub fn inverse(&self) -> Interval {
        use intervals::*;
        match (self.num_semitones(), self.kind) {
            (0, 0) => perfect::OCTAVE,
            (0, _) => augmented::SEVENTH,
            (1, 0) => diminished::OCTAVE,
            (1, _) => major::SEVENTH,
            (2, 2) => minor::SEVENTH,
            (2, _) => augmented::SIXTH,
            (3, 2) => diminished::SEVENTH,
            (3, _) => major::SIXTH,
            (4, 3) => minor::SIXTH,
            (4, _) => augmented::FIFTH,
            (5, 3) => diminished::SIXTH,
            (5, _) => perfect::FIFTH,
            (6, 4) => diminished::FIFTH,
            (6, _) => augmented::FOURTH,
            (7, 5) => perfect::FOURTH,
            (7, _) => augmented::THIRD,
            (8, 5) => diminished::FOURTH,
            (8, _) => major::THIRD,
            (9, 6) => minor::THIRD,
            (9, _) => augmented::SECOND,
            (10, 6) => diminished::THIRD,
            (10, _) => major::SECOND,
            (11, 7) => minor::SECOND,
            (11, _) => augmented::UNISON,
            (12, 7) => diminished::SECOND,
            (12, _) => perfect::UNISON,
            _ => augmented::UNISON,
        }
    }

    /// Just-intonation sizes in cents; several ratios share some spellings
    pub fn cents_just_intonation(&self) -> &'static [f64] {
        match (self.num_semitones(), self.kind) {
            (0, 0) => &[0.0],
            (0, _) => &[41.1],
            (1, 0) => &[71.0, 114.0],
            (1, _) => &[100.0],
            (2, 2) => &[182.0, 204.0],
            (2, _) => &[180.0, 223.0, 245.0],
            (3, 2) => &[253.0, 275.0, 298.0, 318.0],
            (3, _) => &[294.0, 298.0, 316.0],
            (4, 3) => &[386.0, 408.0, 435.0],
            (4, _) => &[427.0, 384.0],
            (5, 3) => &[457.0],
            (5, _) => &[498.0],
            (6, _) => &[
                563.0, 569.0, 583.0, 588.0, 590.0, 610.0, 612.0, 617.0, 631.0, 637.0,
            ],
            (7, 5) => &[701.955],
            (7, _) => &[743.0],
            (8, 5) => &[773.0, 816.0],
            (8, _) => &[782.0, 792.0, 814.0],
            (9, 6) => &[884.0, 906.0, 933.0],
            (9, _) => &[882.0, 925.0, 947.0],
            (10, 6) => &[955.0, 969.0, 977.0, 1020.0],
            (10, _) => &[996.0, 1018.0],
            (11, 7) => &[1067.0, 1088.0],
            (11, _) => &[1086.0, 1108.0, 1129.0],
            (12, 7) => &[1159.0, 1180.0],
            (12, _) => &[1200.0],
            _ => &[1271.0],
        }
    }

    pub fn cents_equal_temperament(&self) -> f64 {
        self.num_semitones() as f64 * 100.0
    }

    /// Pitch this interval above or below another.
    ///
    /// Works from the rounded MIDI value, so microtonal offsets are dropped.
    pub fn apply_to_pitch(&self, pitch: Pitch, above: bool) -> Pitch {
        let semitones = if above {
            self.num_semitones()
        } else {
            -self.num_semitones()
        };
        Pitch::from_midi_note(pitch.rounded_midi() + semitones)
    }

    /// "Major second" or, in short form, "M2" (the unison is "P1")
    pub fn description(&self, short: bool) -> String {
        if short {
            let number = if self.kind == 0 { 1 } else { self.kind };
            format!("{}{}", self.quality.code(), number)
        } else {
            format!("{} {}", self.quality.name(), self.kind_name())
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        intervals::perfect::UNISON
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description(false))
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    /// Parse a short name such as "M3", "P5" or "d7"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let quality = chars
            .next()
            .ok_or_else(|| TheoryError::UnknownIntervalName(s.to_string()))?
            .to_string()
            .parse::<Quality>()?;
        let kind: u32 = chars
            .as_str()
            .parse()
            .map_err(|_| TheoryError::UnknownIntervalName(s.to_string()))?;
        // "P1" names the unison
        let kind = if kind == 1 { 0 } else { kind };
        Interval::new(kind, quality)
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.num_semitones()
            .cmp(&other.num_semitones())
            .then(self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, other: Interval) -> Interval {
        Interval::from_num_semitones(self.num_semitones() + other.num_semitones())
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, other: Interval) -> Interval {
        Interval::from_num_semitones(self.num_semitones() - other.num_semitones())
    }
}

impl Add<i32> for Interval {
    type Output = Interval;

    fn add(self, semitones: i32) -> Interval {
        Interval::from_num_semitones(self.num_semitones() + semitones)
    }
}

impl Sub<i32> for Interval {
    type Output = Interval;

    fn sub(self, semitones: i32) -> Interval {
        Interval::from_num_semitones(self.num_semitones() - semitones)
    }
}

impl AddAssign for Interval {
    fn add_assign(&mut self, other: Interval) {
        *self = *self + other;
    }
}

impl SubAssign for Interval {
    fn sub_assign(&mut self, other: Interval) {
        *self = *self - other;
    }
}

impl AddAssign<i32> for Interval {
    fn add_assign(&mut self, semitones: i32) {
        *self = *self + semitones;
    }
}

impl SubAssign<i32> for Interval {
    fn sub_assign(&mut self, semitones: i32) {
        *self = *self - semitones;
    }
}

/// Named intervals
pub mod intervals {
    pub mod perfect {
        use crate::music::interval::{Interval, Quality};

        pub const UNISON: Interval = Interval::of(0, Quality::Perfect);
        pub const FOURTH: Interval = Interval::of(4, Quality::Perfect);
        pub const FIFTH: Interval = Interval::of(5, Quality::Perfect);
        pub const OCTAVE: Interval = Interval::of(8, Quality::Perfect);
    }

    pub mod major {
        use crate::music::interval::{Interval, Quality};

        pub const SECOND: Interval = Interval::of(2, Quality::Major);
        pub const THIRD: Interval = Interval::of(3, Quality::Major);
        pub const SIXTH: Interval = Interval::of(6, Quality::Major);
        pub const SEVENTH: Interval = Interval::of(7, Quality::Major);
    }

    pub mod minor {
        use crate::music::interval::{Interval, Quality};

        pub const SECOND: Interval = Interval::of(2, Quality::Minor);
        pub const THIRD: Interval = Interval::of(3, Quality::Minor);
        pub const SIXTH: Interval = Interval::of(6, Quality::Minor);
        pub const SEVENTH: Interval = Interval::of(7, Quality::Minor);
    }

    pub mod augmented {
        use crate::music::interval::{Interval, Quality};

        pub const UNISON: Interval = Interval::of(0, Quality::Augmented);
        pub const SECOND: Interval = Interval::of(2, Quality::Augmented);
        pub const THIRD: Interval = Interval::of(3, Quality::Augmented);
        pub const FOURTH: Interval = Interval::of(4, Quality::Augmented);
        pub const FIFTH: Interval = Interval::of(5, Quality::Augmented);
        pub const SIXTH: Interval = Interval::of(6, Quality::Augmented);
        pub const SEVENTH: Interval = Interval::of(7, Quality::Augmented);
        pub const OCTAVE: Interval = Interval::of(8, Quality::Augmented);
    }

    pub mod diminished {
        use crate::music::interval::{Interval, Quality};

        pub const SECOND: Interval = Interval::of(2, Quality::Diminished);
        pub const THIRD: Interval = Interval::of(3, Quality::Diminished);
        pub const FOURTH: Interval = Interval::of(4, Quality::Diminished);
        pub const FIFTH: Interval = Interval::of(5, Quality::Diminished);
        pub const SIXTH: Interval = Interval::of(6, Quality::Diminished);
        pub const SEVENTH: Interval = Interval::of(7, Quality::Diminished);
        pub const OCTAVE: Interval = Interval::of(8, Quality::Diminished);
    }
}

#[cfg(test)]
mod tests {
    use super::intervals::*;
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn iv(s: &str) -> Interval {
        s.parse().unwrap()
    }

    #[test]
    fn test_valid_quality_table() {
        use Quality::*;
        let table: [(u32, &[Quality]); 8] = [
            (0, &[Perfect, Augmented]),
            (2, &[Diminished, Minor, Major, Augmented]),
            (3, &[Diminished, Minor, Major, Augmented]),
            (4, &[Diminished, Perfect, Augmented]),
            (5, &[Diminished, Perfect, Augmented]),
            (6, &[Diminished, Minor, Major, Augmented]),
            (7, &[Diminished, Minor, Major, Augmented]),
            (8, &[Diminished, Perfect, Augmented]),
        ];
        for (kind, valid) in table {
            for quality in Quality::ALL {
                assert_eq!(
                    is_valid_quality_for_kind(quality, kind),
                    valid.contains(&quality),
                    "{} {}",
                    quality,
                    kind
                );
            }
        }
        for quality in Quality::ALL {
            assert!(!is_valid_quality_for_kind(quality, 1));
        }
    }

    #[test]
    fn test_valid_quality_compound_kinds() {
        // ninth, tenth, eleventh, fifteenth, sixteenth, twenty-second, twenty-third
        assert!(is_valid_quality_for_kind(Quality::Major, 9));
        assert!(!is_valid_quality_for_kind(Quality::Perfect, 9));
        assert!(is_valid_quality_for_kind(Quality::Minor, 10));
        assert!(is_valid_quality_for_kind(Quality::Perfect, 11));
        assert!(is_valid_quality_for_kind(Quality::Diminished, 15));
        assert!(is_valid_quality_for_kind(Quality::Major, 16));
        assert!(is_valid_quality_for_kind(Quality::Perfect, 22));
        assert!(is_valid_quality_for_kind(Quality::Minor, 23));
        assert!(!is_valid_quality_for_kind(Quality::Perfect, 23));
    }

    #[test]
    fn test_construct_rejects_invalid_pairs() {
        assert!(Interval::new(3, Quality::Perfect).is_err());
        assert!(Interval::new(1, Quality::Perfect).is_err());
        assert!(Interval::new(0, Quality::Minor).is_err());
        assert!(Interval::new(5, Quality::Major).is_err());
        assert_eq!(
            Interval::new(4, Quality::Minor),
            Err(TheoryError::InvalidInterval {
                kind: 4,
                quality: Quality::Minor
            })
        );
        assert_eq!(Interval::new(3, Quality::Major), Ok(major::THIRD));
        // kind is taken modulo 9
        assert_eq!(Interval::new(11, Quality::Minor), Ok(minor::SECOND));
    }

    #[test]
    fn test_from_num_semitones() {
        let expected = [
            "P1", "m2", "M2", "m3", "M3", "P4", "A4", "P5", "m6", "M6", "m7", "M7", "P8", "A8",
        ];
        for (n, name) in expected.iter().enumerate() {
            let interval = Interval::from_num_semitones(n as i32);
            assert_eq!(interval, iv(name));
            assert_eq!(interval.num_semitones(), n as i32);
        }
        assert_eq!(Interval::from_num_semitones(6), Interval::new(4, Quality::Augmented).unwrap());
        assert_eq!(Interval::from_num_semitones(-13), augmented::OCTAVE);
        assert_eq!(Interval::from_num_semitones(-7), perfect::FIFTH);
        assert_eq!(Interval::from_num_semitones(14), minor::SECOND);
    }

    #[test]
    fn test_from_pitches() {
        let a = Pitch::from_midi(64.2);
        let b = Pitch::from_midi(59.9);
        assert_eq!(Interval::from_pitches(a, b), major::THIRD);
        assert_eq!(Interval::from_pitches(b, a), major::THIRD);
        assert_eq!(Interval::from_midi_notes(60, 72), perfect::OCTAVE);
    }

    #[test]
    fn test_num_semitones() {
        assert_eq!(diminished::SECOND.num_semitones(), 0);
        assert_eq!(augmented::UNISON.num_semitones(), 1);
        assert_eq!(diminished::THIRD.num_semitones(), 2);
        assert_eq!(augmented::SECOND.num_semitones(), 3);
        assert_eq!(diminished::FOURTH.num_semitones(), 4);
        assert_eq!(augmented::THIRD.num_semitones(), 5);
        assert_eq!(diminished::FIFTH.num_semitones(), 6);
        assert_eq!(augmented::FIFTH.num_semitones(), 8);
        assert_eq!(diminished::SEVENTH.num_semitones(), 9);
        assert_eq!(augmented::SIXTH.num_semitones(), 10);
        assert_eq!(diminished::OCTAVE.num_semitones(), 11);
        assert_eq!(augmented::SEVENTH.num_semitones(), 12);
        assert_eq!(augmented::OCTAVE.num_semitones(), 13);
    }

    #[test]
    fn test_increment_sequence() {
        let steps = [
            ("P1", "A1"),
            ("A1", "M2"),
            ("d2", "m2"),
            ("m2", "M2"),
            ("M2", "A2"),
            ("A2", "M3"),
            ("d3", "m3"),
            ("m3", "M3"),
            ("M3", "A3"),
            ("A3", "A4"),
            ("d4", "P4"),
            ("P4", "A4"),
            ("A4", "P5"),
            ("d5", "P5"),
            ("P5", "A5"),
            ("A5", "M6"),
            ("d6", "m6"),
            ("m6", "M6"),
            ("M6", "A6"),
            ("A6", "M7"),
            ("d7", "m7"),
            ("m7", "M7"),
            ("M7", "A7"),
            ("A7", "A8"),
            ("d8", "P8"),
            ("P8", "A8"),
            ("A8", "A8"),
        ];
        for (from, to) in steps {
            let mut interval = iv(from);
            interval.increment();
            assert_eq!(interval, iv(to), "{} + 1", from);
        }
    }

    #[test]
    fn test_decrement_sequence() {
        let steps = [
            ("P1", "P1"),
            ("A1", "P1"),
            ("d2", "P1"),
            ("m2", "d2"),
            ("M2", "m2"),
            ("A2", "M2"),
            ("d3", "m2"),
            ("m3", "d3"),
            ("M3", "m3"),
            ("A3", "M3"),
            ("d4", "m3"),
            ("P4", "d4"),
            ("A4", "P4"),
            ("d5", "P4"),
            ("P5", "d5"),
            ("A5", "P5"),
            ("d6", "d5"),
            ("m6", "d6"),
            ("M6", "m6"),
            ("A6", "M6"),
            ("d7", "m6"),
            ("m7", "d7"),
            ("M7", "m7"),
            ("A7", "M7"),
            ("d8", "m7"),
            ("P8", "d8"),
            ("A8", "P8"),
        ];
        for (from, to) in steps {
            let mut interval = iv(from);
            interval.decrement();
            assert_eq!(interval, iv(to), "{} - 1", from);
        }
    }

    #[test]
    fn test_increment_undoes_decrement() {
        for n in 1..=12 {
            let original = Interval::from_num_semitones(n);
            let mut interval = original;
            interval.decrement();
            interval.increment();
            assert_eq!(interval, original);
        }
    }

    #[test]
    fn test_decrement_undoes_increment() {
        for n in 0..=12 {
            let original = Interval::from_num_semitones(n);
            let mut interval = original;
            interval.increment();
            interval.decrement();
            if original == augmented::FOURTH {
                // A4 rises to P5, which falls to d5
                assert_eq!(interval, diminished::FIFTH);
            } else {
                assert_eq!(interval, original, "{} + 1 - 1", original);
            }
        }
    }

    #[test]
    fn test_from_num_semitones_extremes() {
        // Counts wrap modulo 13: 2^31 leaves 11, 2^31 - 1 leaves 10
        assert_eq!(Interval::from_num_semitones(i32::MIN), major::SEVENTH);
        assert_eq!(Interval::from_num_semitones(i32::MAX), minor::SEVENTH);
        assert_eq!(Interval::from_num_semitones(-13), augmented::OCTAVE);
    }

    #[test]
    fn test_every_state_covered() {
        let all = Interval::all();
        assert_eq!(all.len(), 27);
        assert_eq!(all[0], perfect::UNISON);
        assert_eq!(all[1], diminished::SECOND);
        assert_eq!(all[26], augmented::OCTAVE);
        for interval in all {
            let mut up = interval;
            up.increment();
            assert!(up >= interval);
            let mut down = interval;
            down.decrement();
            assert!(down <= interval);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(iv("d2") > iv("P1"));
        assert!(iv("A1") > iv("d2"));
        assert!(iv("A3") < iv("A4"));
        assert!(iv("d5") > iv("A4"));
        assert!(iv("A4") < iv("d5"));
        assert!(iv("m3") > iv("A2"));
        assert_ne!(iv("A4"), iv("d5"));
        assert!(iv("A4").is_enharmonic_to(&iv("d5")));
        assert!(!iv("M3").is_enharmonic_to(&iv("P4")));
    }

    #[test]
    fn test_inverse() {
        let pairs = [
            ("P1", "P8"),
            ("d2", "A7"),
            ("A1", "d8"),
            ("m2", "M7"),
            ("M2", "m7"),
            ("d3", "A6"),
            ("A2", "d7"),
            ("m3", "M6"),
            ("M3", "m6"),
            ("d4", "A5"),
            ("A3", "d6"),
            ("P4", "P5"),
            ("A4", "d5"),
        ];
        for (a, b) in pairs {
            assert_eq!(iv(a).inverse(), iv(b), "inverse of {}", a);
            assert_eq!(iv(b).inverse(), iv(a), "inverse of {}", b);
        }
        assert_eq!(augmented::OCTAVE.inverse(), augmented::UNISON);
    }

    #[test]
    fn test_inverse_completes_octave() {
        for interval in Interval::all() {
            if interval == augmented::OCTAVE {
                continue;
            }
            let inverse = interval.inverse();
            assert_eq!(inverse.inverse(), interval);
            assert_eq!(interval.num_semitones() + inverse.num_semitones(), 12);
            assert!((interval + inverse).is_enharmonic_to(&perfect::OCTAVE));
        }
    }

    #[test]
    fn test_arithmetic_by_semitone() {
        assert_eq!(major::THIRD + minor::THIRD, perfect::FIFTH);
        assert_eq!(major::THIRD + major::THIRD, minor::SIXTH);
        assert_eq!(perfect::FIFTH - major::THIRD, minor::THIRD);
        assert_eq!(major::THIRD - perfect::FIFTH, minor::THIRD);
        assert_eq!(perfect::FOURTH + 2, perfect::FIFTH);
        assert_eq!(perfect::FOURTH - 5, perfect::UNISON);

        let mut interval = major::SECOND;
        interval += major::SECOND;
        assert_eq!(interval, major::THIRD);
        interval -= 1;
        assert_eq!(interval, minor::THIRD);
    }

    #[test]
    fn test_cents() {
        assert_eq!(perfect::UNISON.cents_just_intonation(), &[0.0]);
        assert_eq!(perfect::FIFTH.cents_just_intonation(), &[701.955]);
        assert_eq!(major::THIRD.cents_just_intonation(), &[386.0, 408.0, 435.0]);
        assert_eq!(augmented::FOURTH.cents_just_intonation().len(), 10);
        assert_eq!(
            augmented::FOURTH.cents_just_intonation(),
            diminished::FIFTH.cents_just_intonation()
        );
        assert_eq!(augmented::OCTAVE.cents_just_intonation(), &[1271.0]);
        assert_approx_eq!(minor::SEVENTH.cents_equal_temperament(), 1000.0);
        assert_approx_eq!(augmented::OCTAVE.cents_equal_temperament(), 1300.0);
    }

    #[test]
    fn test_apply_to_pitch() {
        let pitch = Pitch::from_midi(60.4);
        assert_eq!(perfect::FIFTH.apply_to_pitch(pitch, true), Pitch::from_midi_note(67));
        assert_eq!(perfect::FIFTH.apply_to_pitch(pitch, false), Pitch::from_midi_note(53));
    }

    #[test]
    fn test_description() {
        assert_eq!(major::SECOND.description(false), "Major second");
        assert_eq!(perfect::UNISON.to_string(), "Perfect unison");
        assert_eq!(major::SECOND.description(true), "M2");
        assert_eq!(minor::SECOND.description(true), "m2");
        assert_eq!(perfect::UNISON.description(true), "P1");
        assert_eq!(augmented::FOURTH.description(true), "A4");
        assert_eq!(diminished::FIFTH.description(true), "d5");
    }

    #[test]
    fn test_serde() {
        let yaml = serde_yaml::to_string(&major::SIXTH).unwrap();
        let parsed: Interval = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, major::SIXTH);

        let invalid: std::result::Result<Interval, _> =
            serde_yaml::from_str("kind: 5\nquality: minor\n");
        assert!(invalid.is_err());
    }
}
