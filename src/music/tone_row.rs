// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Twelve-tone rows and their serial transformations.
//!
//! A row holds each of the twelve pitch classes exactly once. The four
//! classic forms are available as [`ToneRow::transposition`] (P),
//! [`ToneRow::inversion`] (I), [`ToneRow::retrograde`] (R) and
//! [`ToneRow::retrograde_inversion`] (RI).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TheoryError};
use crate::music::{Interval, PitchClass, SEMITONES_PER_OCTAVE};

/// An ordering of the twelve pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[PitchClass; 12]", into = "[PitchClass; 12]")]
pub struct ToneRow {
    pitches: [PitchClass; 12],
}

impl TryFrom<[PitchClass; 12]> for ToneRow {
    type Error = TheoryError;

    fn try_from(pitches: [PitchClass; 12]) -> Result<Self> {
        ToneRow::new(pitches)
    }
}

impl From<ToneRow> for [PitchClass; 12] {
    fn from(row: ToneRow) -> Self {
        row.pitches
    }
}

impl ToneRow {
    /// Create a row, rejecting any repeated pitch class
    pub fn new(pitches: [PitchClass; 12]) -> Result<Self> {
        for (i, pc) in pitches.iter().enumerate() {
            if pitches[i + 1..].contains(pc) {
                debug!(pitch_class = %pc, "tone row rejected");
                return Err(TheoryError::DuplicatePitchClass(*pc));
            }
        }
        Ok(Self { pitches })
    }

    pub fn pitch_at(&self, index: usize) -> Result<PitchClass> {
        self.pitches
            .get(index)
            .copied()
            .ok_or(TheoryError::IndexOutOfRange(index))
    }

    pub fn index_of(&self, pitch_class: PitchClass) -> Option<usize> {
        self.pitches.iter().position(|&pc| pc == pitch_class)
    }

    pub fn pitch_classes(&self) -> &[PitchClass; 12] {
        &self.pitches
    }

    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.pitches.iter().copied()
    }

    /// Mirror every step around the first pitch
    pub fn inversion(&self) -> ToneRow {
        let mut pitches = self.pitches;
        for i in 1..pitches.len() {
            let step = self.pitches[i].value() as i32 - self.pitches[i - 1].value() as i32;
            pitches[i] = pitches[i - 1] - step;
        }
        ToneRow { pitches }
    }

    pub fn retrograde(&self) -> ToneRow {
        let mut pitches = self.pitches;
        pitches.reverse();
        ToneRow { pitches }
    }

    pub fn retrograde_inversion(&self) -> ToneRow {
        self.inversion().retrograde()
    }

    pub fn transposition(&self, semitones: i32) -> ToneRow {
        ToneRow {
            pitches: self.pitches.map(|pc| pc + semitones),
        }
    }

    /// Transpose up or down by an interval
    pub fn transposition_by(&self, interval: Interval, up: bool) -> ToneRow {
        let semitones = interval.num_semitones();
        self.transposition(if up { semitones } else { -semitones })
    }

    /// The eleven steps of the row, each at most a perfect fifth
    pub fn intervals(&self) -> [Interval; 11] {
        let mut steps = [Interval::default(); 11];
        for (i, pair) in self.pitches.windows(2).enumerate() {
            let distance = (pair[1].value() as i32 - pair[0].value() as i32).abs();
            // Wider than a fifth reads as its complement
            let distance = if distance > 7 {
                SEMITONES_PER_OCTAVE - distance
            } else {
                distance
            };
            steps[i] = Interval::from_num_semitones(distance);
        }
        steps
    }
}

impl<'a> IntoIterator for &'a ToneRow {
    type Item = &'a PitchClass;
    type IntoIter = std::slice::Iter<'a, PitchClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.pitches.iter()
    }
}

impl fmt::Display for ToneRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|pc| pc.name(true)).collect();
        write!(f, "{}", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::interval::intervals::{augmented, major, minor, perfect};

    fn row(values: [i32; 12]) -> ToneRow {
        ToneRow::new(values.map(PitchClass::new)).unwrap()
    }

    fn values(row: &ToneRow) -> Vec<u8> {
        row.iter().map(|pc| pc.value()).collect()
    }

    fn chromatic() -> ToneRow {
        row([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])
    }

    // Berg, Violin Concerto
    fn berg() -> ToneRow {
        row([7, 10, 2, 6, 9, 0, 4, 8, 11, 1, 3, 5])
    }

    #[test]
    fn test_duplicate_rejected() {
        let pitches = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0].map(PitchClass::new);
        assert_eq!(
            ToneRow::new(pitches),
            Err(TheoryError::DuplicatePitchClass(PitchClass::C))
        );
    }

    #[test]
    fn test_pitch_at() {
        let row = berg();
        assert_eq!(row.pitch_at(0), Ok(PitchClass::G));
        assert_eq!(row.pitch_at(11), Ok(PitchClass::F));
        assert_eq!(row.pitch_at(12), Err(TheoryError::IndexOutOfRange(12)));
        assert_eq!(row.index_of(PitchClass::D), Some(2));
        assert_eq!(row.index_of(PitchClass::G), Some(0));
    }

    #[test]
    fn test_inversion() {
        assert_eq!(
            values(&chromatic().inversion()),
            vec![0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
        );
        assert_eq!(berg().inversion().pitch_at(0), Ok(PitchClass::G));
        assert_eq!(berg().inversion().inversion(), berg());
    }

    #[test]
    fn test_retrograde() {
        assert_eq!(
            values(&chromatic().retrograde()),
            vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]
        );
        assert_eq!(berg().retrograde().retrograde(), berg());
    }

    #[test]
    fn test_retrograde_inversion() {
        assert_eq!(
            values(&chromatic().retrograde_inversion()),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]
        );
        assert_eq!(berg().retrograde_inversion(), berg().inversion().retrograde());
    }

    #[test]
    fn test_transposition() {
        let up = chromatic().transposition(3);
        assert_eq!(values(&up), vec![3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 1, 2]);
        assert_eq!(chromatic().transposition(-9), up);
        assert_eq!(chromatic().transposition_by(minor::THIRD, true), up);
        assert_eq!(chromatic().transposition_by(major::SIXTH, false), up);
    }

    #[test]
    fn test_intervals() {
        assert_eq!(chromatic().intervals(), [minor::SECOND; 11]);

        let steps = berg().intervals();
        assert_eq!(steps[0], minor::THIRD);
        assert_eq!(steps[1], major::THIRD);
        assert_eq!(steps[4], minor::THIRD);
        assert_eq!(steps[8], major::SECOND);

        // 11 and 2 lie nine semitones apart, read as a minor third
        let wide = row([11, 2, 0, 1, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(wide.intervals()[0], minor::THIRD);
        let tritone = row([0, 6, 1, 2, 3, 4, 5, 7, 8, 9, 10, 11]);
        assert_eq!(tritone.intervals()[0], augmented::FOURTH);
        assert_eq!(tritone.intervals()[1], perfect::FOURTH);
    }

    #[test]
    fn test_display() {
        assert_eq!(berg().to_string(), "G A# D F# A C E G# B C# D# F");
    }
}
