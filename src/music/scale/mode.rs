// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The seven church modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::TheoryError;
use crate::music::{KeySignature, KeyType, PitchClass, Scale, SEMITONES_PER_OCTAVE};

/// Church mode types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeType {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl ModeType {
    pub const ALL: [ModeType; 7] = [
        ModeType::Ionian,
        ModeType::Dorian,
        ModeType::Phrygian,
        ModeType::Lydian,
        ModeType::Mixolydian,
        ModeType::Aeolian,
        ModeType::Locrian,
    ];

    /// Semitone steps of the mode
    pub fn steps(self) -> [i32; 7] {
        match self {
            ModeType::Ionian => [2, 2, 1, 2, 2, 2, 1],
            ModeType::Dorian => [2, 1, 2, 2, 2, 1, 2],
            ModeType::Phrygian => [1, 2, 2, 2, 1, 2, 2],
            ModeType::Lydian => [2, 2, 2, 1, 2, 2, 1],
            ModeType::Mixolydian => [2, 2, 1, 2, 2, 1, 2],
            ModeType::Aeolian => [2, 1, 2, 2, 1, 2, 2],
            ModeType::Locrian => [1, 2, 2, 1, 2, 2, 2],
        }
    }

    /// Flats this mode adds to the major key on the same root
    pub fn added_flats(self) -> i32 {
        match self {
            ModeType::Ionian => 0,
            ModeType::Dorian => 2,
            ModeType::Phrygian => 4,
            ModeType::Lydian => -1,
            ModeType::Mixolydian => 1,
            ModeType::Aeolian => 3,
            ModeType::Locrian => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ModeType::Ionian => "ionian",
            ModeType::Dorian => "dorian",
            ModeType::Phrygian => "phrygian",
            ModeType::Lydian => "lydian",
            ModeType::Mixolydian => "mixolydian",
            ModeType::Aeolian => "aeolian",
            ModeType::Locrian => "locrian",
        }
    }
}

impl FromStr for ModeType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        ModeType::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| TheoryError::UnknownScaleType(s.to_string()))
    }
}

impl fmt::Display for ModeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A church mode on a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mode {
    mode_type: ModeType,
    root: PitchClass,
}

impl Mode {
    pub fn new(mode_type: ModeType, root: PitchClass) -> Self {
        Self { mode_type, root }
    }

    pub fn mode_type(&self) -> ModeType {
        self.mode_type
    }

    /// Sharps relative to the major key on the same root, never negative
    pub fn num_sharps(&self) -> u8 {
        let parallel = KeySignature::with_root(KeyType::Major, self.root);
        let sharps = if parallel.is_sharp_key() {
            parallel.num_sharps() as i32
        } else {
            -(parallel.num_flats() as i32)
        };
        (sharps - self.mode_type.added_flats()).max(0) as u8
    }

    /// Flats relative to the major key on the same root, never negative.
    ///
    /// Can exceed seven (C# locrian has ten); [`Mode::key_signature`]
    /// respells such counts.
    pub fn num_flats(&self) -> u8 {
        let parallel = KeySignature::with_root(KeyType::Major, self.root);
        let flats = if parallel.is_flat_key() {
            parallel.num_flats() as i32
        } else {
            -(parallel.num_sharps() as i32)
        };
        (flats + self.mode_type.added_flats()).max(0) as u8
    }

    /// The key signature a piece in this mode is written in
    pub fn key_signature(&self) -> KeySignature {
        if self.mode_type == ModeType::Aeolian {
            return KeySignature::with_root(KeyType::NaturalMinor, self.root);
        }
        let flats = self.num_flats();
        let (count, sharps) = if flats > 0 {
            (flats, false)
        } else {
            (self.num_sharps(), true)
        };
        let (count, sharps) = if count > 7 {
            trace!(count, "respelling mode key signature");
            (SEMITONES_PER_OCTAVE as u8 - count, !sharps)
        } else {
            (count, sharps)
        };
        // At most seven accidentals after respelling
        KeySignature::new(KeyType::Major, count, sharps).unwrap_or_default()
    }
}

impl Scale for Mode {
    fn intervals_as_semitones(&self) -> Vec<i32> {
        self.mode_type.steps().to_vec()
    }

    fn pitch_class_of_root(&self) -> PitchClass {
        self.root
    }

    fn notes_per_octave(&self) -> usize {
        8
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode_type)
    }
}
