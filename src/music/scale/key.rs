// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key signatures and the relationships between keys.
//!
//! A key signature is stored the way it is written: a number of sharps or
//! flats and a tonality. The root is looked up from those, so the same
//! pitch class can be reached through two spellings (C# major and Db major).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TheoryError};
use crate::music::{PitchClass, Scale};

/// Most accidentals a key signature can carry
pub const MAX_ACCIDENTALS: u8 = 7;

/// Tonality of a key signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    Major,
    NaturalMinor,
    HarmonicMinor,
}

impl KeyType {
    pub const ALL: [KeyType; 3] = [KeyType::Major, KeyType::NaturalMinor, KeyType::HarmonicMinor];

    pub fn is_minor(self) -> bool {
        self != KeyType::Major
    }

    /// Semitone steps of the scale
    pub fn steps(self) -> [i32; 7] {
        match self {
            KeyType::Major => [2, 2, 1, 2, 2, 2, 1],
            KeyType::NaturalMinor => [2, 1, 2, 2, 1, 2, 2],
            KeyType::HarmonicMinor => [2, 1, 2, 2, 1, 3, 1],
        }
    }

    /// Get a human-readable name for this key type
    pub fn name(self) -> &'static str {
        match self {
            KeyType::Major => "major",
            KeyType::NaturalMinor => "natural minor",
            KeyType::HarmonicMinor => "harmonic minor",
        }
    }
}

impl FromStr for KeyType {
    type Err = TheoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match name.as_str() {
            "major" | "maj" | "ionian" => Ok(KeyType::Major),
            "minor" | "min" | "naturalminor" | "aeolian" => Ok(KeyType::NaturalMinor),
            "harmonicminor" => Ok(KeyType::HarmonicMinor),
            _ => Err(TheoryError::UnknownScaleType(s.to_string())),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Root pitch class by number of accidentals
const MAJOR_ROOTS_FLATS: [u8; 8] = [0, 5, 10, 3, 8, 1, 6, 11];
const MAJOR_ROOTS_SHARPS: [u8; 8] = [0, 7, 2, 9, 4, 11, 6, 1];
const MINOR_ROOTS_FLATS: [u8; 8] = [9, 2, 7, 0, 5, 10, 3, 8];
const MINOR_ROOTS_SHARPS: [u8; 8] = [9, 4, 11, 6, 1, 8, 3, 10];

// Number of accidentals by root pitch class; None where no key of seven or
// fewer accidentals of that kind exists
const MAJOR_FLATS_BY_ROOT: [Option<u8>; 12] = [
    Some(0), Some(5), None, Some(3), None, Some(1),
    Some(6), None, Some(4), None, Some(2), Some(7),
];
const MAJOR_SHARPS_BY_ROOT: [Option<u8>; 12] = [
    Some(0), Some(7), Some(2), None, Some(4), None,
    Some(6), Some(1), None, Some(3), None, Some(5),
];
const MINOR_FLATS_BY_ROOT: [Option<u8>; 12] = [
    Some(3), None, Some(1), Some(6), None, Some(4),
    None, Some(2), Some(7), Some(0), Some(5), None,
];
const MINOR_SHARPS_BY_ROOT: [Option<u8>; 12] = [
    None, Some(4), None, Some(6), Some(1), None,
    Some(3), None, Some(5), Some(0), Some(7), Some(2),
];

fn accidentals_for_root(key_type: KeyType, sharps: bool, root: PitchClass) -> Option<u8> {
    let table = match (key_type.is_minor(), sharps) {
        (false, false) => &MAJOR_FLATS_BY_ROOT,
        (false, true) => &MAJOR_SHARPS_BY_ROOT,
        (true, false) => &MINOR_FLATS_BY_ROOT,
        (true, true) => &MINOR_SHARPS_BY_ROOT,
    };
    table[root.value() as usize]
}

/// A key signature: up to seven sharps or flats and a tonality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawKeySignature")]
pub struct KeySignature {
    num_accidentals: u8,
    is_flat: bool,
    key_type: KeyType,
}

#[derive(Deserialize)]
struct RawKeySignature {
    num_accidentals: u8,
    is_flat: bool,
    key_type: KeyType,
}

impl TryFrom<RawKeySignature> for KeySignature {
    type Error = TheoryError;

    fn try_from(raw: RawKeySignature) -> Result<Self> {
        KeySignature::new(raw.key_type, raw.num_accidentals, !raw.is_flat)
    }
}

impl Default for KeySignature {
    /// C major
    fn default() -> Self {
        KeySignature::of(KeyType::Major, 0, true)
    }
}

impl KeySignature {
    /// Keys without accidentals are stored as flat keys so that every
    /// spelling of C major (or A minor) compares equal
    const fn of(key_type: KeyType, num_accidentals: u8, is_flat: bool) -> Self {
        KeySignature {
            num_accidentals,
            is_flat: is_flat || num_accidentals == 0,
            key_type,
        }
    }

    /// Create a key signature from its number of sharps or flats
    pub fn new(key_type: KeyType, num_accidentals: u8, sharps: bool) -> Result<Self> {
        if num_accidentals > MAX_ACCIDENTALS {
            debug!(num_accidentals, "rejected key signature");
            return Err(TheoryError::TooManyAccidentals(num_accidentals));
        }
        Ok(KeySignature::of(key_type, num_accidentals, !sharps))
    }

    /// The key on a root, spelled with sharps or flats as is conventional
    pub fn with_root(key_type: KeyType, root: PitchClass) -> Self {
        let sharps = KeySignature::uses_sharps_by_default(root, key_type);
        // Every root has a conventional spelling
        let num_accidentals = accidentals_for_root(key_type, sharps, root).unwrap_or(0);
        KeySignature::of(key_type, num_accidentals, !sharps)
    }

    /// The key on a root, spelled with the requested accidental
    pub fn with_root_spelled(key_type: KeyType, sharps: bool, root: PitchClass) -> Result<Self> {
        match accidentals_for_root(key_type, sharps, root) {
            Some(num_accidentals) => Ok(KeySignature::of(key_type, num_accidentals, !sharps)),
            None => {
                debug!(%root, %key_type, sharps, "no key spelling");
                Err(TheoryError::NoKeySpelling {
                    root,
                    key_type,
                    sharps,
                })
            }
        }
    }

    /// Parse a key from strings (e.g., "Eb", "minor").
    ///
    /// A sharp or flat in the root name selects the spelling; natural roots
    /// use the conventional one.
    pub fn parse(root_str: &str, key_type_str: &str) -> Result<Self> {
        let root: PitchClass = root_str.parse()?;
        let key_type: KeyType = key_type_str.parse()?;
        let name = root_str.trim();
        if name.len() < 2 {
            return Ok(KeySignature::with_root(key_type, root));
        }
        let sharps = name.ends_with('#') || name.to_lowercase().ends_with('s');
        KeySignature::with_root_spelled(key_type, sharps, root)
    }

    /// Whether a root is conventionally written with sharps in this tonality
    pub fn uses_sharps_by_default(root: PitchClass, key_type: KeyType) -> bool {
        if key_type.is_minor() {
            matches!(root.value(), 1 | 4 | 6 | 8 | 11)
        } else {
            matches!(root.value(), 2 | 4 | 7 | 9 | 11)
        }
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn num_accidentals(&self) -> u8 {
        self.num_accidentals
    }

    pub fn num_sharps(&self) -> u8 {
        if self.is_sharp_key() {
            self.num_accidentals
        } else {
            0
        }
    }

    pub fn num_flats(&self) -> u8 {
        if self.is_flat_key() {
            self.num_accidentals
        } else {
            0
        }
    }

    /// Has at least one flat
    pub fn is_flat_key(&self) -> bool {
        self.num_accidentals > 0 && self.is_flat
    }

    /// Has at least one sharp
    pub fn is_sharp_key(&self) -> bool {
        self.num_accidentals > 0 && !self.is_flat
    }

    pub fn is_major_key(&self) -> bool {
        !self.key_type.is_minor()
    }

    pub fn is_minor_key(&self) -> bool {
        self.key_type.is_minor()
    }

    /// Same accidentals, opposite tonality (D minor -> F major)
    pub fn relative_key(&self) -> KeySignature {
        let key_type = if self.is_major_key() {
            KeyType::NaturalMinor
        } else {
            KeyType::Major
        };
        KeySignature { key_type, ..*self }
    }

    pub fn is_relative_key_of(&self, other: &KeySignature) -> bool {
        self.is_major_key() != other.is_major_key()
            && self.num_accidentals == other.num_accidentals
            && self.is_flat == other.is_flat
    }

    /// Same root, opposite tonality (D minor -> D major).
    ///
    /// The new key takes its conventional spelling unless it has an
    /// enharmonic twin spelled like this key.
    pub fn parallel_key(&self) -> KeySignature {
        let key_type = if self.is_major_key() {
            KeyType::NaturalMinor
        } else {
            KeyType::Major
        };
        let root = self.pitch_class_of_root();
        let parallel = KeySignature::with_root(key_type, root);
        if parallel.has_enharmonic_key() && parallel.is_flat != self.is_flat {
            return KeySignature::with_root_spelled(key_type, !self.is_flat, root)
                .unwrap_or(parallel);
        }
        parallel
    }

    pub fn is_parallel_key_of(&self, other: &KeySignature) -> bool {
        self.is_major_key() != other.is_major_key()
            && self.pitch_class_of_root() == other.pitch_class_of_root()
    }

    /// Whether this key's root is one that is commonly respelled
    pub fn has_enharmonic_key(&self) -> bool {
        let root = self.pitch_class_of_root().value();
        if self.is_minor_key() {
            matches!(root, 3 | 8 | 10)
        } else {
            matches!(root, 1 | 3 | 6 | 8 | 11)
        }
    }

    /// The same scale spelled with the other accidental (C# major -> Db
    /// major), or this key if it has no such spelling
    pub fn enharmonic_key(&self) -> KeySignature {
        if !self.has_enharmonic_key() {
            return *self;
        }
        KeySignature::with_root_spelled(self.key_type, self.is_flat, self.pitch_class_of_root())
            .unwrap_or(*self)
    }

    pub fn is_enharmonic_key_of(&self, other: &KeySignature) -> bool {
        self.key_type == other.key_type
            && self.is_flat != other.is_flat
            && self.pitch_class_of_root() == other.pitch_class_of_root()
    }

    /// The major key a perfect fifth above this key's root
    pub fn dominant_key(&self) -> KeySignature {
        KeySignature::with_root(KeyType::Major, self.pitch_class_of_root() + 7)
    }

    pub fn is_dominant_key_of(&self, other: &KeySignature) -> bool {
        self.is_major_key() && self.pitch_class_of_root() == other.pitch_class_of_root() + 7
    }

    /// This key's root in another tonality.
    ///
    /// Switching between the two minors keeps the signature as written.
    pub fn with_type(&self, key_type: KeyType) -> KeySignature {
        if key_type == self.key_type {
            return *self;
        }
        if key_type.is_minor() && self.is_minor_key() {
            return KeySignature { key_type, ..*self };
        }
        KeySignature::with_root(key_type, self.pitch_class_of_root())
    }

    /// Root name as written in this key ("Cb" rather than "B" in Cb major)
    pub fn root_name(&self) -> &'static str {
        let root = self.pitch_class_of_root();
        if self.is_flat_key() && root.value() == 11 {
            return "Cb";
        }
        root.name(self.is_sharp_key())
    }
}

impl Scale for KeySignature {
    fn intervals_as_semitones(&self) -> Vec<i32> {
        self.key_type.steps().to_vec()
    }

    fn pitch_class_of_root(&self) -> PitchClass {
        let table = match (self.key_type.is_minor(), self.is_flat) {
            (false, true) => &MAJOR_ROOTS_FLATS,
            (false, false) => &MAJOR_ROOTS_SHARPS,
            (true, true) => &MINOR_ROOTS_FLATS,
            (true, false) => &MINOR_ROOTS_SHARPS,
        };
        PitchClass::new(table[self.num_accidentals as usize] as i32)
    }

    fn notes_per_octave(&self) -> usize {
        8
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root_name(), self.key_type)
    }
}

/// Named key signatures
pub mod keys {
    pub mod major {
        use crate::music::scale::key::{KeySignature, KeyType::Major};

        pub const C: KeySignature = KeySignature::of(Major, 0, true);
        pub const C_SHARP: KeySignature = KeySignature::of(Major, 7, false);
        pub const C_FLAT: KeySignature = KeySignature::of(Major, 7, true);
        pub const D: KeySignature = KeySignature::of(Major, 2, false);
        pub const D_FLAT: KeySignature = KeySignature::of(Major, 5, true);
        pub const E: KeySignature = KeySignature::of(Major, 4, false);
        pub const E_FLAT: KeySignature = KeySignature::of(Major, 3, true);
        pub const F: KeySignature = KeySignature::of(Major, 1, true);
        pub const F_SHARP: KeySignature = KeySignature::of(Major, 6, false);
        pub const G: KeySignature = KeySignature::of(Major, 1, false);
        pub const G_FLAT: KeySignature = KeySignature::of(Major, 6, true);
        pub const A: KeySignature = KeySignature::of(Major, 3, false);
        pub const A_FLAT: KeySignature = KeySignature::of(Major, 4, true);
        pub const B: KeySignature = KeySignature::of(Major, 5, false);
        pub const B_FLAT: KeySignature = KeySignature::of(Major, 2, true);
    }

    pub mod natural_minor {
        use crate::music::scale::key::{KeySignature, KeyType::NaturalMinor};

        pub const C: KeySignature = KeySignature::of(NaturalMinor, 3, true);
        pub const C_SHARP: KeySignature = KeySignature::of(NaturalMinor, 4, false);
        pub const D: KeySignature = KeySignature::of(NaturalMinor, 1, true);
        pub const D_SHARP: KeySignature = KeySignature::of(NaturalMinor, 6, false);
        pub const E: KeySignature = KeySignature::of(NaturalMinor, 1, false);
        pub const E_FLAT: KeySignature = KeySignature::of(NaturalMinor, 6, true);
        pub const F: KeySignature = KeySignature::of(NaturalMinor, 4, true);
        pub const F_SHARP: KeySignature = KeySignature::of(NaturalMinor, 3, false);
        pub const G: KeySignature = KeySignature::of(NaturalMinor, 2, true);
        pub const G_SHARP: KeySignature = KeySignature::of(NaturalMinor, 5, false);
        pub const A: KeySignature = KeySignature::of(NaturalMinor, 0, true);
        pub const A_SHARP: KeySignature = KeySignature::of(NaturalMinor, 7, false);
        pub const A_FLAT: KeySignature = KeySignature::of(NaturalMinor, 7, true);
        pub const B: KeySignature = KeySignature::of(NaturalMinor, 2, false);
        pub const B_FLAT: KeySignature = KeySignature::of(NaturalMinor, 5, true);
    }

    pub mod harmonic_minor {
        use crate::music::scale::key::{KeySignature, KeyType::HarmonicMinor};

        pub const C: KeySignature = KeySignature::of(HarmonicMinor, 3, true);
        pub const C_SHARP: KeySignature = KeySignature::of(HarmonicMinor, 4, false);
        pub const D: KeySignature = KeySignature::of(HarmonicMinor, 1, true);
        pub const D_SHARP: KeySignature = KeySignature::of(HarmonicMinor, 6, false);
        pub const E: KeySignature = KeySignature::of(HarmonicMinor, 1, false);
        pub const E_FLAT: KeySignature = KeySignature::of(HarmonicMinor, 6, true);
        pub const F: KeySignature = KeySignature::of(HarmonicMinor, 4, true);
        pub const F_SHARP: KeySignature = KeySignature::of(HarmonicMinor, 3, false);
        pub const G: KeySignature = KeySignature::of(HarmonicMinor, 2, true);
        pub const G_SHARP: KeySignature = KeySignature::of(HarmonicMinor, 5, false);
        pub const A: KeySignature = KeySignature::of(HarmonicMinor, 0, true);
        pub const A_SHARP: KeySignature = KeySignature::of(HarmonicMinor, 7, false);
        pub const A_FLAT: KeySignature = KeySignature::of(HarmonicMinor, 7, true);
        pub const B: KeySignature = KeySignature::of(HarmonicMinor, 2, false);
        pub const B_FLAT: KeySignature = KeySignature::of(HarmonicMinor, 5, true);
    }
}
