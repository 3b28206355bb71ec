// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitches and pitch classes.
//!
//! A [`Pitch`] is a real-valued MIDI note number (60.0 = middle C, 69.0 =
//! A440); fractional values are microtones. A [`PitchClass`] is a pitch with
//! the octave discarded, 0 (C) through 11 (B).

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::music::Interval;

/// Semitones in one octave
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Frequency of MIDI note 69
pub const A4_HZ: f64 = 440.0;

const A4_MIDI: f64 = 69.0;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Convert a (possibly fractional) MIDI note number to a frequency in Hz
pub fn midi_to_freq(midi: f64) -> f64 {
    A4_HZ * 2f64.powf((midi - A4_MIDI) / SEMITONES_PER_OCTAVE as f64)
}

/// Convert a frequency in Hz to a (possibly fractional) MIDI note number
pub fn freq_to_midi(freq_hz: f64) -> f64 {
    A4_MIDI + SEMITONES_PER_OCTAVE as f64 * (freq_hz / A4_HZ).log2()
}

/// MIDI octave number of a note (middle C, 60, is in octave 4)
pub fn octave_number_of_midi_note(note: i32) -> i32 {
    note.div_euclid(SEMITONES_PER_OCTAVE) - 1
}

/// Lowest MIDI note (the C) of an octave
pub fn lowest_note_of_midi_octave(octave: i32) -> i32 {
    (octave + 1) * SEMITONES_PER_OCTAVE
}

/// Highest MIDI note (the B) of an octave
pub fn highest_note_of_midi_octave(octave: i32) -> i32 {
    lowest_note_of_midi_octave(octave) + SEMITONES_PER_OCTAVE - 1
}

/// A pitch class, 0 (C) through 11 (B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const D: PitchClass = PitchClass(2);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const G: PitchClass = PitchClass(7);
    pub const A: PitchClass = PitchClass(9);
    pub const B: PitchClass = PitchClass(11);

    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass(0),
        PitchClass(1),
        PitchClass(2),
        PitchClass(3),
        PitchClass(4),
        PitchClass(5),
        PitchClass(6),
        PitchClass(7),
        PitchClass(8),
        PitchClass(9),
        PitchClass(10),
        PitchClass(11),
    ];

    /// Create a pitch class; any integer is reduced modulo 12 (-1 is B)
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(SEMITONES_PER_OCTAVE) as u8)
    }

    /// The pitch class as 0-11
    pub fn value(self) -> u8 {
        self.0
    }

    /// Name spelled with sharps ("C#") or flats ("Db")
    pub fn name(self, use_sharps: bool) -> &'static str {
        if use_sharps {
            SHARP_NAMES[self.0 as usize]
        } else {
            FLAT_NAMES[self.0 as usize]
        }
    }

    /// True for the five pitch classes on the black keys of a piano
    pub fn is_black_key(self) -> bool {
        matches!(self.0, 1 | 3 | 6 | 8 | 10)
    }

    pub fn is_white_key(self) -> bool {
        !self.is_black_key()
    }

    /// Transpose by semitones, wrapping around the octave
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Ascending distance in semitones to another pitch class (0-11)
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 as i32 - self.0 as i32).rem_euclid(SEMITONES_PER_OCTAVE) as u8
    }
}

impl From<i32> for PitchClass {
    fn from(value: i32) -> Self {
        PitchClass::new(value)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    /// Parse a pitch class name (e.g., "C", "C#", "Db", "F#", "Cb")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_uppercase();
        let value = match name.as_str() {
            "C" | "B#" | "BS" => 0,
            "C#" | "CS" | "DB" => 1,
            "D" => 2,
            "D#" | "DS" | "EB" => 3,
            "E" | "FB" => 4,
            "F" | "E#" | "ES" => 5,
            "F#" | "FS" | "GB" => 6,
            "G" => 7,
            "G#" | "GS" | "AB" => 8,
            "A" => 9,
            "A#" | "AS" | "BB" => 10,
            "B" | "CB" => 11,
            _ => return Err(TheoryError::UnknownPitchName(s.to_string())),
        };
        Ok(PitchClass(value))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(true))
    }
}

impl Add<i32> for PitchClass {
    type Output = PitchClass;

    fn add(self, semitones: i32) -> PitchClass {
        self.transpose(semitones)
    }
}

impl Sub<i32> for PitchClass {
    type Output = PitchClass;

    fn sub(self, semitones: i32) -> PitchClass {
        self.transpose(-semitones)
    }
}

impl AddAssign<i32> for PitchClass {
    fn add_assign(&mut self, semitones: i32) {
        *self = *self + semitones;
    }
}

impl SubAssign<i32> for PitchClass {
    fn sub_assign(&mut self, semitones: i32) {
        *self = *self - semitones;
    }
}

/// A pitch as a real-valued MIDI note number
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pitch(f64);

impl Pitch {
    /// Middle C
    pub const MIDDLE_C: Pitch = Pitch(60.0);

    /// Create a pitch from a (possibly fractional) MIDI note number
    pub fn from_midi(midi: f64) -> Self {
        Pitch(midi)
    }

    /// Create a pitch from an integer MIDI note number
    pub fn from_midi_note(note: i32) -> Self {
        Pitch(note as f64)
    }

    /// Create a pitch from a frequency in Hz
    pub fn from_freq(freq_hz: f64) -> Self {
        Pitch(freq_to_midi(freq_hz))
    }

    /// The pitch class in a given MIDI octave (C4 = 60)
    pub fn from_pitch_class(pc: PitchClass, octave: i32) -> Self {
        Pitch::from_midi_note(lowest_note_of_midi_octave(octave) + pc.value() as i32)
    }

    pub fn midi(self) -> f64 {
        self.0
    }

    /// MIDI note number rounded to the nearest semitone
    pub fn rounded_midi(self) -> i32 {
        self.0.round() as i32
    }

    pub fn freq_hz(self) -> f64 {
        midi_to_freq(self.0)
    }

    /// Frequency rounded to the nearest whole Hz
    pub fn rounded_freq_hz(self) -> i64 {
        self.freq_hz().round() as i64
    }

    /// Pitch class of the rounded MIDI note
    pub fn pitch_class(self) -> PitchClass {
        PitchClass::new(self.rounded_midi())
    }

    /// MIDI octave of the rounded MIDI note
    pub fn octave(self) -> i32 {
        octave_number_of_midi_note(self.rounded_midi())
    }

    pub fn is_black_key(self) -> bool {
        self.pitch_class().is_black_key()
    }

    pub fn is_white_key(self) -> bool {
        self.pitch_class().is_white_key()
    }

    /// True if the pitch falls between two equal-tempered semitones
    pub fn is_microtone(self) -> bool {
        self.0.fract() != 0.0
    }

    pub fn in_octave(self, octave: i32) -> bool {
        self.octave() == octave
    }

    /// True if both pitches round to the same MIDI note
    pub fn approximately_equal(self, other: Pitch) -> bool {
        self.rounded_midi() == other.rounded_midi()
    }

    /// Transpose by a (possibly fractional) number of semitones
    pub fn transpose(self, semitones: f64) -> Self {
        Pitch(self.0 + semitones)
    }
}

impl From<i32> for Pitch {
    fn from(note: i32) -> Self {
        Pitch::from_midi_note(note)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())?;
        if self.is_microtone() {
            let cents = (self.0 - self.rounded_midi() as f64) * 100.0;
            write!(f, " {:+.0}c", cents)?;
        }
        Ok(())
    }
}

impl Sub for Pitch {
    type Output = Interval;

    fn sub(self, other: Pitch) -> Interval {
        Interval::from_pitches(self, other)
    }
}

impl Add<Interval> for Pitch {
    type Output = Pitch;

    fn add(self, interval: Interval) -> Pitch {
        interval.apply_to_pitch(self, true)
    }
}

impl Sub<Interval> for Pitch {
    type Output = Pitch;

    fn sub(self, interval: Interval) -> Pitch {
        interval.apply_to_pitch(self, false)
    }
}
