// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory values.
//!
//! Pitches and pitch classes, simple and compound intervals, keys, modes and
//! symmetric scales, plus chords, overtone series and twelve-tone rows built
//! on top of them. Everything here is a plain value type with no I/O.

pub mod chord;
pub mod compound;
pub mod interval;
pub mod microtonal;
pub mod overtone;
pub mod pitch;
pub mod scale;
pub mod tone_row;

pub use chord::Chord;
pub use compound::CompoundInterval;
pub use interval::{intervals, Interval, Quality};
pub use microtonal::MicrotonalInterval;
pub use overtone::OvertoneSeries;
pub use pitch::{Pitch, PitchClass, SEMITONES_PER_OCTAVE};
pub use scale::{
    keys, Chromatic, KeySignature, KeyType, Mode, ModeType, Octatonic, Scale, WholeTone,
};
pub use tone_row::ToneRow;
