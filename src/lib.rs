// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! HARMONY - music theory values
//!
//! Intervals, keys, modes, scales and twelve-tone rows as plain Rust values,
//! with scale libraries loadable from YAML or TOML.

pub mod config;
pub mod error;
pub mod music;

pub use config::{ScaleDefinition, ScaleLibrary};
pub use error::{Result, TheoryError};
pub use music::{
    Chord, Chromatic, CompoundInterval, Interval, KeySignature, KeyType, MicrotonalInterval,
    Mode, ModeType, Octatonic, OvertoneSeries, Pitch, PitchClass, Quality, Scale, ToneRow,
    WholeTone,
};
