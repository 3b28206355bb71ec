// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for music theory operations.

use thiserror::Error;

use crate::music::{KeyType, PitchClass, Quality};

/// Result type for music theory operations.
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Errors raised when a value cannot be constructed or looked up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The quality is not valid for the interval kind (e.g. a perfect third).
    #[error("invalid interval: {quality} is not a valid quality for kind {kind}")]
    InvalidInterval {
        /// Interval kind (0 = unison, 8 = octave).
        kind: u32,
        /// Rejected quality.
        quality: Quality,
    },

    /// The quality is not valid for the compound interval kind.
    #[error("invalid compound interval: {quality} is not a valid quality for kind {kind}")]
    InvalidCompoundInterval {
        /// Compound kind (9 = ninth, 10 = tenth, ...).
        kind: u32,
        /// Rejected quality.
        quality: Quality,
    },

    /// Key signatures carry at most seven sharps or flats.
    #[error("a key signature cannot have {0} accidentals (maximum is 7)")]
    TooManyAccidentals(u8),

    /// No key of this type is rooted here with the requested accidental.
    #[error("no {key_type} key on {root} can be written with {}", accidental_name(.sharps))]
    NoKeySpelling {
        /// Requested root.
        root: PitchClass,
        /// Requested tonality.
        key_type: KeyType,
        /// Whether sharps were requested.
        sharps: bool,
    },

    /// Pitch name could not be parsed.
    #[error("unknown pitch name: '{0}'")]
    UnknownPitchName(String),

    /// Interval or quality name could not be parsed.
    #[error("unknown interval name: '{0}'")]
    UnknownIntervalName(String),

    /// Scale, key or mode name could not be parsed.
    #[error("unknown scale type: '{0}'")]
    UnknownScaleType(String),

    /// A tone row must use each pitch class exactly once.
    #[error("tone row contains {0} more than once")]
    DuplicatePitchClass(PitchClass),

    /// Tone rows are indexed 0 through 11.
    #[error("index {0} is out of range (0-11)")]
    IndexOutOfRange(usize),

    /// A chord needs at least one pitch.
    #[error("a chord needs at least one pitch")]
    EmptyChord,
}

fn accidental_name(sharps: &bool) -> &'static str {
    if *sharps {
        "sharps"
    } else {
        "flats"
    }
}
