// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords as sorted sets of pitches.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, TheoryError};
use crate::music::{CompoundInterval, Interval, Pitch, PitchClass, Scale};

/// A set of simultaneous pitches, lowest first, without duplicates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chord {
    pitches: Vec<Pitch>,
}

impl Chord {
    /// Create a chord; duplicates are dropped and pitches sorted
    pub fn new<I: IntoIterator<Item = Pitch>>(pitches: I) -> Result<Self> {
        let pitches: Vec<Pitch> = pitches.into_iter().collect();
        if pitches.is_empty() {
            return Err(TheoryError::EmptyChord);
        }
        Ok(Self::from_nonempty(pitches))
    }

    fn from_nonempty(mut pitches: Vec<Pitch>) -> Self {
        pitches.sort_by(|a, b| a.midi().total_cmp(&b.midi()));
        pitches.dedup();
        Self { pitches }
    }

    pub fn from_midi_notes(notes: &[i32]) -> Result<Self> {
        Chord::new(notes.iter().map(|&note| Pitch::from_midi_note(note)))
    }

    pub fn num_pitches(&self) -> usize {
        self.pitches.len()
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    pub fn lowest(&self) -> Pitch {
        self.pitches[0]
    }

    pub fn highest(&self) -> Pitch {
        self.pitches[self.pitches.len() - 1]
    }

    pub fn contains_pitch_class(&self, pitch_class: PitchClass) -> bool {
        self.pitches.iter().any(|p| p.pitch_class() == pitch_class)
    }

    /// Exact pitch membership, microtones included
    pub fn contains_pitch(&self, pitch: Pitch) -> bool {
        self.pitches.contains(&pitch)
    }

    pub fn contains_midi_note(&self, note: i32) -> bool {
        self.pitches.iter().any(|p| p.rounded_midi() == note)
    }

    /// True if every pitch belongs to the scale
    pub fn fits_in_scale(&self, scale: &dyn Scale) -> bool {
        self.pitches.iter().all(|&p| scale.contains_pitch(p))
    }

    /// Intervals between neighbouring pitches, bottom up
    pub fn intervals(&self) -> Vec<CompoundInterval> {
        self.pitches
            .windows(2)
            .map(|pair| CompoundInterval::from_pitches(pair[1], pair[0]))
            .collect()
    }

    /// Distinct pitch classes, sorted
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        let mut classes: Vec<PitchClass> = self.pitches.iter().map(|p| p.pitch_class()).collect();
        classes.sort();
        classes.dedup();
        classes
    }

    pub fn num_unique_pitch_classes(&self) -> usize {
        self.pitch_classes().len()
    }

    /// Every pitch moved by an interval; microtones that land on the
    /// same note merge
    pub fn apply_interval(&self, interval: Interval, above: bool) -> Chord {
        Chord::from_nonempty(
            self.pitches
                .iter()
                .map(|&p| interval.apply_to_pitch(p, above))
                .collect(),
        )
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.pitches.iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", names.join(" "))
    }
}
