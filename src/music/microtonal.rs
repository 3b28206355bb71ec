// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals measured in fractional semitones.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::music::Pitch;

/// A distance of any real number of semitones; the sign gives direction
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MicrotonalInterval(f64);

impl MicrotonalInterval {
    pub fn new(semitones: f64) -> Self {
        MicrotonalInterval(semitones)
    }

    pub fn from_cents(cents: f64) -> Self {
        MicrotonalInterval(cents / 100.0)
    }

    /// Distance between two pitches, keeping fractional values
    pub fn between(from: Pitch, to: Pitch) -> Self {
        MicrotonalInterval(to.midi() - from.midi())
    }

    pub fn semitones(&self) -> f64 {
        self.0
    }

    pub fn cents(&self) -> f64 {
        self.0 * 100.0
    }

    /// Pitch this interval above or below another
    pub fn apply_to_pitch(&self, pitch: Pitch, above: bool) -> Pitch {
        if above {
            pitch.transpose(self.0)
        } else {
            pitch.transpose(-self.0)
        }
    }
}

/// Ordered by size; equal sizes in opposite directions fall back to the sign
impl PartialOrd for MicrotonalInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.abs().partial_cmp(&other.0.abs())? {
            Ordering::Equal => self.0.partial_cmp(&other.0),
            ordering => Some(ordering),
        }
    }
}

impl Add<MicrotonalInterval> for Pitch {
    type Output = Pitch;

    fn add(self, interval: MicrotonalInterval) -> Pitch {
        interval.apply_to_pitch(self, true)
    }
}

impl Sub<MicrotonalInterval> for Pitch {
    type Output = Pitch;

    fn sub(self, interval: MicrotonalInterval) -> Pitch {
        interval.apply_to_pitch(self, false)
    }
}
