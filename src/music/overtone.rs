// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The harmonic series above a fundamental.

use serde::{Deserialize, Serialize};

use crate::music::{CompoundInterval, Pitch};

/// Overtones of a fundamental pitch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvertoneSeries {
    fundamental: Pitch,
}

impl OvertoneSeries {
    pub fn new(fundamental: Pitch) -> Self {
        Self { fundamental }
    }

    pub fn fundamental(&self) -> Pitch {
        self.fundamental
    }

    /// The nth harmonic; 0 is the fundamental itself
    pub fn harmonic(&self, n: usize) -> Pitch {
        if n == 0 {
            return self.fundamental;
        }
        Pitch::from_freq(self.fundamental.freq_hz() * (n + 1) as f64)
    }

    /// Distance from the fundamental to the nth harmonic, rounded to the
    /// nearest equal-tempered interval
    pub fn interval_of_harmonic(&self, n: usize) -> CompoundInterval {
        CompoundInterval::from_pitches(self.harmonic(n), self.fundamental)
    }
}
