// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Symmetric scales: chromatic, octatonic and whole tone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::music::{PitchClass, Scale};

/// All twelve pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromatic {
    root: PitchClass,
}

impl Chromatic {
    pub fn new(root: PitchClass) -> Self {
        Self { root }
    }
}

impl Scale for Chromatic {
    fn intervals_as_semitones(&self) -> Vec<i32> {
        vec![1; 12]
    }

    fn pitch_class_of_root(&self) -> PitchClass {
        self.root
    }

    fn notes_per_octave(&self) -> usize {
        12
    }
}

impl fmt::Display for Chromatic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chromatic", self.root)
    }
}

/// Alternating half and whole steps (the diminished scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Octatonic {
    root: PitchClass,
    starts_with_half_step: bool,
}

impl Octatonic {
    pub fn new(root: PitchClass, starts_with_half_step: bool) -> Self {
        Self {
            root,
            starts_with_half_step,
        }
    }

    pub fn starts_with_half_step(&self) -> bool {
        self.starts_with_half_step
    }

    pub fn starts_with_whole_step(&self) -> bool {
        !self.starts_with_half_step
    }
}

impl Scale for Octatonic {
    fn intervals_as_semitones(&self) -> Vec<i32> {
        let (first, second) = if self.starts_with_half_step { (1, 2) } else { (2, 1) };
        [first, second].repeat(4)
    }

    fn pitch_class_of_root(&self) -> PitchClass {
        self.root
    }

    fn notes_per_octave(&self) -> usize {
        8
    }
}

impl fmt::Display for Octatonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = if self.starts_with_half_step { "half-whole" } else { "whole-half" };
        write!(f, "{} octatonic ({})", self.root, order)
    }
}

/// Six whole steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WholeTone {
    root: PitchClass,
}

impl WholeTone {
    pub fn new(root: PitchClass) -> Self {
        Self { root }
    }
}

impl Scale for WholeTone {
    fn intervals_as_semitones(&self) -> Vec<i32> {
        vec![2; 6]
    }

    fn pitch_class_of_root(&self) -> PitchClass {
        self.root
    }

    fn notes_per_octave(&self) -> usize {
        6
    }
}

impl fmt::Display for WholeTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} whole tone", self.root)
    }
}
