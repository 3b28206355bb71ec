// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale and key system.
//!
//! Every scale is described by two primitives: the pitch class of its root
//! and the semitone steps between its successive degrees. Membership, pitch
//! enumeration and degree lookup are all derived from those by the
//! [`Scale`] trait's provided methods.

pub mod key;
pub mod mode;
pub mod symmetric;

pub use key::{keys, KeySignature, KeyType};
pub use mode::{Mode, ModeType};
pub use symmetric::{Chromatic, Octatonic, WholeTone};

use std::fmt;

use crate::music::pitch::lowest_note_of_midi_octave;
use crate::music::{Interval, Pitch, PitchClass, SEMITONES_PER_OCTAVE};

/// A collection of pitch classes repeating every octave
pub trait Scale: fmt::Debug {
    /// Semitone steps between successive degrees, root first
    fn intervals_as_semitones(&self) -> Vec<i32>;

    fn pitch_class_of_root(&self) -> PitchClass;

    /// Degrees per octave, counting the root's repetition at the octave
    fn notes_per_octave(&self) -> usize;

    /// The root followed by the pitch class reached after each step
    fn pitch_classes(&self) -> Vec<PitchClass> {
        let mut current = self.pitch_class_of_root();
        let mut classes = vec![current];
        for step in self.intervals_as_semitones() {
            current += step;
            classes.push(current);
        }
        classes
    }

    fn contains_pitch_class(&self, pitch_class: PitchClass) -> bool {
        self.pitch_classes().contains(&pitch_class)
    }

    /// Membership of the pitch's rounded MIDI note
    fn contains_pitch(&self, pitch: Pitch) -> bool {
        self.contains_pitch_class(pitch.pitch_class())
    }

    fn contains_midi_note(&self, note: i32) -> bool {
        self.contains_pitch_class(PitchClass::new(note))
    }

    /// The steps as canonical intervals
    fn intervals(&self) -> Vec<Interval> {
        self.intervals_as_semitones()
            .into_iter()
            .map(Interval::from_num_semitones)
            .collect()
    }

    /// The root in a given MIDI octave
    fn root(&self, octave: i32) -> Pitch {
        Pitch::from_pitch_class(self.pitch_class_of_root(), octave)
    }

    /// One octave's walk of the scale, starting from its first note in the
    /// given MIDI octave
    fn pitches_in_octave(&self, octave: i32) -> Vec<Pitch> {
        let count = self.intervals_as_semitones().len() + 1;
        ascending_notes(self, lowest_note_of_midi_octave(octave))
            .take(count)
            .map(Pitch::from_midi_note)
            .collect()
    }

    /// Every scale note from `lowest` to `highest` MIDI note, inclusive
    fn pitches_between(&self, lowest: i32, highest: i32) -> Vec<Pitch> {
        if lowest > highest {
            return Vec::new();
        }
        ascending_notes(self, lowest)
            .take_while(|&note| note <= highest)
            .map(Pitch::from_midi_note)
            .collect()
    }

    /// Pitch class of a scale degree.
    ///
    /// Degrees are taken modulo [`Scale::notes_per_octave`]; both 0 and 1
    /// name the root, and degree `k` is the root plus the first `k - 1` steps.
    fn pitch_class_of_scale_degree(&self, degree: usize) -> PitchClass {
        let degree = degree % self.notes_per_octave().max(1);
        let root = self.pitch_class_of_root();
        if degree <= 1 {
            return root;
        }
        let offset: i32 = self
            .intervals_as_semitones()
            .iter()
            .take(degree - 1)
            .sum();
        root + offset
    }

    /// Same root and same step sequence, whatever the concrete scale type
    fn same_scale_as(&self, other: &dyn Scale) -> bool {
        self.pitch_class_of_root() == other.pitch_class_of_root()
            && self.intervals_as_semitones() == other.intervals_as_semitones()
    }
}

impl PartialEq for dyn Scale + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.same_scale_as(other)
    }
}

/// Ascending MIDI notes of a scale from its first note at or above `lowest`,
/// walking the steps cyclically
fn ascending_notes<S: Scale + ?Sized>(scale: &S, lowest: i32) -> impl Iterator<Item = i32> {
    let steps = scale.intervals_as_semitones();
    let classes = scale.pitch_classes();
    let start = (lowest..lowest + SEMITONES_PER_OCTAVE)
        .find(|&note| classes.contains(&PitchClass::new(note)));
    let mut index = start
        .and_then(|note| classes.iter().position(|&pc| pc == PitchClass::new(note)))
        .unwrap_or(0);

    let mut next = start;
    std::iter::from_fn(move || {
        let current = next?;
        next = match steps.get(index % steps.len().max(1)) {
            Some(&step) if step > 0 => Some(current + step),
            _ => None,
        };
        index += 1;
        Some(current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(pitches: &[Pitch]) -> Vec<i32> {
        pitches.iter().map(|p| p.rounded_midi()).collect()
    }

    #[test]
    fn test_pitch_classes() {
        let c_major = KeySignature::default();
        let classes: Vec<u8> = c_major.pitch_classes().iter().map(|pc| pc.value()).collect();
        assert_eq!(classes, vec![0, 2, 4, 5, 7, 9, 11, 0]);
    }

    #[test]
    fn test_contains() {
        let c_major = KeySignature::default();
        assert!(c_major.contains_pitch_class(PitchClass::G));
        assert!(!c_major.contains_pitch_class(PitchClass::new(6)));
        assert!(c_major.contains_midi_note(64));
        assert!(!c_major.contains_midi_note(61));
        assert!(c_major.contains_pitch(Pitch::from_midi(71.2)));
    }

    #[test]
    fn test_intervals() {
        let whole_tone = WholeTone::new(PitchClass::C);
        assert_eq!(
            whole_tone.intervals(),
            vec![Interval::from_num_semitones(2); 6]
        );
    }

    #[test]
    fn test_root() {
        let d_dorian = Mode::new(ModeType::Dorian, PitchClass::D);
        assert_eq!(d_dorian.root(4), Pitch::from_midi_note(62));
        assert_eq!(d_dorian.root(-1), Pitch::from_midi_note(2));
    }

    #[test]
    fn test_pitches_in_octave() {
        let c_major = KeySignature::default();
        assert_eq!(
            notes(&c_major.pitches_in_octave(4)),
            vec![60, 62, 64, 65, 67, 69, 71, 72]
        );

        // D major starts on C# in octave 4 and follows its own steps from there
        let d_major = KeySignature::with_root(KeyType::Major, PitchClass::D);
        assert_eq!(
            notes(&d_major.pitches_in_octave(4)),
            vec![61, 62, 64, 66, 67, 69, 71, 73]
        );
    }

    #[test]
    fn test_pitches_between() {
        let a_minor = KeySignature::with_root(KeyType::NaturalMinor, PitchClass::A);
        assert_eq!(
            notes(&a_minor.pitches_between(66, 84)),
            vec![67, 69, 71, 72, 74, 76, 77, 79, 81, 83, 84]
        );
        assert!(a_minor.pitches_between(70, 70).is_empty());
        assert!(a_minor.pitches_between(80, 60).is_empty());
        assert_eq!(Chromatic::new(PitchClass::C).pitches_between(60, 72).len(), 13);
    }

    #[test]
    fn test_scale_degrees() {
        let c_major = KeySignature::default();
        assert_eq!(c_major.pitch_class_of_scale_degree(0), PitchClass::C);
        assert_eq!(c_major.pitch_class_of_scale_degree(1), PitchClass::C);
        assert_eq!(c_major.pitch_class_of_scale_degree(5), PitchClass::G);
        assert_eq!(c_major.pitch_class_of_scale_degree(6), PitchClass::A);
        assert_eq!(c_major.pitch_class_of_scale_degree(8), PitchClass::C);
        assert_eq!(c_major.pitch_class_of_scale_degree(9), PitchClass::C);

        let a_minor = KeySignature::with_root(KeyType::NaturalMinor, PitchClass::A);
        assert_eq!(a_minor.pitch_class_of_scale_degree(4), PitchClass::D);
        assert_eq!(a_minor.pitch_class_of_scale_degree(7), PitchClass::G);
    }

    #[test]
    fn test_equality_across_scale_types() {
        let c_major: Box<dyn Scale> = Box::new(KeySignature::default());
        let c_ionian: Box<dyn Scale> = Box::new(Mode::new(ModeType::Ionian, PitchClass::C));
        let a_aeolian: Box<dyn Scale> = Box::new(Mode::new(ModeType::Aeolian, PitchClass::A));
        assert!(*c_major == *c_ionian);
        assert!(*c_major != *a_aeolian);
        assert!(c_major.same_scale_as(c_ionian.as_ref()));
    }
}
