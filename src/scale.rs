//! Scale interval patterns.
//!
//! A scale turns a root note into a note-generating function
//! `degree -> Note`, which is exactly what an iterative note sequence
//! consumes. Degrees past the end of the pattern continue into the next
//! octave, so a generator is unbounded.

use crate::error::{NoteFontError, Result};
use crate::note::Note;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    Chromatic,
    #[default]
    Major,
    NaturalMinor,
    MajorPentatonic,
}

impl Scale {
    /// Semitone offsets from the root within one octave.
    pub fn intervals(self) -> &'static [i32] {
        match self {
            Scale::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            Scale::Major => &[0, 2, 4, 5, 7, 9, 11],
            Scale::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            Scale::MajorPentatonic => &[0, 2, 4, 7, 9],
        }
    }

    /// Note at scale degree `degree` (0 = root).
    pub fn degree(self, root: Note, degree: usize) -> Note {
        let intervals = self.intervals();
        // Degrees too far above the root saturate instead of overflowing.
        let octaves = i32::try_from(degree / intervals.len()).unwrap_or(i32::MAX);
        let semitones = octaves
            .saturating_mul(12)
            .saturating_add(intervals[degree % intervals.len()]);
        root.transpose(semitones)
    }

    pub fn generator(self, root: Note) -> impl Fn(usize) -> Note {
        move |degree| self.degree(root, degree)
    }

    /// The first `count` degrees starting at `root`.
    pub fn notes(self, root: Note, count: usize) -> Vec<Note> {
        (0..count).map(|degree| self.degree(root, degree)).collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Scale::Chromatic => "chromatic",
            Scale::Major => "major",
            Scale::NaturalMinor => "natural-minor",
            Scale::MajorPentatonic => "major-pentatonic",
        }
    }
}

impl FromStr for Scale {
    type Err = NoteFontError;

    /// Accepts the canonical names plus the short forms "minor" and "pentatonic".
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromatic" => Ok(Scale::Chromatic),
            "major" => Ok(Scale::Major),
            "minor" | "natural-minor" => Ok(Scale::NaturalMinor),
            "pentatonic" | "major-pentatonic" => Ok(Scale::MajorPentatonic),
            other => Err(NoteFontError::ConfigError(format!(
                "Unknown scale: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
