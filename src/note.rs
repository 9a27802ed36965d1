//! # Note Model
//!
//! Pitches as `chroma + octave` values, plus the token parser used by every
//! pattern table and session file.
//!
//! ## Canonical Chroma Ordering
//! ```text
//! index:  0  1   2  3   4  5  6   7  8   9  10  11
//! name:   C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
//! ```
//! Only flat spellings are canonical. The ordering doubles as the semitone
//! offset from C, so `octave * 12 + index` is an absolute pitch.
//!
//! ## Token Format
//! `{chroma}{octave}` with a nonnegative decimal octave: `C5`, `Db3`, `Bb10`.
//! The same string is the key of an instrument's sprite map, so
//! `Note::to_key` and `Display` must never diverge from it.
//!
//! ## Example
//! ```rust
//! use notefont::{Chroma, Note};
//!
//! let note = Note::parse("B4")?;
//! assert_eq!(note.increment(), Note::new(Chroma::C, 5));
//! assert_eq!(note.to_key(), "B4");
//! # Ok::<(), notefont::NoteFontError>(())
//! ```

use crate::error::{NoteFontError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Pitch class, independent of octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Chroma {
    #[default]
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl Chroma {
    /// All chromas in canonical order.
    pub const ALL: [Chroma; 12] = [
        Chroma::C,
        Chroma::Db,
        Chroma::D,
        Chroma::Eb,
        Chroma::E,
        Chroma::F,
        Chroma::Gb,
        Chroma::G,
        Chroma::Ab,
        Chroma::A,
        Chroma::Bb,
        Chroma::B,
    ];

    /// Position in the canonical ordering (0-11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chroma at `index`, wrapping modulo 12.
    pub fn from_index(index: usize) -> Chroma {
        Self::ALL[index % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            Chroma::C => "C",
            Chroma::Db => "Db",
            Chroma::D => "D",
            Chroma::Eb => "Eb",
            Chroma::E => "E",
            Chroma::F => "F",
            Chroma::Gb => "Gb",
            Chroma::G => "G",
            Chroma::Ab => "Ab",
            Chroma::A => "A",
            Chroma::Bb => "Bb",
            Chroma::B => "B",
        }
    }

    /// Look up a canonical chroma name. Names are case-sensitive ("bb" is not "Bb").
    pub fn from_name(name: &str) -> Result<Chroma> {
        Self::ALL
            .iter()
            .copied()
            .find(|chroma| chroma.name() == name)
            .ok_or_else(|| NoteFontError::UnknownChroma(name.to_string()))
    }
}

impl fmt::Display for Chroma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position (0-11) of a chroma name in the canonical ordering.
///
/// # Example
/// ```
/// use notefont::chroma_index;
///
/// assert_eq!(chroma_index("C")?, 0);
/// assert_eq!(chroma_index("Gb")?, 6);
/// assert!(chroma_index("F#").is_err());
/// # Ok::<(), notefont::NoteFontError>(())
/// ```
pub fn chroma_index(name: &str) -> Result<usize> {
    Chroma::from_name(name).map(Chroma::index)
}

/// An immutable pitch.
///
/// Ordering follows absolute pitch, so `B4 < C5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    chroma: Chroma,
    octave: i32,
}

impl Note {
    pub fn new(chroma: Chroma, octave: i32) -> Self {
        Self { chroma, octave }
    }

    /// Parse a `{chroma}{octave}` token such as `"C5"` or `"Db3"`.
    ///
    /// The longest chroma name the token starts with wins, so `"Db3"` is
    /// D-flat rather than D followed by garbage. Whatever follows the chroma
    /// must be a nonnegative decimal integer.
    pub fn parse(token: &str) -> Result<Note> {
        let trimmed = token.trim();

        let chroma = Chroma::ALL
            .iter()
            .copied()
            .filter(|chroma| trimmed.starts_with(chroma.name()))
            .max_by_key(|chroma| chroma.name().len())
            .ok_or_else(|| NoteFontError::parse(token, "no chroma name matches"))?;

        let digits = &trimmed[chroma.name().len()..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NoteFontError::parse(
                token,
                "octave must be a nonnegative integer",
            ));
        }

        let octave = digits
            .parse::<i32>()
            .map_err(|_| NoteFontError::parse(token, "octave is out of range"))?;

        Ok(Note { chroma, octave })
    }

    pub fn chroma(&self) -> Chroma {
        self.chroma
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Absolute pitch in semitones above C0.
    pub fn semitone(&self) -> i32 {
        self.octave
            .saturating_mul(12)
            .saturating_add(self.chroma.index() as i32)
    }

    pub fn from_semitone(semitone: i32) -> Note {
        Note {
            chroma: Chroma::from_index(semitone.rem_euclid(12) as usize),
            octave: semitone.div_euclid(12),
        }
    }

    /// The note `semitones` above (or below, when negative) this one.
    pub fn transpose(&self, semitones: i32) -> Note {
        Note::from_semitone(self.semitone().saturating_add(semitones))
    }

    /// One semitone higher; `B4` becomes `C5`.
    pub fn increment(&self) -> Note {
        let index = self.chroma.index() + 1;
        Note {
            chroma: Chroma::from_index(index),
            octave: if index == 12 { self.octave + 1 } else { self.octave },
        }
    }

    /// One semitone lower; `C5` becomes `B4`.
    pub fn decrement(&self) -> Note {
        self.transpose(-1)
    }

    /// Sprite-map key, e.g. `"Db3"`.
    pub fn to_key(&self) -> String {
        self.to_string()
    }
}

/// Signed number of semitones from `from` up to `to`.
pub fn chromatic_distance(from: &Note, to: &Note) -> i32 {
    to.semitone() - from.semitone()
}

/// Parse every token, failing on the first bad one.
///
/// # Example
/// ```
/// use notefont::parse_sequence;
///
/// let notes = parse_sequence(&["C5", "D5", "E5"])?;
/// assert_eq!(notes.len(), 3);
/// assert!(parse_sequence(&["C5", "X5"]).is_err());
/// # Ok::<(), notefont::NoteFontError>(())
/// ```
pub fn parse_sequence<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Note>> {
    tokens.iter().map(|token| Note::parse(token.as_ref())).collect()
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.chroma, self.octave)
    }
}

impl FromStr for Note {
    type Err = NoteFontError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

impl TryFrom<String> for Note {
    type Error = NoteFontError;

    fn try_from(value: String) -> Result<Self> {
        Note::parse(&value)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_key()
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.semitone().cmp(&other.semitone())
    }
}
