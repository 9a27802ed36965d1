//! # Sequence Module
//!
//! Decide which note sounds on each launch.
//!
//! ## Sub-modules
//! - `iterative` - [`IterativeNoteSequence`]: cursor over generated notes
//! - `random` - [`RandomNoteSequence`]: independent uniform picks
//!
//! ## Traversal Policies
//! For a pattern `[N0, N1, N2, N3]`:
//! ```text
//! ascending:    0 1 2 3 0 1 2 3 ...
//! descending:   3 2 1 0 3 2 1 0 ...
//! alternating:  0 1 2 3 2 1 0 1 2 3 ...
//! ```
//! Alternating bounces off both ends without repeating the boundary note.
//!
//! ## Ownership
//! Sequences borrow their [`NotePlayer`](crate::player::NotePlayer). One
//! player can back several sequences, and a sequence cannot outlive the
//! player it sounds through.
//!
//! ## Example
//! ```rust
//! use notefont::player::{AudioAsset, FontNotePlayer, RecordingBackend};
//! use notefont::sequence::{NoteSequence, PatternNoteSequence, TraversalPolicy};
//! use notefont::Note;
//!
//! let backend = RecordingBackend::new();
//! let player = FontNotePlayer::with_asset(
//!     AudioAsset::new("piano", 1000, 1, vec![0.0; 1200]),
//!     100,
//!     Note::parse("C5")?,
//!     Note::parse("B5")?,
//!     &backend,
//! );
//!
//! let mut seq =
//!     PatternNoteSequence::parse_pattern(&player, &["C5", "D5", "E5"], TraversalPolicy::Descending)?;
//! for _ in 0..4 {
//!     seq.play_note();
//! }
//! assert_eq!(backend.played(), vec!["E5", "D5", "C5", "E5"]);
//! # Ok::<(), notefont::NoteFontError>(())
//! ```

mod iterative;
mod random;


pub use iterative::{IterativeNoteSequence, PatternNoteSequence};
pub use random::{RandomNoteSequence, DEFAULT_CHROMAS, DEFAULT_OCTAVES};

use crate::error::{NoteFontError, Result};
use crate::note::Note;
use crate::player::NotePlayer;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A source of notes, advanced once per user-triggered event.
pub trait NoteSequence {
    /// Advance the cursor and return the note it was on, without playing it.
    fn next_note(&mut self) -> Option<Note>;

    /// Advance the cursor and play exactly one note.
    fn play_note(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalPolicy {
    #[default]
    Ascending,
    Descending,
    Alternating,
}

impl TraversalPolicy {
    pub fn name(self) -> &'static str {
        match self {
            TraversalPolicy::Ascending => "ascending",
            TraversalPolicy::Descending => "descending",
            TraversalPolicy::Alternating => "alternating",
        }
    }
}

impl FromStr for TraversalPolicy {
    type Err = NoteFontError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "up" => Ok(TraversalPolicy::Ascending),
            "descending" | "down" => Ok(TraversalPolicy::Descending),
            "alternating" | "bounce" => Ok(TraversalPolicy::Alternating),
            other => Err(NoteFontError::ConfigError(format!(
                "Unknown traversal policy: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for TraversalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the sequence variants, chosen when a session is set up.
pub enum AnySequence<'a, P: NotePlayer + ?Sized, R: Rng = ThreadRng> {
    Iterative(IterativeNoteSequence<'a, P>),
    Random(RandomNoteSequence<'a, P, R>),
}

impl<'a, P: NotePlayer + ?Sized, R: Rng> NoteSequence for AnySequence<'a, P, R> {
    fn next_note(&mut self) -> Option<Note> {
        match self {
            AnySequence::Iterative(seq) => seq.next_note(),
            AnySequence::Random(seq) => seq.next_note(),
        }
    }

    fn play_note(&mut self) {
        match self {
            AnySequence::Iterative(seq) => seq.play_note(),
            AnySequence::Random(seq) => seq.play_note(),
        }
    }
}

impl<'a, P: NotePlayer + ?Sized, R: Rng> From<IterativeNoteSequence<'a, P>> for AnySequence<'a, P, R> {
    fn from(seq: IterativeNoteSequence<'a, P>) -> Self {
        AnySequence::Iterative(seq)
    }
}

impl<'a, P: NotePlayer + ?Sized, R: Rng> From<RandomNoteSequence<'a, P, R>> for AnySequence<'a, P, R> {
    fn from(seq: RandomNoteSequence<'a, P, R>) -> Self {
        AnySequence::Random(seq)
    }
}
