//! Musical-note sound effects for a click-to-launch toy.
//!
//! Every launch plays one note from an instrument "font": a single audio
//! asset cut into one clip per semitone. Which note plays is decided by a
//! note sequence that walks a pattern or scale, or picks at random.
//!
//! ```rust
//! use notefont::player::{AudioAsset, FontNotePlayer, RecordingBackend};
//! use notefont::sequence::{NoteSequence, PatternNoteSequence, TraversalPolicy};
//! use notefont::Note;
//!
//! let backend = RecordingBackend::new();
//! let player = FontNotePlayer::with_asset(
//!     AudioAsset::new("piano", 1000, 1, vec![0.0; 4800]),
//!     100,
//!     Note::parse("C3")?,
//!     Note::parse("B6")?,
//!     &backend,
//! );
//! let mut seq = PatternNoteSequence::parse_pattern(
//!     &player,
//!     &["C5", "D5", "E5", "F5"],
//!     TraversalPolicy::Alternating,
//! )?;
//!
//! for _ in 0..6 {
//!     seq.play_note();
//! }
//! assert_eq!(backend.played(), vec!["C5", "D5", "E5", "F5", "E5", "D5"]);
//! # Ok::<(), notefont::NoteFontError>(())
//! ```

pub mod config;
pub mod error;
pub mod manifest;
pub mod note;
pub mod player;
pub mod scale;
pub mod sequence;

pub use config::SessionConfig;
pub use error::*;
pub use manifest::{AssetEntry, AssetManifest};
pub use note::{chroma_index, chromatic_distance, parse_sequence, Chroma, Note};
pub use player::{FontNotePlayer, NotePlayer};
pub use scale::Scale;
pub use sequence::{
    AnySequence, IterativeNoteSequence, NoteSequence, PatternNoteSequence, RandomNoteSequence,
    TraversalPolicy,
};
