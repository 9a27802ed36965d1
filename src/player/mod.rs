//! # Player Module
//!
//! Turns abstract pitches into audio-sprite playback.
//!
//! ## Sub-modules
//! - `asset` - WAV decoding into an [`AudioAsset`]
//! - `sprite` - [`SpriteMap`] layout: one clip per semitone, back to back
//! - `backend` - [`AudioBackend`] seam to the external playback engine
//! - `font` - [`FontNotePlayer`], the asset-backed [`NotePlayer`]
//!
//! ## Asset Layout
//! ```text
//! offset:  0      L      2L     3L    ...   (n-1)L
//!          | C3   | Db3  | D3   | Eb3 | ... | B6   |
//! ```
//! `n` is the chromatic distance from the start note to the end note plus
//! one. Keys are `Note::to_key` strings.
//!
//! ## Example
//! ```rust
//! use notefont::player::{AudioAsset, FontNotePlayer, NotePlayer, RecordingBackend};
//! use notefont::{Chroma, Note};
//!
//! let asset = AudioAsset::new("piano", 1000, 1, vec![0.0; 1200]);
//! let backend = RecordingBackend::new();
//! let player = FontNotePlayer::with_asset(
//!     asset,
//!     100,
//!     Note::parse("C5")?,
//!     Note::parse("B5")?,
//!     &backend,
//! );
//!
//! player.play_note(Chroma::G, 5);
//! player.play_note(Chroma::G, 7); // outside the range: nothing happens
//! assert_eq!(backend.played(), vec!["G5"]);
//! # Ok::<(), notefont::NoteFontError>(())
//! ```

mod asset;
mod backend;
mod font;
mod sprite;

pub use asset::AudioAsset;
pub use backend::{AudioBackend, LogBackend, NullBackend, RecordingBackend};
pub use font::FontNotePlayer;
pub use sprite::{Sprite, SpriteMap};

use crate::note::{Chroma, Note};

/// Something that can sound a pitch.
pub trait NotePlayer {
    /// Trigger playback of one pitch. Never fails; unplayable pitches are ignored.
    fn play_note(&self, chroma: Chroma, octave: i32);

    fn play(&self, note: &Note) {
        self.play_note(note.chroma(), note.octave())
    }
}
