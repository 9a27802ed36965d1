//! Font-backed note player.

use super::asset::AudioAsset;
use super::backend::AudioBackend;
use super::sprite::SpriteMap;
use super::NotePlayer;
use crate::error::Result;
use crate::note::{Chroma, Note};
use log::{debug, trace, warn};
use std::io::Read;
use std::path::Path;

/// Plays notes by slicing one instrument asset into per-semitone sprites.
///
/// The sprite map is fixed at load time and never mutated, so a single
/// player can be shared by any number of note sequences.
#[derive(Debug)]
pub struct FontNotePlayer<B: AudioBackend> {
    asset: AudioAsset,
    sprites: SpriteMap,
    backend: B,
}

impl<B: AudioBackend> FontNotePlayer<B> {
    /// Decode the WAV at `path` and map `start..=end` onto consecutive
    /// clips of `clip_length_ms`.
    ///
    /// # Errors
    /// [`NoteFontError::LoadError`](crate::NoteFontError::LoadError) if the
    /// file cannot be opened or decoded.
    pub fn load(
        path: impl AsRef<Path>,
        clip_length_ms: u64,
        start: Note,
        end: Note,
        backend: B,
    ) -> Result<Self> {
        let asset = AudioAsset::open(path)?;
        Ok(Self::with_asset(asset, clip_length_ms, start, end, backend))
    }

    /// Same as [`load`](Self::load) for WAV bytes already in memory.
    pub fn from_reader<R: Read>(
        name: &str,
        reader: R,
        clip_length_ms: u64,
        start: Note,
        end: Note,
        backend: B,
    ) -> Result<Self> {
        let asset = AudioAsset::from_reader(name, reader)?;
        Ok(Self::with_asset(asset, clip_length_ms, start, end, backend))
    }

    pub fn with_asset(
        asset: AudioAsset,
        clip_length_ms: u64,
        start: Note,
        end: Note,
        backend: B,
    ) -> Self {
        let sprites = SpriteMap::chromatic(start, end, clip_length_ms);

        if sprites.total_ms() > asset.duration_ms() {
            warn!(
                "'{}' is {}ms long but {}..={} needs {}ms; high notes will be cut short",
                asset.name(),
                asset.duration_ms(),
                start,
                end,
                sprites.total_ms()
            );
        }
        debug!(
            "Loaded font '{}' with {} sprites ({}..={})",
            asset.name(),
            sprites.len(),
            start,
            end
        );

        Self {
            asset,
            sprites,
            backend,
        }
    }

    pub fn asset(&self) -> &AudioAsset {
        &self.asset
    }

    pub fn sprites(&self) -> &SpriteMap {
        &self.sprites
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether `note` falls inside the loaded range.
    pub fn contains(&self, note: &Note) -> bool {
        self.sprites.contains(&note.to_key())
    }
}

impl<B: AudioBackend> NotePlayer for FontNotePlayer<B> {
    /// Notes outside the loaded range are skipped without error.
    fn play_note(&self, chroma: Chroma, octave: i32) {
        let key = Note::new(chroma, octave).to_key();
        match self.sprites.get(&key) {
            Some(sprite) => {
                trace!("Playing {} from '{}'", key, self.asset.name());
                self.backend.play_clip(&self.asset, &key, sprite);
            }
            None => trace!("{} is outside '{}'; skipping", key, self.asset.name()),
        }
    }
}
