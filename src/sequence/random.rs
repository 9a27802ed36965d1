//! Stateless random note choice.

use super::NoteSequence;
use crate::error::{NoteFontError, Result};
use crate::note::{Chroma, Note};
use crate::player::NotePlayer;
use log::debug;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Chromas drawn from by default: a major pentatonic on C.
pub const DEFAULT_CHROMAS: [Chroma; 5] = [Chroma::C, Chroma::D, Chroma::E, Chroma::G, Chroma::A];

pub const DEFAULT_OCTAVES: [i32; 2] = [4, 5];

/// Picks a chroma and an octave independently and uniformly on every call.
pub struct RandomNoteSequence<'a, P: NotePlayer + ?Sized, R: Rng = ThreadRng> {
    player: &'a P,
    chromas: Vec<Chroma>,
    octaves: Vec<i32>,
    rng: R,
}

impl<'a, P: NotePlayer + ?Sized> RandomNoteSequence<'a, P, ThreadRng> {
    pub fn new(player: &'a P) -> Self {
        Self::with_rng(player, rand::thread_rng())
    }
}

impl<'a, P: NotePlayer + ?Sized, R: Rng> RandomNoteSequence<'a, P, R> {
    pub fn with_rng(player: &'a P, rng: R) -> Self {
        Self {
            player,
            chromas: DEFAULT_CHROMAS.to_vec(),
            octaves: DEFAULT_OCTAVES.to_vec(),
            rng,
        }
    }

    /// Replace the sets notes are drawn from. Both must be non-empty.
    pub fn with_choices(mut self, chromas: Vec<Chroma>, octaves: Vec<i32>) -> Result<Self> {
        if chromas.is_empty() || octaves.is_empty() {
            return Err(NoteFontError::ConfigError(
                "random sequence needs at least one chroma and one octave".to_string(),
            ));
        }
        debug!(
            "Random sequence over {} chromas x {} octaves",
            chromas.len(),
            octaves.len()
        );
        self.chromas = chromas;
        self.octaves = octaves;
        Ok(self)
    }

    pub fn chromas(&self) -> &[Chroma] {
        &self.chromas
    }

    pub fn octaves(&self) -> &[i32] {
        &self.octaves
    }
}

impl<'a, P: NotePlayer + ?Sized, R: Rng> NoteSequence for RandomNoteSequence<'a, P, R> {
    fn next_note(&mut self) -> Option<Note> {
        let chroma = *self.chromas.choose(&mut self.rng)?;
        let octave = *self.octaves.choose(&mut self.rng)?;
        Some(Note::new(chroma, octave))
    }

    fn play_note(&mut self) {
        if let Some(note) = self.next_note() {
            self.player.play(&note);
        }
    }
}
