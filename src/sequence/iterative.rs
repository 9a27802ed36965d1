//! Cursor-based traversal engine.

use super::{NoteSequence, TraversalPolicy};
use crate::error::Result;
use crate::note::{parse_sequence, Note};
use crate::player::NotePlayer;
use crate::scale::Scale;
use log::{debug, trace};
use std::fmt;

/// Walks `len` generated notes according to a [`TraversalPolicy`].
///
/// The generator is only ever called with indices in `0..len`.
///
/// ## Degenerate lengths
/// - `len == 0`: nothing is generated and `play_note` does nothing
/// - `len == 1`: every policy stays on index 0
pub struct IterativeNoteSequence<'a, P: NotePlayer + ?Sized> {
    player: &'a P,
    generate: Box<dyn Fn(usize) -> Note + 'a>,
    len: usize,
    policy: TraversalPolicy,
    idx: usize,
    direction: isize,
}

/// An [`IterativeNoteSequence`] over a fixed list of notes.
pub type PatternNoteSequence<'a, P> = IterativeNoteSequence<'a, P>;

impl<'a, P: NotePlayer + ?Sized> IterativeNoteSequence<'a, P> {
    pub fn new(
        player: &'a P,
        generate: impl Fn(usize) -> Note + 'a,
        len: usize,
        policy: TraversalPolicy,
    ) -> Self {
        let (idx, direction) = initial_cursor(policy, len);
        debug!("New {} sequence over {} notes", policy, len);
        Self {
            player,
            generate: Box::new(generate),
            len,
            policy,
            idx,
            direction,
        }
    }

    /// Traverse a caller-supplied pattern.
    pub fn from_pattern(player: &'a P, notes: Vec<Note>, policy: TraversalPolicy) -> Self {
        let len = notes.len();
        Self::new(player, move |i| notes[i], len, policy)
    }

    /// Parse `tokens` with [`parse_sequence`] and traverse the result.
    pub fn parse_pattern<S: AsRef<str>>(
        player: &'a P,
        tokens: &[S],
        policy: TraversalPolicy,
    ) -> Result<Self> {
        let notes = parse_sequence(tokens)?;
        Ok(Self::from_pattern(player, notes, policy))
    }

    /// Traverse the first `count` degrees of `scale` from `root`.
    pub fn from_scale(
        player: &'a P,
        scale: Scale,
        root: Note,
        count: usize,
        policy: TraversalPolicy,
    ) -> Self {
        Self::new(player, scale.generator(root), count, policy)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn policy(&self) -> TraversalPolicy {
        self.policy
    }

    /// Index of the note the next call will play.
    pub fn index(&self) -> usize {
        self.idx
    }

    /// +1 while moving up the sequence, -1 while moving down.
    pub fn direction(&self) -> isize {
        self.direction
    }

    pub fn reset(&mut self) {
        let (idx, direction) = initial_cursor(self.policy, self.len);
        self.idx = idx;
        self.direction = direction;
    }

    fn advance(&mut self) {
        if self.len <= 1 {
            self.idx = 0;
            return;
        }

        let n = self.len as isize;
        let mut i = self.idx as isize;
        match self.policy {
            TraversalPolicy::Ascending => i = (i + 1) % n,
            TraversalPolicy::Descending => i = (i - 1 + n) % n,
            TraversalPolicy::Alternating => {
                i += self.direction;
                if i > n - 1 {
                    i = n - 2;
                    self.direction = -1;
                } else if i < 0 {
                    i = 1;
                    self.direction = 1;
                }
                i = (i + n) % n;
            }
        }
        self.idx = i as usize;
    }
}

fn initial_cursor(policy: TraversalPolicy, len: usize) -> (usize, isize) {
    match policy {
        TraversalPolicy::Descending => (len.saturating_sub(1), -1),
        TraversalPolicy::Ascending | TraversalPolicy::Alternating => (0, 1),
    }
}

impl<'a, P: NotePlayer + ?Sized> NoteSequence for IterativeNoteSequence<'a, P> {
    fn next_note(&mut self) -> Option<Note> {
        if self.len == 0 {
            return None;
        }
        let note = (self.generate)(self.idx);
        trace!("Sequence index {} -> {}", self.idx, note);
        self.advance();
        Some(note)
    }

    fn play_note(&mut self) {
        if let Some(note) = self.next_note() {
            self.player.play(&note);
        }
    }
}

impl<'a, P: NotePlayer + ?Sized> fmt::Debug for IterativeNoteSequence<'a, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterativeNoteSequence")
            .field("len", &self.len)
            .field("policy", &self.policy)
            .field("idx", &self.idx)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
