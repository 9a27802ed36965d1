//! Playback backends.
//!
//! The engine that actually renders audio lives outside this crate. A
//! backend receives the decoded asset plus the sprite to play and is
//! expected to return immediately.

use super::asset::AudioAsset;
use super::sprite::Sprite;
use log::info;
use std::cell::RefCell;

pub trait AudioBackend {
    /// Start playing `sprite` from `asset`. Fire-and-forget.
    fn play_clip(&self, asset: &AudioAsset, key: &str, sprite: Sprite);
}

impl<B: AudioBackend + ?Sized> AudioBackend for &B {
    fn play_clip(&self, asset: &AudioAsset, key: &str, sprite: Sprite) {
        (**self).play_clip(asset, key, sprite)
    }
}

/// Discards every clip.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn play_clip(&self, _asset: &AudioAsset, _key: &str, _sprite: Sprite) {}
}

/// Logs each clip at info level instead of sounding it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play_clip(&self, asset: &AudioAsset, key: &str, sprite: Sprite) {
        info!(
            "Playing {} [{}ms +{}ms] from {} ({} samples)",
            key,
            sprite.start_ms,
            sprite.length_ms,
            asset.name(),
            asset.clip(sprite).len()
        );
    }
}

/// Remembers the key of every clip played, in order.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    played: RefCell<Vec<String>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }

    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl AudioBackend for RecordingBackend {
    fn play_clip(&self, _asset: &AudioAsset, key: &str, _sprite: Sprite) {
        self.played.borrow_mut().push(key.to_string());
    }
}
