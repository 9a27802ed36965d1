//! Decoded instrument audio.
//!
//! An instrument font is a single WAV file holding one equal-length clip per
//! semitone. Samples are kept interleaved and normalized to `[-1.0, 1.0]`
//! so a backend can hand a clip straight to its output stream.

use super::sprite::Sprite;
use crate::error::{NoteFontError, Result};
use log::debug;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AudioAsset {
    name: String,
    sample_rate: u32,
    channels: u16,
    samples: Vec<f32>,
}

impl AudioAsset {
    pub fn new(name: impl Into<String>, sample_rate: u32, channels: u16, samples: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            sample_rate,
            channels,
            samples,
        }
    }

    /// Decode a WAV file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let reader = hound::WavReader::open(path).map_err(|e| NoteFontError::load(&display, e))?;
        Self::decode(display, reader)
    }

    /// Decode WAV bytes from any reader; `name` is used in errors and logs.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let reader = hound::WavReader::new(reader).map_err(|e| NoteFontError::load(name, e))?;
        Self::decode(name.to_string(), reader)
    }

    fn decode<R: Read>(name: String, reader: hound::WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Int => {
                let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|s| s as f32 / max_val))
                    .collect::<std::result::Result<Vec<f32>, hound::Error>>()
            }
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<std::result::Result<Vec<f32>, hound::Error>>(),
        }
        .map_err(|e| NoteFontError::load(&name, e))?;

        debug!(
            "Decoded '{}': {} Hz, {} channel(s), {} samples",
            name,
            spec.sample_rate,
            spec.channels,
            samples.len()
        );

        Ok(Self {
            name,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            samples,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of sample frames (one sample per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frames() as u64 * 1000 / self.sample_rate as u64
    }

    fn frame_at(&self, ms: u64) -> usize {
        let frame = ms.saturating_mul(self.sample_rate as u64) / 1000;
        usize::try_from(frame)
            .unwrap_or(usize::MAX)
            .min(self.frames())
    }

    /// Interleaved samples covered by `sprite`, clamped to the asset.
    pub fn clip(&self, sprite: Sprite) -> &[f32] {
        let channels = self.channels.max(1) as usize;
        let start = self.frame_at(sprite.start_ms) * channels;
        let end = self.frame_at(sprite.end_ms()) * channels;
        if start >= end {
            return &[];
        }
        &self.samples[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Note;
    use crate::player::SpriteMap;
    use std::io::Cursor;

    fn wav_bytes(sample_rate: u32, channels: u16, frames: usize) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for i in 0..frames * channels as usize {
                writer.write_sample((i % 100) as i16 * 100).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_decode_int_wav() {
        let bytes = wav_bytes(1000, 2, 500);
        let asset = AudioAsset::from_reader("test", Cursor::new(bytes)).unwrap();
        assert_eq!(asset.sample_rate(), 1000);
        assert_eq!(asset.channels(), 2);
        assert_eq!(asset.frames(), 500);
        assert_eq!(asset.duration_ms(), 500);
        assert!(asset.samples().iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_clip_slices_interleaved_frames() {
        let asset = AudioAsset::new("mono", 1000, 1, (0..1000).map(|i| i as f32).collect());
        let clip = asset.clip(Sprite {
            start_ms: 200,
            length_ms: 100,
        });
        assert_eq!(clip.len(), 100);
        assert_eq!(clip[0], 200.0);

        let stereo = AudioAsset::new("stereo", 1000, 2, vec![0.0; 2000]);
        let clip = stereo.clip(Sprite {
            start_ms: 0,
            length_ms: 10,
        });
        assert_eq!(clip.len(), 20);
    }

    #[test]
    fn test_clip_clamps_past_end() {
        let asset = AudioAsset::new("short", 1000, 1, vec![0.5; 100]);
        let clip = asset.clip(Sprite {
            start_ms: 50,
            length_ms: 500,
        });
        assert_eq!(clip.len(), 50);
        assert!(asset
            .clip(Sprite {
                start_ms: 400,
                length_ms: 100
            })
            .is_empty());
    }

    #[test]
    fn test_clip_with_huge_offsets_clamps() {
        let map = SpriteMap::chromatic(
            Note::parse("C5").unwrap(),
            Note::parse("Db5").unwrap(),
            1_000_000_000_000_000,
        );
        let asset = AudioAsset::new("a", 48000, 1, vec![0.0; 48000]);

        let db5 = map.get("Db5").unwrap();
        assert!(asset.clip(db5).is_empty());
        assert_eq!(asset.clip(map.get("C5").unwrap()).len(), 48000);

        let edge = Sprite {
            start_ms: u64::MAX - 1,
            length_ms: u64::MAX,
        };
        assert_eq!(edge.end_ms(), u64::MAX);
        assert!(asset.clip(edge).is_empty());
    }

    #[test]
    fn test_garbage_is_load_error() {
        let err = AudioAsset::from_reader("junk", Cursor::new(b"not a wav".to_vec())).unwrap_err();
        assert!(matches!(err, NoteFontError::LoadError { path, .. } if path == "junk"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = AudioAsset::open("/definitely/not/here.wav").unwrap_err();
        assert!(matches!(err, NoteFontError::LoadError { .. }));
    }
}
