//! # Session Configuration
//!
//! A session file describes one instrument and one note sequence in YAML.
//!
//! ## Format
//! ```yaml
//! instrument:
//!   asset: assets/sfx/fonts/piano.wav   # or: font + manifest
//!   clip-length-ms: 1500
//!   start: C3
//!   end: B6
//! sequence:
//!   kind: pattern            # pattern | scale | random
//!   policy: alternating      # ascending | descending | alternating
//!   notes: [C5, D5, E5, G5]
//! launches: 16
//! ```
//!
//! Instead of `asset`, an instrument may name a `font` listed in a
//! `manifest` (`sfx.json`). Relative paths resolve against the directory the
//! session file lives in.
//!
//! ## Sequence Kinds
//! - `pattern` - `notes` (required), `policy`
//! - `scale` - `root` (required), `scale` (default major), `count`
//!   (default one octave including the top note), `policy`
//! - `random` - optional `chromas`, `octaves`, `seed`
//!
//! Deserialization goes through `Raw*` structs so that every field can be
//! checked with a message naming it, then converted into typed values.

use crate::error::{NoteFontError, Result};
use crate::manifest::AssetManifest;
use crate::note::{parse_sequence, Chroma, Note};
use crate::player::{AudioBackend, FontNotePlayer, NotePlayer};
use crate::scale::Scale;
use crate::sequence::{
    AnySequence, IterativeNoteSequence, RandomNoteSequence, TraversalPolicy, DEFAULT_CHROMAS,
    DEFAULT_OCTAVES,
};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LAUNCHES: usize = 8;

/// Longest clip a font may map per note (ten minutes).
pub const MAX_CLIP_LENGTH_MS: u64 = 600_000;

/// Most degrees a scale sequence may walk.
pub const MAX_SCALE_COUNT: usize = 1024;

/// Raw session for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawSession {
    pub instrument: Option<RawInstrument>,
    pub sequence: Option<RawSequence>,
    pub launches: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawInstrument {
    pub asset: Option<String>,
    pub font: Option<String>,
    pub manifest: Option<String>,
    pub clip_length_ms: Option<u64>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawSequence {
    pub kind: Option<String>,
    pub policy: Option<String>,
    pub notes: Option<Vec<String>>,
    pub root: Option<String>,
    pub scale: Option<String>,
    pub count: Option<usize>,
    pub chromas: Option<Vec<String>>,
    pub octaves: Option<Vec<i32>>,
    pub seed: Option<u64>,
}

/// Where an instrument's audio comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetSource {
    Path(PathBuf),
    Font { name: String, manifest: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentConfig {
    pub source: AssetSource,
    pub clip_length_ms: u64,
    pub start: Note,
    pub end: Note,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SequenceConfig {
    Pattern {
        notes: Vec<Note>,
        policy: TraversalPolicy,
    },
    Scale {
        scale: Scale,
        root: Note,
        count: usize,
        policy: TraversalPolicy,
    },
    Random {
        chromas: Vec<Chroma>,
        octaves: Vec<i32>,
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub instrument: InstrumentConfig,
    pub sequence: SequenceConfig,
    pub launches: usize,
    /// Directory relative asset and manifest paths resolve against.
    pub base_dir: PathBuf,
}

fn config_err(message: impl Into<String>) -> NoteFontError {
    NoteFontError::ConfigError(message.into())
}

fn required_note(value: &Option<String>, field: &str) -> Result<Note> {
    let token = value
        .as_deref()
        .ok_or_else(|| config_err(format!("{} is required", field)))?;
    Note::parse(token)
}

impl SessionConfig {
    /// Parse a session from YAML; relative paths resolve against the
    /// current directory.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_yaml_in(yaml, Path::new("."))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .map_err(|e| NoteFontError::load(path.display().to_string(), e))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_yaml_in(&yaml, base_dir)
    }

    fn from_yaml_in(yaml: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawSession =
            serde_yaml::from_str(yaml).map_err(|e| config_err(e.to_string()))?;

        let instrument = raw
            .instrument
            .as_ref()
            .ok_or_else(|| config_err("instrument section is required"))
            .and_then(InstrumentConfig::from_raw)?;
        let sequence = raw
            .sequence
            .as_ref()
            .ok_or_else(|| config_err("sequence section is required"))
            .and_then(SequenceConfig::from_raw)?;

        Ok(SessionConfig {
            instrument,
            sequence,
            launches: raw.launches.unwrap_or(DEFAULT_LAUNCHES),
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// Resolve the instrument asset path, consulting the manifest if needed.
    pub fn asset_path(&self) -> Result<PathBuf> {
        match &self.instrument.source {
            AssetSource::Path(path) => Ok(self.base_dir.join(path)),
            AssetSource::Font { name, manifest } => {
                let manifest = AssetManifest::load(self.base_dir.join(manifest))?;
                let entry = manifest
                    .find(name)
                    .ok_or_else(|| config_err(format!("font '{}' is not in the manifest", name)))?;
                Ok(self.base_dir.join(&entry.path))
            }
        }
    }

    /// Decode the instrument and build its player.
    pub fn load_player<B: AudioBackend>(&self, backend: B) -> Result<FontNotePlayer<B>> {
        let path = self.asset_path()?;
        debug!("Loading instrument from {}", path.display());
        FontNotePlayer::load(
            path,
            self.instrument.clip_length_ms,
            self.instrument.start,
            self.instrument.end,
            backend,
        )
    }
}

impl InstrumentConfig {
    fn from_raw(raw: &RawInstrument) -> Result<Self> {
        let source = match (&raw.asset, &raw.font) {
            (Some(asset), None) => AssetSource::Path(PathBuf::from(asset)),
            (None, Some(font)) => {
                let manifest = raw
                    .manifest
                    .as_ref()
                    .ok_or_else(|| config_err("instrument.manifest is required with font"))?;
                AssetSource::Font {
                    name: font.clone(),
                    manifest: PathBuf::from(manifest),
                }
            }
            (Some(_), Some(_)) => {
                return Err(config_err("instrument takes either asset or font, not both"))
            }
            (None, None) => return Err(config_err("instrument.asset or instrument.font is required")),
        };

        let clip_length_ms = raw
            .clip_length_ms
            .ok_or_else(|| config_err("instrument.clip-length-ms is required"))?;
        if clip_length_ms == 0 {
            return Err(config_err("instrument.clip-length-ms must be positive"));
        }
        if clip_length_ms > MAX_CLIP_LENGTH_MS {
            return Err(config_err(format!(
                "instrument.clip-length-ms must be at most {}",
                MAX_CLIP_LENGTH_MS
            )));
        }

        let start = required_note(&raw.start, "instrument.start")?;
        let end = required_note(&raw.end, "instrument.end")?;
        if start > end {
            return Err(config_err(format!(
                "instrument range {}..={} is reversed",
                start, end
            )));
        }

        Ok(InstrumentConfig {
            source,
            clip_length_ms,
            start,
            end,
        })
    }
}

impl SequenceConfig {
    fn from_raw(raw: &RawSequence) -> Result<Self> {
        let policy = match &raw.policy {
            Some(policy) => policy.parse()?,
            None => TraversalPolicy::default(),
        };

        let kind = raw.kind.as_deref().unwrap_or("pattern");
        match kind.trim().to_ascii_lowercase().as_str() {
            "pattern" => {
                let tokens = raw
                    .notes
                    .as_ref()
                    .ok_or_else(|| config_err("sequence.notes is required for a pattern"))?;
                Ok(SequenceConfig::Pattern {
                    notes: parse_sequence(tokens)?,
                    policy,
                })
            }
            "scale" => {
                let scale = match &raw.scale {
                    Some(name) => name.parse()?,
                    None => Scale::default(),
                };
                let count = raw.count.unwrap_or(scale.intervals().len() + 1);
                if count > MAX_SCALE_COUNT {
                    return Err(config_err(format!(
                        "sequence.count must be at most {}",
                        MAX_SCALE_COUNT
                    )));
                }
                Ok(SequenceConfig::Scale {
                    scale,
                    root: required_note(&raw.root, "sequence.root")?,
                    count,
                    policy,
                })
            }
            "random" => {
                let chromas = match &raw.chromas {
                    Some(names) => names
                        .iter()
                        .map(|name| Chroma::from_name(name))
                        .collect::<Result<Vec<_>>>()?,
                    None => DEFAULT_CHROMAS.to_vec(),
                };
                let octaves = raw
                    .octaves
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OCTAVES.to_vec());
                if chromas.is_empty() || octaves.is_empty() {
                    return Err(config_err(
                        "sequence.chromas and sequence.octaves must not be empty",
                    ));
                }
                Ok(SequenceConfig::Random {
                    chromas,
                    octaves,
                    seed: raw.seed,
                })
            }
            other => Err(config_err(format!("Unknown sequence kind: {}", other))),
        }
    }

    /// Build the configured sequence on top of `player`.
    pub fn build<'a, P: NotePlayer + ?Sized>(
        &self,
        player: &'a P,
    ) -> Result<AnySequence<'a, P, StdRng>> {
        let sequence = match self {
            SequenceConfig::Pattern { notes, policy } => {
                IterativeNoteSequence::from_pattern(player, notes.clone(), *policy).into()
            }
            SequenceConfig::Scale {
                scale,
                root,
                count,
                policy,
            } => IterativeNoteSequence::from_scale(player, *scale, *root, *count, *policy).into(),
            SequenceConfig::Random {
                chromas,
                octaves,
                seed,
            } => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                RandomNoteSequence::with_rng(player, rng)
                    .with_choices(chromas.clone(), octaves.clone())?
                    .into()
            }
        };
        Ok(sequence)
    }
}
