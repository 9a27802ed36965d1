//! Asset manifests.
//!
//! An external build step scans the asset folders and writes `sfx.json` and
//! `gfx.json`, each a JSON array of `{ "name", "path" }` entries where
//! `name` is the file stem. This module only reads them.

use crate::error::{NoteFontError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest {
    entries: Vec<AssetEntry>,
}

impl AssetManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| NoteFontError::ConfigError(format!("Invalid asset manifest: {}", e)))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| NoteFontError::load(path.display().to_string(), e))?;
        Self::from_json(&json)
    }

    /// First entry called `name`.
    pub fn find(&self, name: &str) -> Option<&AssetEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SFX: &str = r#"[
  {
    "path": "./assets/sfx/fonts/piano.wav",
    "name": "piano"
  },
  {
    "path": "./assets/sfx/fonts/marimba.wav",
    "name": "marimba"
  }
]"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = AssetManifest::from_json(SFX).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.names().collect::<Vec<_>>(), vec!["piano", "marimba"]);
        assert_eq!(
            manifest.find("marimba").map(|e| e.path.as_str()),
            Some("./assets/sfx/fonts/marimba.wav")
        );
        assert!(manifest.find("tuba").is_none());

        let paths: Vec<&str> = manifest.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[1], "./assets/sfx/fonts/marimba.wav");
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = AssetManifest::from_json("[]").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_malformed_manifest() {
        let err = AssetManifest::from_json(r#"[{"name": "piano"}]"#).unwrap_err();
        assert!(matches!(err, NoteFontError::ConfigError(_)));
        assert!(AssetManifest::from_json("{").is_err());
    }

    #[test]
    fn test_missing_manifest_file() {
        let err = AssetManifest::load("/no/such/sfx.json").unwrap_err();
        assert!(matches!(err, NoteFontError::LoadError { .. }));
    }
}
