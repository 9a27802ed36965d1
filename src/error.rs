//! # Error Types
//!
//! This module defines all error types for the notefont crate.
//!
//! ## Error Types
//! - `ParseError` - Malformed note token (bad chroma or octave)
//! - `UnknownChroma` - A pitch-class name outside the 12 canonical names
//! - `LoadError` - Instrument asset could not be opened or decoded
//! - `ConfigError` - Invalid session file or asset manifest
//!
//! Playback itself never fails: notes outside a player's range are skipped
//! silently, so none of these errors can surface from `play_note`.
//!
//! ## Usage
//! ```rust
//! use notefont::{Note, NoteFontError};
//!
//! match Note::parse("H2") {
//!     Ok(note) => println!("parsed {}", note),
//!     Err(NoteFontError::ParseError { token, message }) => {
//!         eprintln!("bad token '{}': {}", token, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteFontError {
    /// Malformed note token.
    ///
    /// # Example
    /// ```
    /// # use notefont::NoteFontError;
    /// let err = NoteFontError::ParseError {
    ///     token: "C-1".to_string(),
    ///     message: "octave must be a nonnegative integer".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Parse error in note 'C-1': octave must be a nonnegative integer"
    /// );
    /// ```
    #[error("Parse error in note '{token}': {message}")]
    ParseError { token: String, message: String },

    /// Pitch-class name that is not one of `C Db D Eb E F Gb G Ab A Bb B`.
    #[error("Unknown chroma: {0}")]
    UnknownChroma(String),

    /// Instrument asset missing or undecodable.
    #[error("Failed to load '{path}': {message}")]
    LoadError { path: String, message: String },

    /// Invalid session configuration or asset manifest.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, NoteFontError>;

impl NoteFontError {
    pub(crate) fn parse(token: &str, message: impl Into<String>) -> Self {
        NoteFontError::ParseError {
            token: token.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn load(path: impl Into<String>, message: impl ToString) -> Self {
        NoteFontError::LoadError {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
