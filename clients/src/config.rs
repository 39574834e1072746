//! Reader configuration.
//!
//! Loaded from a TOML file; every field is optional:
//!
//! ```toml
//! alphabet = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 ."
//! seed = 42
//! log_level = "debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use babel_core::{Alphabet, AlphabetError, DEFAULT_ALPHABET};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a [`ReaderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configured letters do not form an alphabet.
    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
}

/// Settings for one reader session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// 64 distinct glyphs, indexed by 6-bit value.
    pub alphabet: String,
    /// Fixed seed for a reproducible grid; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl ReaderConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validates the configured letters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Alphabet`] unless the letters are 64 distinct
    /// characters.
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        Ok(Alphabet::new(&self.alphabet)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ReaderConfig::from_toml_str("").unwrap();
        assert_eq!(config, ReaderConfig::default());
        assert_eq!(config.alphabet().unwrap(), Alphabet::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ReaderConfig::from_toml_str("seed = 42\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.alphabet, DEFAULT_ALPHABET);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ReaderConfig::from_toml_str("colour = \"red\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_short_alphabet_rejected() {
        let config = ReaderConfig::from_toml_str("alphabet = \"abc\"\n").unwrap();
        let err = config.alphabet().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Alphabet(AlphabetError::InvalidLength { .. })
        ));
        assert!(err.to_string().starts_with("invalid alphabet"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = ReaderConfig::load(Path::new("/nonexistent/babel.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/babel.toml"));
    }
}
