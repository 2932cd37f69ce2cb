//! Configuration management for `chatguard-core`.
//!
//! The numeric bounds of the validator are compile-time constants grouped
//! into [`Limits`]; they are injected into a validator in code and are never
//! read from a file. The file-backed [`GuardConfig`] only carries
//! presentation settings such as the message catalog.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ChatguardError;
use crate::messages::Locale;

/// Maximum message length, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Identical characters allowed in a row; one more is rejected.
pub const MAX_CHAR_REPEATS: usize = 5;

/// Identical consecutive words allowed; one more is rejected.
pub const MAX_WORD_REPEATS: usize = 3;

/// Length of a combining-mark run that is rejected.
pub const DIACRITIC_RUN_THRESHOLD: usize = 10;

/// The bounds a [`MessageValidator`](crate::MessageValidator) enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limits {
    /// Maximum message length in characters.
    pub max_length: usize,
    /// A run of `max_char_repeats + 1` identical characters is rejected.
    pub max_char_repeats: usize,
    /// `max_word_repeats + 1` identical consecutive words are rejected.
    pub max_word_repeats: usize,
    /// A run of this many combining marks is rejected.
    pub diacritic_run: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: MAX_MESSAGE_LENGTH,
            max_char_repeats: MAX_CHAR_REPEATS,
            max_word_repeats: MAX_WORD_REPEATS,
            diacritic_run: DIACRITIC_RUN_THRESHOLD,
        }
    }
}

impl Limits {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_max_char_repeats(mut self, max_char_repeats: usize) -> Self {
        self.max_char_repeats = max_char_repeats;
        self
    }

    pub fn with_max_word_repeats(mut self, max_word_repeats: usize) -> Self {
        self.max_word_repeats = max_word_repeats;
        self
    }

    pub fn with_diacritic_run(mut self, diacritic_run: usize) -> Self {
        self.diacritic_run = diacritic_run;
        self
    }

    /// Rejects bounds that would make every message fail.
    pub fn validate(&self) -> Result<(), ChatguardError> {
        let mut errors = Vec::new();
        if self.max_length == 0 {
            errors.push("max_length must be greater than 0");
        }
        if self.max_char_repeats == 0 {
            errors.push("max_char_repeats must be greater than 0");
        }
        if self.max_word_repeats == 0 {
            errors.push("max_word_repeats must be greater than 0");
        }
        if self.diacritic_run < 2 {
            errors.push("diacritic_run must be at least 2");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ChatguardError::InvalidLimits(errors.join(", ")))
        }
    }
}

/// File-backed settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Catalog used for rejection messages.
    pub locale: Locale,
}

impl GuardConfig {
    /// Loads settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChatguardError> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChatguardError::ConfigRead(path.display().to_string(), e))?;
        let config = Self::from_yaml(&text, &path.display().to_string())?;
        info!("Loaded configuration from {} (locale: {}).", path.display(), config.locale);
        Ok(config)
    }

    /// Parses the configuration embedded in the library.
    pub fn load_default() -> Result<Self, ChatguardError> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default.yaml");
        Self::from_yaml(default_yaml, "<embedded default>")
    }

    fn from_yaml(text: &str, origin: &str) -> Result<Self, ChatguardError> {
        // An empty document deserializes to unit, not to a struct.
        if text.trim().is_empty() {
            debug!("Configuration '{}' is empty, using defaults.", origin);
            return Ok(Self::default());
        }
        serde_yml::from_str(text).map_err(|e| ChatguardError::ConfigParse(origin.to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_the_constants() {
        let limits = Limits::default();
        assert_eq!(limits.max_length, 1000);
        assert_eq!(limits.max_char_repeats, 5);
        assert_eq!(limits.max_word_repeats, 3);
        assert_eq!(limits.diacritic_run, 10);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn zero_limits_are_rejected() {
        let limits = Limits::default().with_max_length(0).with_max_char_repeats(0);
        let err = limits.validate().unwrap_err();
        let text = err.to_string();
        assert!(text.contains("max_length"));
        assert!(text.contains("max_char_repeats"));
    }

    #[test]
    fn embedded_default_parses() {
        let config = GuardConfig::load_default().unwrap();
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn empty_document_is_default() {
        let config = GuardConfig::from_yaml("  \n", "test").unwrap();
        assert_eq!(config, GuardConfig::default());
    }
}
