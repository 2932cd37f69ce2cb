//! errors.rs - Error types for the chatguard-core library.
//!
//! Two families live here. [`ValidationError`] is a rejected message: the
//! input was looked at and refused, and the text is meant to be shown to the
//! person who typed it. [`ChatguardError`] covers everything else the library
//! can fail at, such as reading or parsing a configuration file.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// HTTP-style status attached to every rejection ("bad request").
pub const BAD_REQUEST: u16 = 400;

/// The check that refused a message.
///
/// Variants are listed in the order the validator evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// Missing, empty, or not a string at all.
    InvalidInput,
    /// Longer than the configured maximum.
    TooLong,
    /// Only whitespace.
    EmptyAfterTrim,
    /// A single character repeated too many times in a row.
    ExcessiveCharRepeats,
    /// The same word repeated too many times in a row.
    ExcessiveWordRepeats,
    /// A long stack of combining marks.
    ExcessiveDiacritics,
    /// A character outside the allowed Unicode categories.
    InvalidCharacters,
}

impl RejectReason {
    /// Every reason, in evaluation order.
    pub const ALL: [RejectReason; 7] = [
        RejectReason::InvalidInput,
        RejectReason::TooLong,
        RejectReason::EmptyAfterTrim,
        RejectReason::ExcessiveCharRepeats,
        RejectReason::ExcessiveWordRepeats,
        RejectReason::ExcessiveDiacritics,
        RejectReason::InvalidCharacters,
    ];

    /// Stable machine-readable name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::InvalidInput => "invalid-input",
            RejectReason::TooLong => "too-long",
            RejectReason::EmptyAfterTrim => "empty-after-trim",
            RejectReason::ExcessiveCharRepeats => "excessive-char-repeats",
            RejectReason::ExcessiveWordRepeats => "excessive-word-repeats",
            RejectReason::ExcessiveDiacritics => "excessive-diacritics",
            RejectReason::InvalidCharacters => "invalid-characters",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message was rejected by one of the validation checks.
///
/// The `Display` output is the human-readable message alone, so callers can
/// surface it to the end user unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    reason: RejectReason,
    message: String,
    status_code: u16,
}

impl ValidationError {
    /// Builds a rejection with the default "bad request" status.
    pub fn new(reason: RejectReason, message: impl Into<String>) -> Self {
        Self::with_status(reason, message, BAD_REQUEST)
    }

    pub fn with_status(reason: RejectReason, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            reason,
            message: message.into(),
            status_code,
        }
    }

    pub fn reason(&self) -> RejectReason {
        self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }
}

/// Failures that are not message rejections.
///
/// `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ChatguardError {
    #[error("Failed to read configuration file '{0}': {1}")]
    ConfigRead(String, #[source] std::io::Error),

    #[error("Failed to parse configuration '{0}': {1}")]
    ConfigParse(String, #[source] serde_yml::Error),

    #[error("Failed to compile built-in pattern '{0}': {1}")]
    PatternCompilation(&'static str, #[source] regex::Error),

    #[error("Invalid limits: {0}")]
    InvalidLimits(String),
}
