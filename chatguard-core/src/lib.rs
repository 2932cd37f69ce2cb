// chatguard-core/src/lib.rs
//! # Chatguard Core Library
//!
//! `chatguard-core` decides whether a chat message typed by a user is fit to
//! send, and can repair one that is not. All checks are deterministic and
//! rule based; the library knows nothing about sockets, UI, or storage.
//!
//! ## Modules
//!
//! * `url_shield`: swaps URLs for `[URL_i]` placeholders and back.
//! * `rule`: the `ContentRule` trait evaluated over shielded text.
//! * `rules`: repetition, diacritic-density and character-class rules.
//! * `validator`: `MessageValidator`, the ordered pipeline and the sanitizer.
//! * `headless`: free functions backed by a shared default validator.
//! * `config`: `Limits` constants and the YAML-backed `GuardConfig`.
//! * `messages`: English and Vietnamese rejection texts.
//! * `errors`: `ValidationError`, `RejectReason` and `ChatguardError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use chatguard_core::{is_valid_message, sanitize_message, validate_message, RejectReason};
//!
//! assert!(validate_message("check https://example.com now").is_ok());
//!
//! let err = validate_message("go go go go").unwrap_err();
//! assert_eq!(err.reason(), RejectReason::ExcessiveWordRepeats);
//! assert_eq!(err.status_code(), 400);
//!
//! assert!(!is_valid_message("   "));
//! assert_eq!(sanitize_message("nooooooooo!"), "nooooo!");
//! ```
//!
//! ## Check order
//!
//! Empty input, length, whitespace-only, then (on URL-shielded text)
//! character runs, word runs, diacritic runs, and character classes. The
//! first failing check is reported.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod headless;
pub mod messages;
pub mod rule;
pub mod rules;
pub mod url_shield;
pub mod validator;

/// Re-exports the limits and the configuration file type.
pub use config::{
    GuardConfig,
    Limits,
    DIACRITIC_RUN_THRESHOLD,
    MAX_CHAR_REPEATS,
    MAX_MESSAGE_LENGTH,
    MAX_WORD_REPEATS,
};

/// Re-exports the error types.
pub use errors::{ChatguardError, RejectReason, ValidationError, BAD_REQUEST};

pub use messages::Locale;
pub use rule::ContentRule;
pub use url_shield::{extract, restore, ShieldedText};
pub use validator::MessageValidator;

/// Re-exports the one-shot helpers.
pub use headless::{
    default_validator,
    is_valid_message,
    is_valid_message_value,
    sanitize_message,
    sanitize_message_value,
    validate_message,
    validate_message_value,
};
