// File: chatguard-core/src/headless.rs

//! `headless.rs`
//! One-shot helpers backed by a shared default validator (default limits,
//! English messages). Build a [`MessageValidator`] yourself for another
//! locale or custom limits.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::errors::ValidationError;
use crate::validator::MessageValidator;

static DEFAULT_VALIDATOR: Lazy<MessageValidator> = Lazy::new(|| {
    MessageValidator::new().expect("built-in patterns and default limits are valid")
});

/// The shared validator used by the free functions in this module.
pub fn default_validator() -> &'static MessageValidator {
    &DEFAULT_VALIDATOR
}

pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate(message)
}

pub fn validate_message_value(value: &Value) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_value(value)
}

pub fn is_valid_message(message: &str) -> bool {
    DEFAULT_VALIDATOR.is_valid(message)
}

pub fn is_valid_message_value(value: &Value) -> bool {
    DEFAULT_VALIDATOR.is_valid_value(value)
}

pub fn sanitize_message(message: &str) -> String {
    DEFAULT_VALIDATOR.sanitize(message)
}

pub fn sanitize_message_value(value: &Value) -> String {
    DEFAULT_VALIDATOR.sanitize_value(value)
}
