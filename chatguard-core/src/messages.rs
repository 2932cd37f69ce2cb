//! User-facing rejection texts.
//!
//! Two fixed catalogs ship with the library. The Vietnamese one is the
//! wording used by the chat client this library was written for; English is
//! the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::Limits;
use crate::errors::RejectReason;

/// Catalog selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "vi" | "vietnamese" => Ok(Locale::Vi),
            other => Err(format!("unknown locale '{}', expected 'en' or 'vi'", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Vi => f.write_str("vi"),
        }
    }
}

/// Renders the message for `reason` in `locale`.
///
/// `limits` is consulted for texts that quote a bound, currently only
/// [`RejectReason::TooLong`].
pub fn render(reason: RejectReason, locale: Locale, limits: &Limits) -> String {
    match locale {
        Locale::En => english(reason, limits),
        Locale::Vi => vietnamese(reason, limits),
    }
}

fn english(reason: RejectReason, limits: &Limits) -> String {
    match reason {
        RejectReason::InvalidInput => "Message content is invalid".to_string(),
        RejectReason::TooLong => format!(
            "Message must not exceed {} characters",
            limits.max_length
        ),
        RejectReason::EmptyAfterTrim => "Message must not be empty".to_string(),
        RejectReason::ExcessiveCharRepeats => {
            "Message contains too many repeated characters".to_string()
        }
        RejectReason::ExcessiveWordRepeats => {
            "Message contains too many consecutive repeated words".to_string()
        }
        RejectReason::ExcessiveDiacritics => "Message contains too many diacritics".to_string(),
        RejectReason::InvalidCharacters => "Message contains invalid characters".to_string(),
    }
}

fn vietnamese(reason: RejectReason, limits: &Limits) -> String {
    match reason {
        RejectReason::InvalidInput => "Nội dung tin nhắn không hợp lệ".to_string(),
        RejectReason::TooLong => format!(
            "Tin nhắn không được vượt quá {} ký tự",
            limits.max_length
        ),
        RejectReason::EmptyAfterTrim => "Tin nhắn không được để trống".to_string(),
        RejectReason::ExcessiveCharRepeats => "Tin nhắn chứa quá nhiều ký tự lặp lại".to_string(),
        RejectReason::ExcessiveWordRepeats => {
            "Tin nhắn chứa quá nhiều từ lặp lại liên tiếp".to_string()
        }
        RejectReason::ExcessiveDiacritics => "Tin nhắn chứa quá nhiều dấu".to_string(),
        RejectReason::InvalidCharacters => "Tin nhắn chứa ký tự không hợp lệ".to_string(),
    }
}
