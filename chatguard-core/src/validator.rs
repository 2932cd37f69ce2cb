//! The message validator and sanitizer.
//!
//! [`MessageValidator::validate`] runs the structural checks on the raw
//! message, shields URLs, then evaluates the content rules in order and
//! returns the first rejection. [`MessageValidator::sanitize`] repairs a
//! message instead of refusing it.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde_json::Value;

use crate::config::{GuardConfig, Limits};
use crate::errors::{ChatguardError, RejectReason, ValidationError};
use crate::messages::{self, Locale};
use crate::rule::ContentRule;
use crate::rules::repetition::collapse_repeats;
use crate::rules::{CharRepeatRule, CharsetRule, DiacriticRule, WordRepeatRule};
use crate::url_shield;

/// Validates and sanitizes chat messages against a fixed set of limits.
///
/// Holds only compiled patterns, so one instance can be shared freely
/// between threads.
#[derive(Debug)]
pub struct MessageValidator {
    limits: Limits,
    locale: Locale,
    rules: Vec<Box<dyn ContentRule>>,
    charset: CharsetRule,
}

impl MessageValidator {
    /// A validator with the default limits and the English catalog.
    pub fn new() -> Result<Self, ChatguardError> {
        Self::with_limits(Limits::default(), Locale::default())
    }

    pub fn from_config(config: &GuardConfig) -> Result<Self, ChatguardError> {
        Self::with_limits(Limits::default(), config.locale)
    }

    pub fn with_limits(limits: Limits, locale: Locale) -> Result<Self, ChatguardError> {
        limits.validate()?;
        let charset = CharsetRule::new()?;

        // Evaluation order of the content checks.
        let rules: Vec<Box<dyn ContentRule>> = vec![
            Box::new(CharRepeatRule { max_repeats: limits.max_char_repeats }),
            Box::new(WordRepeatRule { max_repeats: limits.max_word_repeats }),
            Box::new(DiacriticRule::new(limits.diacritic_run)?),
            Box::new(charset.clone()),
        ];
        debug!(
            "Built message validator with {} content rules ({:?}, locale {}).",
            rules.len(),
            limits,
            locale
        );

        Ok(Self {
            limits,
            locale,
            rules,
            charset,
        })
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Names of the content rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    fn reject(&self, reason: RejectReason) -> ValidationError {
        ValidationError::new(reason, messages::render(reason, self.locale, &self.limits))
    }

    /// Checks `message` and returns the first rule it breaks.
    pub fn validate(&self, message: &str) -> Result<(), ValidationError> {
        if message.is_empty() {
            debug!("Rejected message: empty input.");
            return Err(self.reject(RejectReason::InvalidInput));
        }

        let length = message.chars().count();
        if length > self.limits.max_length {
            debug!(
                "Rejected message: {} characters exceeds {}.",
                length, self.limits.max_length
            );
            return Err(self.reject(RejectReason::TooLong));
        }

        if message.trim().is_empty() {
            debug!("Rejected message: whitespace only.");
            return Err(self.reject(RejectReason::EmptyAfterTrim));
        }

        let shielded = url_shield::extract(message);
        for rule in &self.rules {
            if rule.violates(&shielded.processed) {
                debug!("Rejected message: rule '{}' violated.", rule.name());
                return Err(self.reject(rule.reason()));
            }
        }

        debug!("Accepted message of {} characters.", length);
        Ok(())
    }

    /// Like [`validate`](Self::validate) for an untyped payload field.
    ///
    /// Anything other than a JSON string, including `null`, is
    /// [`RejectReason::InvalidInput`].
    pub fn validate_value(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::String(message) => self.validate(message),
            other => {
                debug!("Rejected message: expected a string, got {}.", json_kind(other));
                Err(self.reject(RejectReason::InvalidInput))
            }
        }
    }

    pub fn is_valid(&self, message: &str) -> bool {
        self.validate(message).is_ok()
    }

    pub fn is_valid_value(&self, value: &Value) -> bool {
        self.validate_value(value).is_ok()
    }

    /// Produces a cleaned copy of `message`. Never fails.
    ///
    /// The message is truncated to the maximum length, disallowed characters
    /// are stripped outside of URLs, long character runs are shortened, and
    /// the result is trimmed. Word repetition and diacritic density are not
    /// repaired, so the output is not guaranteed to pass
    /// [`validate`](Self::validate).
    pub fn sanitize(&self, message: &str) -> String {
        if message.is_empty() {
            return String::new();
        }

        let truncated = match message.char_indices().nth(self.limits.max_length) {
            Some((cut, _)) => {
                debug!("Truncating message to {} characters.", self.limits.max_length);
                &message[..cut]
            }
            None => message,
        };

        let shielded = url_shield::extract(truncated);
        let stripped = self.charset.strip(&shielded.processed);
        let collapsed = collapse_repeats(&stripped, self.limits.max_char_repeats);
        let restored = url_shield::restore(&collapsed, &shielded.urls);

        restored.trim().to_string()
    }

    /// Like [`sanitize`](Self::sanitize); non-string values become `""`.
    pub fn sanitize_value(&self, value: &Value) -> String {
        match value {
            Value::String(message) => self.sanitize(message),
            _ => String::new(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> MessageValidator {
        MessageValidator::new().unwrap()
    }

    fn reason_of(v: &MessageValidator, message: &str) -> Option<RejectReason> {
        v.validate(message).err().map(|e| e.reason())
    }

    #[test]
    fn plain_text_is_accepted() {
        let v = validator();
        assert!(v.validate("Hello there, how are you today?").is_ok());
        assert!(v.validate("Chào bạn, hôm nay thế nào?").is_ok());
    }

    #[test]
    fn structural_checks_run_in_order() {
        let v = validator();
        assert_eq!(reason_of(&v, ""), Some(RejectReason::InvalidInput));
        assert_eq!(reason_of(&v, "   "), Some(RejectReason::EmptyAfterTrim));
        // Too long wins over whitespace-only.
        assert_eq!(reason_of(&v, &" ".repeat(1001)), Some(RejectReason::TooLong));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let v = validator();
        let at_limit: String = "ab".repeat(500);
        assert_eq!(at_limit.chars().count(), 1000);
        assert!(v.validate(&at_limit).is_ok());

        let over: String = format!("{}c", at_limit);
        assert_eq!(reason_of(&v, &over), Some(RejectReason::TooLong));

        // 1000 two-byte characters are still 1000 characters.
        let accented: String = "éa".repeat(500);
        assert!(accented.len() > 1000);
        assert!(v.validate(&accented).is_ok());
    }

    #[test]
    fn content_checks_run_in_order() {
        let v = validator();
        // Repeated characters are reported before the invalid `+`.
        assert_eq!(reason_of(&v, "aaaaaa +"), Some(RejectReason::ExcessiveCharRepeats));
        // Repeated words before the invalid `+`.
        assert_eq!(reason_of(&v, "go go go go +"), Some(RejectReason::ExcessiveWordRepeats));
        // Alternating marks, so the character-run rule stays quiet.
        let zalgo = format!("a{} +", "\u{0301}\u{0300}".repeat(5));
        assert_eq!(reason_of(&v, &zalgo), Some(RejectReason::ExcessiveDiacritics));
        assert_eq!(reason_of(&v, "1 + 1"), Some(RejectReason::InvalidCharacters));
    }

    #[test]
    fn urls_are_exempt_from_content_rules() {
        let v = validator();
        assert!(v.validate("check https://example.com now").is_ok());
        assert!(v.validate("https://example.com/?q=a+b&x=$1").is_ok());
        assert!(v.validate("see https://wwwwwwww.example.com/000000").is_ok());
    }

    #[test]
    fn byte_order_mark_after_url_is_rejected() {
        let v = validator();
        assert_eq!(
            reason_of(&v, "see https://x.com\u{FEFF}"),
            Some(RejectReason::InvalidCharacters)
        );
        assert!(v.validate("https://x.com\u{0085}y").is_ok());
    }

    #[test]
    fn url_text_still_counts_toward_length() {
        let v = validator();
        let message = format!("https://example.com/{}", "a".repeat(1000));
        assert_eq!(reason_of(&v, &message), Some(RejectReason::TooLong));
    }

    #[test]
    fn rejection_carries_localized_text_and_status() {
        let v = MessageValidator::with_limits(Limits::default(), Locale::Vi).unwrap();
        let err = v.validate("aaaaaa").unwrap_err();
        assert_eq!(err.message(), "Tin nhắn chứa quá nhiều ký tự lặp lại");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn custom_limits_are_honored() {
        let limits = Limits::default().with_max_char_repeats(2).with_max_word_repeats(1);
        let v = MessageValidator::with_limits(limits, Locale::En).unwrap();
        assert_eq!(reason_of(&v, "aaa"), Some(RejectReason::ExcessiveCharRepeats));
        assert_eq!(reason_of(&v, "hi hi"), Some(RejectReason::ExcessiveWordRepeats));
        assert_eq!(v.sanitize("aaaaaa"), "aa");
    }

    #[test]
    fn invalid_limits_fail_construction() {
        let limits = Limits::default().with_max_length(0);
        assert!(MessageValidator::with_limits(limits, Locale::En).is_err());
    }

    #[test]
    fn rule_order_is_fixed() {
        assert_eq!(
            validator().rule_names(),
            vec!["char_repeats", "word_repeats", "diacritics", "charset"]
        );
    }

    #[test]
    fn non_string_values_are_invalid_input() {
        let v = validator();
        for value in [json!(null), json!(42), json!(true), json!(["hi"]), json!({"text": "hi"})] {
            let err = v.validate_value(&value).unwrap_err();
            assert_eq!(err.reason(), RejectReason::InvalidInput);
            assert!(!v.is_valid_value(&value));
            assert_eq!(v.sanitize_value(&value), "");
        }
        assert!(v.is_valid_value(&json!("hello")));
    }

    #[test]
    fn sanitize_collapses_runs() {
        assert_eq!(validator().sanitize("aaaaaaaaaa"), "aaaaa");
    }

    #[test]
    fn sanitize_keeps_urls_and_trims() {
        let v = validator();
        assert_eq!(v.sanitize(" hello!! https://x.com "), "hello!! https://x.com");
        assert_eq!(
            v.sanitize("price: $5 + tax https://shop.example/?a=1+2"),
            "price: 5  tax https://shop.example/?a=1+2"
        );
    }

    #[test]
    fn sanitize_strips_controls() {
        let v = validator();
        assert_eq!(v.sanitize("line one\nline two\t!"), "line oneline two!");
        assert_eq!(v.sanitize("\u{202E}evil\u{200B}"), "evil");
    }

    #[test]
    fn sanitize_truncates_before_cleaning() {
        let v = validator();
        let message = format!("{}{}", "ab".repeat(500), "tail");
        let cleaned = v.sanitize(&message);
        assert_eq!(cleaned.chars().count(), 1000);
        assert!(!cleaned.ends_with("tail"));
    }

    #[test]
    fn sanitize_keeps_a_url_cut_by_truncation() {
        let v = validator();
        let prefix = "ab".repeat(490);
        let message = format!("{} https://x.io/a+b+c+d+e+f+g+h", prefix);
        let cleaned = v.sanitize(&message);
        assert_eq!(cleaned, format!("{} https://x.io/a+b+c+", prefix));
        assert_eq!(cleaned.chars().count(), 1000);
    }

    #[test]
    fn sanitize_strips_before_collapsing() {
        let v = validator();
        // Removing `+` joins the two runs into one, which is then shortened.
        assert_eq!(v.sanitize("aaa+aaa"), "aaaaa");
        assert_eq!(v.sanitize("!!!\u{0}!!!"), "!!!!!");
    }

    #[test]
    fn sanitize_does_not_split_url_at_next_line() {
        assert_eq!(validator().sanitize("https://x.com\u{0085}y"), "https://x.com\u{0085}y");
    }

    #[test]
    fn sanitize_of_empty_or_blank() {
        let v = validator();
        assert_eq!(v.sanitize(""), "");
        assert_eq!(v.sanitize("   "), "");
        assert_eq!(v.sanitize("\n\t"), "");
    }

    #[test]
    fn sanitize_does_not_fix_repeated_words() {
        let v = validator();
        let cleaned = v.sanitize("spam spam spam spam");
        assert_eq!(cleaned, "spam spam spam spam");
        assert!(!v.is_valid(&cleaned));
    }
}
