//! Unicode general-category allow-list.
//!
//! Allowed: Letter (L), Number (N), Punctuation (P), Space separator (Zs),
//! Other symbol (So), Nonspacing mark (Mn) and Spacing combining mark (Mc).
//! Everything else, notably control characters, line and paragraph
//! separators, format characters and math/currency/modifier symbols, is
//! refused.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use regex::Regex;

use crate::errors::{ChatguardError, RejectReason};
use crate::rule::ContentRule;

/// Body of the bracket expression for the allowed categories.
pub const ALLOWED_CATEGORIES: &str = r"\p{L}\p{N}\p{P}\p{Zs}\p{So}\p{Mn}\p{Mc}";

#[derive(Debug, Clone)]
pub struct CharsetRule {
    disallowed: Regex,
}

impl CharsetRule {
    pub fn new() -> Result<Self, ChatguardError> {
        let pattern = format!("[^{}]", ALLOWED_CATEGORIES);
        let disallowed = Regex::new(&pattern)
            .map_err(|e| ChatguardError::PatternCompilation("allowed_categories", e))?;
        Ok(Self { disallowed })
    }

    /// Removes every character outside the allowed categories.
    pub fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.disallowed.replace_all(text, "")
    }
}

impl ContentRule for CharsetRule {
    fn name(&self) -> &'static str {
        "charset"
    }

    fn reason(&self) -> RejectReason {
        RejectReason::InvalidCharacters
    }

    fn violates(&self, text: &str) -> bool {
        text.is_empty() || self.disallowed.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> CharsetRule {
        CharsetRule::new().unwrap()
    }

    #[test]
    fn letters_numbers_punctuation_pass() {
        let rule = rule();
        assert!(!rule.violates("Hello, world! 123 (ok?) «quoted» — yes"));
        assert!(!rule.violates("Xin chào 你好 مرحبا हिन्दी"));
        assert!(!rule.violates("nice 👍 ❤ ©"));
    }

    #[test]
    fn no_break_space_is_a_space_separator() {
        assert!(!rule().violates("a\u{00A0}b\u{3000}c"));
    }

    #[test]
    fn control_and_format_characters_fail() {
        let rule = rule();
        assert!(rule.violates("line\nbreak"));
        assert!(rule.violates("tab\there"));
        assert!(rule.violates("zero\u{200B}width"));
        assert!(rule.violates("bidi\u{202E}override"));
        assert!(rule.violates("nul\u{0}"));
    }

    #[test]
    fn math_currency_and_modifier_symbols_fail() {
        let rule = rule();
        assert!(rule.violates("1 + 1"));
        assert!(rule.violates("costs $5"));
        assert!(rule.violates("a < b"));
        assert!(rule.violates("caret ^"));
    }

    #[test]
    fn placeholders_are_allowed() {
        assert!(!rule().violates("see [URL_0] and [URL_12]"));
    }

    #[test]
    fn empty_text_violates() {
        assert!(rule().violates(""));
    }

    #[test]
    fn strip_removes_only_disallowed() {
        let rule = rule();
        assert_eq!(rule.strip("a+b=c\n"), "abc");
        assert_eq!(rule.strip("fine as is."), "fine as is.");
    }
}
