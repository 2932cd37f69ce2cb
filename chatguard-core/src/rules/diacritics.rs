//! Stacked combining-mark ("zalgo") detection.
//!
//! Ordinary accented text uses one or two combining marks per base letter.
//! Visual spam stacks dozens.
//!
//! License: MIT OR APACHE 2.0

use regex::Regex;

use crate::errors::{ChatguardError, RejectReason};
use crate::rule::ContentRule;

/// Combining Diacritical Marks, Cyrillic combining marks, and the Extended,
/// Supplement, for-Symbols and Half Marks blocks.
pub const COMBINING_MARK_CLASS: &str = r"[\x{0300}-\x{036F}\x{0483}-\x{0489}\x{1AB0}-\x{1AFF}\x{1DC0}-\x{1DFF}\x{20D0}-\x{20FF}\x{FE20}-\x{FE2F}]";

#[derive(Debug, Clone)]
pub struct DiacriticRule {
    run: Regex,
}

impl DiacriticRule {
    /// Builds a rule that rejects `threshold` or more combining marks in a row.
    pub fn new(threshold: usize) -> Result<Self, ChatguardError> {
        let pattern = format!("{}{{{},}}", COMBINING_MARK_CLASS, threshold);
        let run = Regex::new(&pattern)
            .map_err(|e| ChatguardError::PatternCompilation("diacritic_run", e))?;
        Ok(Self { run })
    }
}

impl ContentRule for DiacriticRule {
    fn name(&self) -> &'static str {
        "diacritics"
    }

    fn reason(&self) -> RejectReason {
        RejectReason::ExcessiveDiacritics
    }

    fn violates(&self, text: &str) -> bool {
        self.run.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zalgo(marks: usize) -> String {
        let mut s = String::from("a");
        s.extend(std::iter::repeat('\u{0301}').take(marks));
        s
    }

    #[test]
    fn ten_marks_trip_the_rule() {
        let rule = DiacriticRule::new(10).unwrap();
        assert!(rule.violates(&zalgo(10)));
        assert!(!rule.violates(&zalgo(9)));
    }

    #[test]
    fn mixed_blocks_form_one_run() {
        let rule = DiacriticRule::new(10).unwrap();
        let text = "x\u{0300}\u{0483}\u{1AB0}\u{1DC0}\u{20D0}\u{FE20}\u{036F}\u{0489}\u{1AFF}\u{FE2F}";
        assert!(rule.violates(text));
    }

    #[test]
    fn precomposed_accents_are_fine() {
        let rule = DiacriticRule::new(10).unwrap();
        assert!(!rule.violates("Tiếng Việt có dấu, très bien, ñandú"));
    }

    #[test]
    fn interrupted_runs_do_not_add_up() {
        let rule = DiacriticRule::new(10).unwrap();
        let text = format!("{}{}", zalgo(6), zalgo(6));
        assert!(!rule.violates(&text));
    }
}
