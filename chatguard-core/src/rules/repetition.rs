//! Character-run and word-run checks.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::RejectReason;
use crate::rule::ContentRule;

/// Characters that neither start nor extend a run.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` if some character appears more than `max_repeats` times in
/// a row, i.e. a run of at least `max_repeats + 1`.
pub fn has_excessive_repeats(text: &str, max_repeats: usize) -> bool {
    let mut previous: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if is_line_terminator(c) {
            previous = None;
            run = 0;
            continue;
        }
        if previous == Some(c) {
            run += 1;
            if run > max_repeats {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

/// Shortens every run longer than `max_repeats` to exactly `max_repeats`
/// copies of its character.
pub fn collapse_repeats(text: &str, max_repeats: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if is_line_terminator(c) {
            previous = None;
            run = 0;
            out.push(c);
            continue;
        }
        if previous == Some(c) {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run <= max_repeats {
            out.push(c);
        }
    }
    out
}

/// Returns `true` if the same whitespace-delimited token (compared
/// case-insensitively) occurs more than `max_repeats` times in a row.
pub fn has_repeated_words(text: &str, max_repeats: usize) -> bool {
    let mut current = String::new();
    let mut run = 0usize;

    for word in text.split_whitespace().map(str::to_lowercase) {
        if run > 0 && word == current {
            run += 1;
            if run > max_repeats {
                return true;
            }
        } else {
            current = word;
            run = 1;
        }
    }
    false
}

/// Rejects long runs of one character.
#[derive(Debug, Clone)]
pub struct CharRepeatRule {
    pub max_repeats: usize,
}

impl ContentRule for CharRepeatRule {
    fn name(&self) -> &'static str {
        "char_repeats"
    }

    fn reason(&self) -> RejectReason {
        RejectReason::ExcessiveCharRepeats
    }

    fn violates(&self, text: &str) -> bool {
        has_excessive_repeats(text, self.max_repeats)
    }
}

/// Rejects the same word typed over and over.
#[derive(Debug, Clone)]
pub struct WordRepeatRule {
    pub max_repeats: usize,
}

impl ContentRule for WordRepeatRule {
    fn name(&self) -> &'static str {
        "word_repeats"
    }

    fn reason(&self) -> RejectReason {
        RejectReason::ExcessiveWordRepeats
    }

    fn violates(&self, text: &str) -> bool {
        has_repeated_words(text, self.max_repeats)
    }
}
