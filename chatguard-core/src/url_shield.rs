//! Temporary placeholder substitution for URLs.
//!
//! Content rules would otherwise trip over URL syntax (`:`, `/`, `?`, long
//! runs of `w` or `0`). [`extract`] swaps every URL for a positional
//! `[URL_i]` token and [`restore`] puts them back.
//!
//! Known limitation: if the surrounding text already contains a literal
//! `[URL_<n>]`, [`restore`] substitutes the first occurrence it finds, which
//! may be that literal rather than the token inserted by [`extract`].
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// `http://` or `https://` (any case), optionally preceded by `@`, up to the
/// next whitespace.
///
/// The terminating set is spelled out instead of using `\S`: it is tab, the
/// line terminators, vertical tab, form feed, the space separators and
/// U+FEFF. U+0085 does not end a URL; U+FEFF does.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)@?https?://[^\t\n\x0B\x0C\r\p{Zs}\x{2028}\x{2029}\x{FEFF}]+")
        .expect("URL pattern is a valid regex")
});

/// Text with its URLs swapped out for placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShieldedText {
    /// The input with each URL replaced by `[URL_i]`.
    pub processed: String,
    /// Extracted URLs; `urls[i]` belongs to placeholder `[URL_i]`.
    pub urls: Vec<String>,
}

impl ShieldedText {
    /// Puts the URLs back into `processed`.
    pub fn restore(&self) -> String {
        restore(&self.processed, &self.urls)
    }

    pub fn has_urls(&self) -> bool {
        !self.urls.is_empty()
    }
}

/// The token that stands in for URL number `index`.
pub fn placeholder(index: usize) -> String {
    format!("[URL_{}]", index)
}

/// Replaces every URL in `message`, left to right, with `[URL_0]`,
/// `[URL_1]`, ...
pub fn extract(message: &str) -> ShieldedText {
    let mut urls = Vec::new();
    let mut processed = String::with_capacity(message.len());
    let mut last_end = 0usize;

    for m in URL_REGEX.find_iter(message) {
        processed.push_str(&message[last_end..m.start()]);
        processed.push_str(&placeholder(urls.len()));
        urls.push(m.as_str().to_string());
        last_end = m.end();
    }
    processed.push_str(&message[last_end..]);

    if !urls.is_empty() {
        log::debug!("Shielded {} URL(s) from content checks.", urls.len());
    }

    ShieldedText { processed, urls }
}

/// Replaces the first occurrence of each `[URL_i]`, for `i` ascending, with
/// `urls[i]`. Placeholders that are missing from `processed` are skipped.
pub fn restore(processed: &str, urls: &[String]) -> String {
    let mut restored = processed.to_string();
    for (i, url) in urls.iter().enumerate() {
        let token = placeholder(i);
        if restored.contains(&token) {
            restored = restored.replacen(&token, url, 1);
        } else {
            log::warn!("Placeholder {} not found while restoring URLs.", token);
        }
    }
    restored
}
