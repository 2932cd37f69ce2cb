//! Writing styled lines.
//!
//! Colour is applied only when the caller says the target supports it, so
//! redirected output stays plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::ThemeEntry;

/// Returns `text` coloured for `entry`, or unchanged.
pub fn paint(text: &str, entry: ThemeEntry, supports_color: bool) -> String {
    if supports_color {
        text.color(entry.color()).to_string()
    } else {
        text.to_string()
    }
}

pub fn print_styled_line<W: Write>(
    writer: &mut W,
    text: &str,
    entry: ThemeEntry,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(text, entry, supports_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_styled_line(writer, msg, ThemeEntry::Info, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_styled_line(writer, &format!("Error: {}", msg), ThemeEntry::Error, supports_color)
}
