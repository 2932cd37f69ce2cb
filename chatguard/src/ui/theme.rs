//! Colour palette for status output.
//!
//! Each logical kind of output line maps to one 16-colour ANSI foreground.

use owo_colors::AnsiColors;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// An accepted message.
    Success,
    /// General informational messages.
    Info,
    /// A rejected message or a fatal error.
    Error,
    /// The machine-readable rejection reason.
    Reason,
}

impl ThemeEntry {
    pub fn color(&self) -> AnsiColors {
        match self {
            ThemeEntry::Success => AnsiColors::Green,
            ThemeEntry::Info => AnsiColors::Cyan,
            ThemeEntry::Error => AnsiColors::Red,
            ThemeEntry::Reason => AnsiColors::BrightBlack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_red() {
        assert_eq!(ThemeEntry::Error.color(), AnsiColors::Red);
        assert_eq!(ThemeEntry::Success.color(), AnsiColors::Green);
    }
}
