//! `sanitize` command implementation.

use anyhow::{Context, Result};
use chatguard_core::MessageValidator;
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use crate::cli::SanitizeCommand;
use crate::commands::input::read_messages;
use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Sanitizes each message and writes one result per line.
pub fn write_sanitized<W: Write>(
    writer: &mut W,
    validator: &MessageValidator,
    messages: &[String],
) -> Result<()> {
    for message in messages {
        let sanitized = validator.sanitize(message);
        debug!(
            "Message sanitized. Original length: {}, sanitized length: {}",
            message.chars().count(),
            sanitized.chars().count()
        );
        writeln!(writer, "{}", sanitized)?;
    }
    Ok(())
}

pub fn run_sanitize(validator: &MessageValidator, cmd: &SanitizeCommand, quiet: bool) -> Result<()> {
    info!("Starting sanitize operation.");
    let messages = read_messages(&cmd.input)?;

    if let Some(path) = &cmd.output {
        if !quiet {
            info_msg(format!("Writing sanitized content to file: {}", path.display()));
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        write_sanitized(&mut file, validator, &messages)?;
    } else {
        debug!("Writing sanitized content to stdout.");
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_sanitized(&mut writer, validator, &messages)?;
        writer.flush()?;
    }

    info!("Sanitize operation completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_message() -> Result<()> {
        let validator = MessageValidator::new()?;
        let messages = vec![
            "wowwwwwwww".to_string(),
            "x = y https://a.example/?x=y".to_string(),
            "".to_string(),
        ];
        let mut out = Vec::new();
        write_sanitized(&mut out, &validator, &messages)?;
        assert_eq!(
            String::from_utf8(out)?,
            "wowwwww\nx  y https://a.example/?x=y\n\n"
        );
        Ok(())
    }
}
