//! `validate` and `check` command implementations.

use anyhow::{Context, Result};
use chatguard_core::{MessageValidator, RejectReason, ValidationError};
use is_terminal::IsTerminal;
use log::{debug, info};
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::{CheckCommand, ValidateCommand};
use crate::commands::input::read_messages;
use crate::ui::output_format::paint;
use crate::ui::theme::ThemeEntry;

/// The outcome for one message, as printed by `validate --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub accepted: bool,
    pub reason: Option<RejectReason>,
    pub message: Option<String>,
    pub status_code: Option<u16>,
}

impl From<Result<(), ValidationError>> for Verdict {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Verdict {
                accepted: true,
                reason: None,
                message: None,
                status_code: None,
            },
            Err(e) => Verdict {
                accepted: false,
                reason: Some(e.reason()),
                message: Some(e.message().to_string()),
                status_code: Some(e.status_code()),
            },
        }
    }
}

impl Verdict {
    fn text_line(&self, supports_color: bool) -> String {
        match (self.reason, &self.message) {
            (Some(reason), Some(message)) => format!(
                "{} {}: {}",
                paint("rejected", ThemeEntry::Error, supports_color),
                paint(&format!("[{}]", reason), ThemeEntry::Reason, supports_color),
                message
            ),
            _ => paint("accepted", ThemeEntry::Success, supports_color),
        }
    }
}

/// Writes one verdict per message and returns how many were rejected.
///
/// `numbered` prefixes text lines with the 1-based message number.
pub fn write_verdicts<W: Write>(
    writer: &mut W,
    validator: &MessageValidator,
    messages: &[String],
    json: bool,
    numbered: bool,
    supports_color: bool,
) -> Result<usize> {
    let mut rejected = 0usize;

    for (index, message) in messages.iter().enumerate() {
        let verdict = Verdict::from(validator.validate(message));
        if !verdict.accepted {
            rejected += 1;
        }

        if json {
            let line = serde_json::to_string(&verdict).context("Failed to serialize verdict")?;
            writeln!(writer, "{}", line)?;
        } else if numbered {
            writeln!(writer, "{}: {}", index + 1, verdict.text_line(supports_color))?;
        } else {
            writeln!(writer, "{}", verdict.text_line(supports_color))?;
        }
    }

    Ok(rejected)
}

/// Runs `validate`. Returns `true` when every message was accepted.
pub fn run_validate(validator: &MessageValidator, cmd: &ValidateCommand) -> Result<bool> {
    info!("Starting validate operation.");
    let messages = read_messages(&cmd.input)?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    let rejected = write_verdicts(
        &mut writer,
        validator,
        &messages,
        cmd.json,
        cmd.input.line_buffered,
        supports_color,
    )?;
    writer.flush()?;

    debug!("{} of {} message(s) rejected.", rejected, messages.len());
    info!("Validate operation completed.");
    Ok(rejected == 0)
}

/// Writes `true` or `false` per message.
pub fn write_checks<W: Write>(
    writer: &mut W,
    validator: &MessageValidator,
    messages: &[String],
) -> Result<()> {
    for message in messages {
        writeln!(writer, "{}", validator.is_valid(message))?;
    }
    Ok(())
}

pub fn run_check(validator: &MessageValidator, cmd: &CheckCommand) -> Result<()> {
    info!("Starting check operation.");
    let messages = read_messages(&cmd.input)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_checks(&mut writer, validator, &messages)?;
    writer.flush()?;

    info!("Check operation completed.");
    Ok(())
}
