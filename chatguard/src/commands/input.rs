//! Turning command-line input into a list of messages.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};

use crate::cli::InputArgs;

/// Reads the raw input named by `args`: the `--message` text, the file, or
/// all of stdin.
pub fn read_raw_input(args: &InputArgs) -> Result<String> {
    if let Some(message) = &args.message {
        debug!("Using message from the command line.");
        return Ok(message.clone());
    }

    if let Some(path) = &args.input_file {
        info!("Reading input from file: {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    info!("Reading input from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

/// Splits raw input into messages.
///
/// With `line_buffered` every line (without its `\n` or `\r\n`) is a
/// message. Otherwise the whole input is one message, minus a single
/// trailing line ending so that `echo text | chatguard ...` sees `text`.
pub fn split_messages(raw: &str, line_buffered: bool) -> Vec<String> {
    if line_buffered {
        return raw.lines().map(str::to_string).collect();
    }

    let trimmed = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(raw);
    vec![trimmed.to_string()]
}

pub fn read_messages(args: &InputArgs) -> Result<Vec<String>> {
    let raw = read_raw_input(args)?;
    let messages = split_messages(&raw, args.line_buffered);
    debug!("Read {} message(s).", messages.len());
    Ok(messages)
}
