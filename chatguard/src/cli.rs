// chatguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the chatguard
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use chatguard_core::Locale;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "chatguard",
    author = "Chatguard Contributors",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check and clean chat messages before they are sent",
    long_about = "chatguard applies deterministic, rule-based checks to chat messages: length, whitespace-only input, repeated characters and words, stacked diacritics, and characters outside the allowed Unicode categories. URLs are exempt from content checks. Messages can be validated, checked for a yes/no answer, or sanitized into an acceptable form.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration file.
    #[arg(long = "config", value_name = "FILE", env = "CHATGUARD_CONFIG", global = true, help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// Catalog for rejection messages, overriding the configuration file.
    #[arg(long = "locale", value_name = "LOCALE", env = "CHATGUARD_LOCALE", global = true, help = "Language of rejection messages ('en' or 'vi').")]
    pub locale: Option<Locale>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `chatguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates messages and reports the first rule each one breaks.
    #[command(about = "Validate messages; exits with status 1 if any message is rejected.")]
    Validate(ValidateCommand),

    /// Prints `true` or `false` for each message.
    #[command(about = "Print true or false for each message.")]
    Check(CheckCommand),

    /// Repairs messages instead of rejecting them.
    #[command(about = "Print a cleaned version of each message.")]
    Sanitize(SanitizeCommand),
}

/// Where messages come from. Shared by every command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// A single message given on the command line.
    #[arg(long, short = 'm', value_name = "TEXT", conflicts_with = "input_file", help = "Use TEXT as the message instead of reading input.")]
    pub message: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Treat every input line as a separate message.
    #[arg(long = "line-buffered", help = "Treat every input line as a separate message.")]
    pub line_buffered: bool,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit one JSON object per message.
    #[arg(long = "json", help = "Print one JSON object per message instead of text.")]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}
