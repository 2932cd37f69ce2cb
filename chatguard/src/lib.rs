// chatguard/src/lib.rs
//! # Chatguard CLI Application
//!
//! Command-line front end for `chatguard-core`. The binary in `main.rs` only
//! parses arguments and dispatches; everything it calls lives here so the
//! integration tests can reach it.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

use anyhow::{Context, Result};
use chatguard_core::MessageValidator;
use log::{debug, info};
use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::utils::config_paths::load_config;

/// Runs a parsed command line and returns the process exit code.
pub fn run(cli: Cli) -> Result<ExitCode> {
    info!("chatguard started. Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        debug!("Locale overridden on the command line: {}", locale);
        config.locale = locale;
    }

    let validator = MessageValidator::from_config(&config)
        .context("Failed to build the message validator")?;

    match &cli.command {
        Commands::Validate(cmd) => {
            let all_accepted = commands::validate::run_validate(&validator, cmd)?;
            Ok(if all_accepted { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
        Commands::Check(cmd) => {
            commands::validate::run_check(&validator, cmd)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Sanitize(cmd) => {
            commands::sanitize::run_sanitize(&validator, cmd, cli.quiet)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
