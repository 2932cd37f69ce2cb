// chatguard/src/logger.rs
//! Logger setup for the chatguard binary and its tests.
//!
//! Log lines go to stderr so they never mix with command output on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither a flag nor `RUST_LOG` says otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global logger. Safe to call more than once; later calls are
/// ignored.
///
/// `level_override` wins over `RUST_LOG` when given.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);

    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to an override.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
