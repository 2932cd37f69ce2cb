// chatguard/src/utils/config_paths.rs
//! Locating and loading the configuration file.

use anyhow::{Context, Result};
use chatguard_core::GuardConfig;
use log::debug;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Places searched, in order, when no `--config` is given.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".chatguard")),
        dirs::config_dir().map(|p| p.join("chatguard")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .collect()
}

/// Loads `explicit` if given, else the first existing candidate, else the
/// embedded default.
pub fn load_config(explicit: Option<&Path>) -> Result<GuardConfig> {
    if let Some(path) = explicit {
        return GuardConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration '{}'", path.display()));
    }

    match config_candidate_paths().into_iter().find(|p| p.is_file()) {
        Some(path) => GuardConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load configuration '{}'", path.display())),
        None => {
            debug!("No configuration file found, using the embedded default.");
            GuardConfig::load_default().context("Failed to load the default configuration")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatguard_core::Locale;
    use std::fs;

    #[test]
    fn candidates_end_in_the_file_name() {
        for path in config_candidate_paths() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }

    #[test]
    fn explicit_path_is_used() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "locale: vi\n")?;
        let config = load_config(Some(&path))?;
        assert_eq!(config.locale, Locale::Vi);
        Ok(())
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/no/such/chatguard.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
