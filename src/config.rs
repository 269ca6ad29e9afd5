//! Configuration loading
//!
//! Reads `~/.config/work-lookup/config.toml`. A missing file is not an error;
//! an unreadable or invalid file falls back to defaults with a warning that the
//! UI shows in the status line.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

mod types;

pub use types::{
    Config, DEFAULT_ENDPOINT, DEFAULT_READING_TYPES, DEFAULT_TIMEOUT_SECS, FormConfig,
    SearchConfig,
};

const CONFIG_DIR: &str = "work-lookup";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning to surface to the user
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            log::warn!("Could not read config {}: {}", path.display(), e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config not readable, using defaults: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(mut config) => {
            let warning = validate_timeout(&mut config);
            ConfigResult { config, warning }
        }
        Err(e) => {
            log::warn!("Invalid config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config, using defaults: {}", e.message())),
            }
        }
    }
}

/// A zero timeout would fail every search immediately
fn validate_timeout(config: &mut Config) -> Option<String> {
    if config.search.timeout_secs > 0 {
        return None;
    }
    log::warn!("search.timeout_secs is 0, using {}", DEFAULT_TIMEOUT_SECS);
    config.search.timeout_secs = DEFAULT_TIMEOUT_SECS;
    Some(format!(
        "search.timeout_secs must be at least 1, using {}",
        DEFAULT_TIMEOUT_SECS
    ))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
