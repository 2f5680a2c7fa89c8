// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - startup language
//! - `[storage]` - product database file location
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `POLYGLOT_SHELF_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! An unreadable or malformed config file never aborts startup: `load()`
//! returns defaults together with a warning key for the caller to surface.

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Startup language code (e.g. "en", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Path of the SQLite database file holding the product tables.
    /// Defaults to `products.db` inside the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

/// User preferences persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Loads the configuration from the default location.
///
/// Returns the configuration plus an optional warning key when the file
/// exists but could not be used (defaults are applied in that case).
pub fn load() -> (Config, Option<String>) {
    let Some(dir) = paths::get_app_config_dir() else {
        return (Config::default(), None);
    };
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(e) => {
            eprintln!("Warning: could not load {}: {}", path.display(), e);
            (Config::default(), Some("config-load-warning".to_string()))
        }
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    let dir = paths::get_app_config_dir()
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
    fs::create_dir_all(&dir)?;
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Persists the startup language, preserving the other settings.
///
/// Called when the user picks a language so the next run starts in it.
pub fn save_language(code: &str) -> Result<()> {
    let (mut config, _) = load();
    config.general.language = Some(code.to_string());
    save(&config)
}
