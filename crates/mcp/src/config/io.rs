//! Loading probe settings from disk.

use crate::config::{ProbeSettings, ValidationError, validate_settings};
use dirs_next::config_dir;
use inspector_util::expand_tilde;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "MCP_INSPECTOR_SETTINGS_PATH";

/// Error surfaced when reading probe settings fails.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Returns the default path for the probe settings file.
pub fn default_settings_path() -> PathBuf {
    if let Ok(path) = env::var(SETTINGS_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mcp-inspector")
        .join("settings.json")
}

/// Loads probe settings from the default path.
pub fn load_settings() -> Result<ProbeSettings, SettingsError> {
    let path = default_settings_path();
    load_settings_from_path(&path)
}

/// Loads probe settings from a specific path.
///
/// A missing file yields the defaults. An unreadable, malformed or invalid
/// file is an error.
pub fn load_settings_from_path(path: &Path) -> Result<ProbeSettings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No settings file; using defaults");
            return Ok(ProbeSettings::default());
        }
        Err(error) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source: error,
            });
        }
    };

    let settings: ProbeSettings = serde_json::from_str(&content).map_err(|error| SettingsError::Parse {
        path: path.to_path_buf(),
        source: error,
    })?;
    validate_settings(&settings)?;
    debug!(path = %path.display(), "Loaded probe settings");
    Ok(settings)
}
