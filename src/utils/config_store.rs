//! ConfigStore - Local Configuration Storage
//!
//! Reads and writes [`AppConfig`] as TOML or JSON, picked by file extension.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use snafu::ResultExt;

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::{Error, IoSnafu, Result};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/hover-button/` or `$XDG_CONFIG_HOME/hover-button/`
/// - **macOS**: `~/Library/Application Support/dev.hover-button.hover-button/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\hover-button\hover-button\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "hover-button", "hover-button") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir).context(IoSnafu { path: config_dir })?;
    }

    Ok(config_dir.to_path_buf())
}

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load and validate a config file; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let format = format_of(path)?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    let config: AppConfig = match format {
        Format::Toml => toml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    };
    config.validate()?;
    Ok(config)
}

/// Save a config file in the format its extension names
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    config.validate()?;
    let content = match format_of(path)? {
        Format::Toml => toml::to_string_pretty(config)?,
        Format::Json => serde_json::to_string_pretty(config)?,
    };
    fs::write(path, content).context(IoSnafu { path })?;
    Ok(())
}

/// Load the config from `path` (or the default location), falling back to
/// defaults when anything goes wrong
pub fn load_or_default(path: Option<&Path>) -> AppConfig {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("No config directory, using defaults: {err}");
                return AppConfig::default();
            }
        },
    };

    match load_config(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            tracing::warn!("Failed to load {}, using defaults: {err}", path.display());
            AppConfig::default()
        }
    }
}
