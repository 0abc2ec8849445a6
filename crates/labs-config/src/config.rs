//! Configuration types and loading.
//!
//! The main entry point is [`LabsConfig`], which represents the contents of
//! `.labs/config.yaml`. Configuration is loaded with [`load_config`] (from a
//! `.labs/` directory) or [`load_config_file`] (from an explicit path). The
//! CLI only ever reads it.

use labs_core::Inputs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name of the config inside the `.labs/` directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full labs configuration.
///
/// Every field has a serde default, so a partial file only overrides what it
/// names:
///
/// ```yaml
/// json: true
/// inputs:
///   time:
///     secs: 7200
///   kepler:
///     period: 4.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LabsConfig {
    /// Output JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Exercise inputs; anything left out keeps the coursework literal.
    #[serde(default)]
    pub inputs: Inputs,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `config.yaml` inside the given `.labs/` directory.
///
/// If the file does not exist, a default [`LabsConfig`] is returned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(labs_dir: &Path) -> Result<LabsConfig> {
    let config_path = labs_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(LabsConfig::default());
    }

    read_config(&config_path)
}

/// Load configuration from an explicit file path.
///
/// Unlike [`load_config`], a missing file is an error.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if `path` does not exist, plus the
/// errors of [`load_config`].
pub fn load_config_file(path: &Path) -> Result<LabsConfig> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    read_config(path)
}

fn read_config(path: &Path) -> Result<LabsConfig> {
    let content = std::fs::read_to_string(path)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(LabsConfig::default());
    }

    let config: LabsConfig = serde_yaml::from_str(&content)?;
    debug!(path = %path.display(), json = config.json, "loaded config");
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
