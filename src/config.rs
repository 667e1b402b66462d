//! Runner configuration
//!
//! Read from `archcheck.toml`:
//!
//! ```toml
//! [runner]
//! fail_fast = false
//!
//! [output]
//! mode = "human"   # or "json"
//! color = true
//! ```
//!
//! Every key is optional; a missing file means defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::OutputMode;

/// Default configuration filename
pub const CONFIG_FILE: &str = "archcheck.toml";

/// Errors loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file is not valid configuration
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Evaluation settings
    #[serde(default)]
    pub runner: RunnerSettings,
    /// Reporting settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Evaluation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerSettings {
    /// Stop after the first failed execution
    #[serde(default)]
    pub fail_fast: bool,
}

/// Reporting settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Human or JSON output
    #[serde(default)]
    pub mode: OutputMode,
    /// Colorize human output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            color: default_color(),
        }
    }
}

impl RunnerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `archcheck.toml` from `dir`
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&dir.join(CONFIG_FILE))
    }
}

/// Initialize `env_logger`, honoring `RUST_LOG`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    if env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init()
        .is_err()
    {
        log::trace!("Logger already initialized");
    }
}
