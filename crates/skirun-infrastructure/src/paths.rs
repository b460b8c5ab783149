//! Default locations for skirun configuration and data files.
//!
//! Paths are resolved via the `dirs` crate so they follow platform conventions.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/skirun/            # Config directory
//! └── config.toml              # Store configuration
//!
//! ~/.local/share/skirun/       # Data directory
//! └── ski_runs.xml             # Default ski run collection
//! ```

use skirun_core::SkiRunError;
use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for SkiRunError {
    fn from(err: PathError) -> Self {
        SkiRunError::config(err.to_string())
    }
}

/// Path management for skirun.
pub struct SkiRunPaths;

impl SkiRunPaths {
    const APP_DIR: &'static str = "skirun";
    const CONFIG_FILENAME: &'static str = "config.toml";
    const DATA_FILENAME: &'static str = "ski_runs.xml";

    /// Returns the skirun configuration directory (e.g., `~/.config/skirun/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the skirun data directory (e.g., `~/.local/share/skirun/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::DataDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILENAME))
    }

    /// Returns the data file used when no configuration names one.
    pub fn default_data_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join(Self::DATA_FILENAME))
    }
}
