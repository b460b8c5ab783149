//! Configuration service implementation.
//!
//! Loads the root configuration from `~/.config/skirun/config.toml` and resolves
//! the [`StoreConfig`] handed to a store.

use crate::paths::SkiRunPaths;
use skirun_core::SkiRunError;
use skirun_core::config::{RootConfig, StoreConfig};
use skirun_core::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Configuration service bound to one config file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
    /// Overrides [`SkiRunPaths::default_data_file`] when set.
    default_data_file: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a service reading the default config path.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(SkiRunPaths::config_file()?))
    }

    /// Creates a service reading a custom config path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            default_data_file: None,
        }
    }

    pub fn with_default_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.default_data_file = Some(data_file.into());
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads `RootConfig` from the config file.
    ///
    /// A missing or blank file yields the default configuration. A file that exists
    /// but cannot be read or parsed is an error.
    pub fn load(&self) -> Result<RootConfig> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "Config file {:?} not found, using defaults",
                    self.config_path
                );
                return Ok(RootConfig::default());
            }
            Err(e) => {
                return Err(SkiRunError::config(format!(
                    "Failed to read config file at {:?}: {}",
                    self.config_path, e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        toml::from_str(&content).map_err(|e| {
            SkiRunError::config(format!(
                "Failed to parse TOML from {:?}: {}",
                self.config_path, e
            ))
        })
    }

    /// Resolves the data file path.
    ///
    /// Precedence: `data_file_override`, then `[store].data_file` from the config file,
    /// then the default data file. A relative `data_file` in the config file is taken
    /// relative to the directory containing the config file.
    pub fn resolve_store_config(&self, data_file_override: Option<PathBuf>) -> Result<StoreConfig> {
        if let Some(data_file) = data_file_override {
            return Ok(StoreConfig::new(data_file));
        }

        if let Some(data_file) = self.load()?.store.data_file {
            let data_file = match self.config_path.parent() {
                Some(base) if data_file.is_relative() => base.join(data_file),
                _ => data_file,
            };
            return Ok(StoreConfig::new(data_file));
        }

        let data_file = match &self.default_data_file {
            Some(path) => path.clone(),
            None => SkiRunPaths::default_data_file()?,
        };
        Ok(StoreConfig::new(data_file))
    }
}
