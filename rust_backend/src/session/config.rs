//! Engine configuration file support.
//!
//! This module provides utilities for reading engine configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::SessionError;
use crate::engine::{FilterPolicy, NullDatePolicy, WindowMode};
use crate::parsing::Delimiter;

/// Engine configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

/// Filter behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSettings {
    #[serde(default)]
    pub window_mode: WindowMode,
    #[serde(default)]
    pub include_null_dates: bool,
}

/// Export settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default)]
    pub delimiter: Delimiter,
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err(SessionError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SessionError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SessionError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            SessionError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `gantt.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if found and parsed successfully
    /// * `Err(SessionError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, SessionError> {
        let search_paths = vec![
            PathBuf::from("gantt.toml"),
            PathBuf::from("rust_backend/gantt.toml"),
            PathBuf::from("../gantt.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(SessionError::Configuration(
            "No gantt.toml found in standard locations".to_string(),
        ))
    }

    /// Get the filter policy described by this configuration.
    pub fn filter_policy(&self) -> FilterPolicy {
        let null_dates = if self.filter.include_null_dates {
            NullDatePolicy::Include
        } else {
            NullDatePolicy::Exclude
        };

        FilterPolicy {
            window_mode: self.filter.window_mode,
            null_dates,
        }
    }

    /// Get the export delimiter described by this configuration.
    pub fn export_delimiter(&self) -> Delimiter {
        self.export.delimiter
    }
}
