//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Environment variables (via the logging module)

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::logging::LogFormat;
use nestcheck_core::RulesConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bounds used by the task rules
    pub rules: RulesConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from_paths(&Self::default_config_paths())
    }

    /// Load the first existing file among `paths`, or defaults when none
    /// exists. A file that exists but does not load is an error; runs
    /// against a broken project config must not fall back to defaults.
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<Self> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::from_file(path).map_err(|e| {
                Error::config(format!("failed to load {}: {}", path.display(), e))
            }),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) if !path.exists() => Err(Error::FileNotFound {
                path: path.to_path_buf(),
            }),
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".nestcheck.yaml"),
            PathBuf::from(".nestcheck.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let nestcheck_dir = config_dir.join("nestcheck");
            paths.push(nestcheck_dir.join("config.yaml"));
            paths.push(nestcheck_dir.join("config.json"));
        }

        paths
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;

        if OutputFormat::from_config_name(&self.output.format).is_none() {
            return Err(Error::config(format!(
                "unknown output format '{}'",
                self.output.format
            )));
        }

        if let Some(format) = self.logging.format.as_deref() {
            if LogFormat::parse(format).is_none() {
                return Err(Error::config(format!("unknown log format '{}'", format)));
            }
        }
        Ok(())
    }

    /// Configured default output format
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_config_name(&self.output.format).unwrap_or(OutputFormat::Human)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}
