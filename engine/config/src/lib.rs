#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Locator Configuration
//!
//! This crate provides configuration management for the locator.
//! It handles loading, saving, and managing configuration files that specify:
//! - The baseline resolution context (environment and residency)
//! - How acting URLs are interpreted when no descriptor matches them
//! - Logging configuration
//! - Where the descriptor catalog lives
//!
//! Configuration is stored in TOML format. Every section is optional; missing
//! sections and fields take the defaults the locator has always used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::{ResolutionContext, DEFAULT_ENVIRONMENT, DEFAULT_RESIDENCY};

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Baseline resolution context
    #[serde(default)]
    pub context: ContextConfig,
    /// Acting URL interpretation
    #[serde(default)]
    pub acting: ActingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Descriptor catalog location
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Baseline context, used at construction and restored by `reset`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Environment (e.g. "production", "integration")
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Data residency zone (e.g. "US", "EMEA")
    #[serde(default = "default_residency")]
    pub residency: String,
}

/// How acting URLs that match no descriptor are interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActingConfig {
    /// Stand-in for the current page when the host supplies none
    #[serde(default = "default_fallback_origin")]
    pub fallback_origin: String,
    /// Substring marking an unrecognized URL as integration
    #[serde(default = "default_integration_marker")]
    pub integration_marker: String,
    /// Prefix (after the scheme) marking an unrecognized URL as development
    #[serde(default = "default_development_host")]
    pub development_host: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file path (optional)
    pub file: Option<PathBuf>,
}

/// Descriptor catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON descriptor table; relative paths resolve against the config file
    pub path: Option<PathBuf>,
}

fn default_environment() -> String { DEFAULT_ENVIRONMENT.to_string() }

fn default_residency() -> String { DEFAULT_RESIDENCY.to_string() }

fn default_fallback_origin() -> String { "http://localhost:9999".to_string() }

fn default_integration_marker() -> String { "product.dev.alertlogic.com".to_string() }

fn default_development_host() -> String { "localhost".to_string() }

fn default_level() -> String { "info".to_string() }

impl Default for ContextConfig {
    fn default() -> Self { Self { environment: default_environment(), residency: default_residency() } }
}

impl ContextConfig {
    /// The baseline context described by this section
    pub fn baseline(&self) -> ResolutionContext {
        ResolutionContext::baseline(self.environment.clone(), self.residency.clone())
    }
}

impl Default for ActingConfig {
    fn default() -> Self {
        Self {
            fallback_origin: default_fallback_origin(),
            integration_marker: default_integration_marker(),
            development_host: default_development_host(),
        }
    }
}

impl ActingConfig {
    /// Guess the environment of a URL no descriptor recognizes.
    ///
    /// `url_without_scheme` is the whole URL after `://`, path and query
    /// included; the integration marker may appear anywhere in it.
    pub fn infer_environment(&self, url_without_scheme: &str) -> &'static str {
        if url_without_scheme.starts_with(&self.development_host) {
            "development"
        } else if url_without_scheme.contains(&self.integration_marker) {
            "integration"
        } else {
            DEFAULT_ENVIRONMENT
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: default_level(), file: None } }
}

impl CatalogConfig {
    /// Catalog path resolved against `base_dir` when relative
    pub fn resolve_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|p| if p.is_relative() { base_dir.join(p) } else { p.clone() })
    }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/locus/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("locus");
        Ok(config_dir.join("config.toml"))
    }
}
