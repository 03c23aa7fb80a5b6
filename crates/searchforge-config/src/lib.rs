//! Configuration system for SearchForge.
//!
//! Load engine configuration from TOML or YAML files to control search
//! limits without code changes.
//!
//! # Examples
//!
//! Parse configuration from a TOML string:
//!
//! ```
//! use searchforge_config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     [limits]
//!     node_limit = 100000
//!     depth_limit = 80
//! "#).unwrap();
//!
//! assert_eq!(config.node_limit(), Some(100_000));
//! assert_eq!(config.depth_limit(), Some(80));
//! ```
//!
//! Use default config (no limits) when the file is missing:
//!
//! ```
//! use searchforge_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with unlimited search if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Search limit configuration.
    #[serde(default)]
    pub limits: Option<LimitsConfig>,
}

/// Search limit configuration.
///
/// All limits default to unlimited; the engine runs until explicit
/// exhaustion otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LimitsConfig {
    /// Maximum number of node expansions before the search aborts.
    #[serde(default)]
    pub node_limit: Option<u64>,

    /// Depth at or beyond which nodes are popped but never expanded,
    /// bounding returned paths to at most this many moves.
    #[serde(default)]
    pub depth_limit: Option<usize>,
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, dispatching on the extension
    /// (`.toml`, `.yaml`/`.yml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, has an unrecognized
    /// extension, or contains an invalid document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the node expansion limit.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.limits.get_or_insert_with(LimitsConfig::default).node_limit = Some(limit);
        self
    }

    /// Sets the expansion depth limit.
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.limits.get_or_insert_with(LimitsConfig::default).depth_limit = Some(limit);
        self
    }

    /// Returns the node expansion limit, if configured.
    pub fn node_limit(&self) -> Option<u64> {
        self.limits.as_ref().and_then(|l| l.node_limit)
    }

    /// Returns the expansion depth limit, if configured.
    pub fn depth_limit(&self) -> Option<usize> {
        self.limits.as_ref().and_then(|l| l.depth_limit)
    }
}
