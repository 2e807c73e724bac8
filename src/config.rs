// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `GRAPHWALK_*` environment variables (`__` separates nested keys, e.g.
//! `GRAPHWALK_GENERATOR__MAX_NODES=8`).

use crate::generator::{GeneratorConfig, GeneratorError};
use crate::types::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "GRAPHWALK";

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or merged
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// Generator settings are inconsistent
    #[error("invalid generator settings: {0}")]
    Generator(#[from] GeneratorError),
    /// Asked for a key that does not exist
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
    /// The effective configuration could not be rendered
    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Algorithm used when none is named on the command line
    pub default_algorithm: Algorithm,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Colourise terminal output
    pub color: bool,
    /// Random graph settings
    pub generator: GeneratorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::BreadthFirst,
            log_level: "info".to_string(),
            color: true,
            generator: GeneratorConfig::default(),
        }
    }
}

impl Config {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Value of a single dotted key, rendered as text
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = toml::Value::try_from(self)?;
        let mut current = &value;
        for part in key.split('.') {
            current = current
                .get(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }
        Ok(match current {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Default configuration file location
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "graphwalk")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from `path` (or the default location) and the environment
///
/// A missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(file) = path.map(Path::to_path_buf).or_else(default_path) {
        tracing::debug!(path = %file.display(), "reading configuration file");
        builder = builder.add_source(
            config::File::from(file)
                .format(config::FileFormat::Toml)
                .required(false),
        );
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
