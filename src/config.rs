//! Configuration for the registry and the demo's logging

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Containers larger than this up front are almost certainly a typo.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
    #[error("initial capacity {0} exceeds the maximum of {max}", max = MAX_INITIAL_CAPACITY)]
    CapacityTooLarge(usize),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Slots reserved by each container when it is registered.
    #[serde(default)]
    pub initial_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

impl Config {
    /// Parse configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::CapacityTooLarge(
                self.registry.initial_capacity,
            ));
        }
        self.logging.level_filter()?;
        Ok(())
    }
}
