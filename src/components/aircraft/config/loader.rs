use bevy::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::components::aircraft::config::JetAircraftConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

impl JetAircraftConfig {
    /// Reads and validates an aircraft configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&file_contents)?;
        info!("Loaded aircraft '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Parses and validates an aircraft configuration from YAML text. Fields
    /// left out take their default values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: JetAircraftConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Fails with a `ValidationError` naming the field unless `value` is finite
/// and satisfies `check`.
pub(crate) fn require(
    name: &str,
    value: f64,
    check: impl Fn(f64) -> bool,
    expectation: &str,
) -> Result<(), ConfigError> {
    if value.is_finite() && check(value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} must be {expectation}, got {value}"
        )))
    }
}
