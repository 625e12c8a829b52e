//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{StatutoryConfig, StatutoryFile, TaxTable};

/// Loads and provides access to a statutory schedule.
///
/// # Directory Structure
///
/// ```text
/// config/ph2024/
/// ├── statutory.yaml   # Metadata, work schedule, contribution settings
/// └── tax_table.yaml   # Annual income tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payshare_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ph2024").unwrap();
/// println!("Loaded schedule: {}", loader.config().metadata().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The loaded values fail validation (see [`StatutoryConfig::validate`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory = Self::load_yaml::<StatutoryFile>(&path.join("statutory.yaml"))?;
        let tax_table = Self::load_yaml::<TaxTable>(&path.join("tax_table.yaml"))?;

        let config = StatutoryConfig::new(statutory, tax_table);
        config.validate()?;

        debug!(
            code = %config.metadata().code,
            brackets = config.tax_table().brackets.len(),
            "Loaded statutory configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: StatutoryConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }
}
