//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! calculator configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    GuaranteeConfig, Jurisdiction, JurisdictionsConfig, RateDefaults, StatuteMetadata,
};

/// Loads and provides access to the calculator configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query jurisdictions and default rates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/prop22/
/// ├── statute.yaml        # Statute metadata
/// ├── jurisdictions.yaml  # Jurisdiction minimum-wage table
/// └── defaults.yaml       # Default rates for the form
/// ```
///
/// # Example
///
/// ```no_run
/// use prop22_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/prop22").unwrap();
///
/// // Get a jurisdiction
/// let jurisdiction = loader.get_jurisdiction("san_francisco").unwrap();
/// println!("Jurisdiction: {}", jurisdiction.name);
///
/// // Get the minimum wage for a jurisdiction
/// let wage = loader.minimum_wage_for("san_francisco").unwrap();
/// println!("Minimum wage: ${}/h", wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: GuaranteeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/prop22")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use prop22_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/prop22")?;
    /// # Ok::<(), prop22_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load statute.yaml
        let statute_path = path.join("statute.yaml");
        let metadata = Self::load_yaml::<StatuteMetadata>(&statute_path)?;

        // Load jurisdictions.yaml
        let jurisdictions_path = path.join("jurisdictions.yaml");
        let jurisdictions_config = Self::load_yaml::<JurisdictionsConfig>(&jurisdictions_path)?;

        // Load defaults.yaml
        let defaults_path = path.join("defaults.yaml");
        let defaults = Self::load_yaml::<RateDefaults>(&defaults_path)?;

        let config = GuaranteeConfig::new(
            metadata,
            jurisdictions_config.jurisdictions,
            defaults,
        );

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

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &GuaranteeConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.config.statute()
    }

    /// Returns the default rates used to pre-populate the form.
    pub fn defaults(&self) -> &RateDefaults {
        self.config.defaults()
    }

    /// Gets a jurisdiction by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The jurisdiction code (e.g., "san_francisco")
    ///
    /// # Returns
    ///
    /// Returns the jurisdiction if found, or `JurisdictionNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use prop22_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/prop22")?;
    /// let jurisdiction = loader.get_jurisdiction("berkeley")?;
    /// println!("Jurisdiction: {}", jurisdiction.name);
    /// # Ok::<(), prop22_engine::error::EngineError>(())
    /// ```
    pub fn get_jurisdiction(&self, code: &str) -> EngineResult<&Jurisdiction> {
        self.config
            .jurisdictions()
            .get(code)
            .ok_or_else(|| EngineError::JurisdictionNotFound {
                code: code.to_string(),
            })
    }

    /// Gets the minimum wage for a jurisdiction.
    ///
    /// # Arguments
    ///
    /// * `code` - The jurisdiction code
    ///
    /// # Returns
    ///
    /// Returns the hourly minimum wage if the jurisdiction is known, or
    /// `JurisdictionNotFound` error.
    pub fn minimum_wage_for(&self, code: &str) -> EngineResult<Decimal> {
        self.get_jurisdiction(code).map(|j| j.minimum_wage)
    }

    /// Returns all jurisdiction codes, sorted for stable display.
    pub fn jurisdiction_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .config
            .jurisdictions()
            .keys()
            .map(String::as_str)
            .collect();
        codes.sort_unstable();
        codes
    }
}
