//! Configuration types for the Prop 22 guarantee calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the statute being modeled.
///
/// Contains identifying information about Proposition 22, including its
/// codified location, name, version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteMetadata {
    /// The short code for the statute (e.g., "prop_22").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or rate year of the configuration.
    pub version: String,
    /// URL to the official statute text.
    pub source_url: String,
}

/// A jurisdiction with its applicable minimum wage.
///
/// Jurisdictions pre-populate the minimum-wage input on the form; the
/// calculation core treats the chosen wage as an ordinary numeric input
/// with no awareness of jurisdictions.
#[derive(Debug, Clone, Deserialize)]
pub struct Jurisdiction {
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// The local minimum wage in dollars per hour.
    pub minimum_wage: Decimal,
}

/// Jurisdictions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionsConfig {
    /// Map of jurisdiction code to jurisdiction details.
    pub jurisdictions: HashMap<String, Jurisdiction>,
}

/// Default rates used to pre-populate the form.
#[derive(Debug, Clone, Deserialize)]
pub struct RateDefaults {
    /// The default minimum wage (the statewide rate).
    pub minimum_wage: Decimal,
    /// The default per-engaged-mile rate.
    pub per_mile_rate: Decimal,
}

/// The complete calculator configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a configuration directory.
#[derive(Debug, Clone)]
pub struct GuaranteeConfig {
    /// Statute metadata.
    metadata: StatuteMetadata,
    /// Jurisdictions with their minimum wages.
    jurisdictions: HashMap<String, Jurisdiction>,
    /// Default rates for pre-populating the form.
    defaults: RateDefaults,
}

impl GuaranteeConfig {
    /// Creates a new GuaranteeConfig from its component parts.
    pub fn new(
        metadata: StatuteMetadata,
        jurisdictions: HashMap<String, Jurisdiction>,
        defaults: RateDefaults,
    ) -> Self {
        Self {
            metadata,
            jurisdictions,
            defaults,
        }
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns all jurisdictions.
    pub fn jurisdictions(&self) -> &HashMap<String, Jurisdiction> {
        &self.jurisdictions
    }

    /// Returns the default rates.
    pub fn defaults(&self) -> &RateDefaults {
        &self.defaults
    }
}
