//! Configuration loading and management for the Prop 22 guarantee calculator.
//!
//! This module provides functionality to load the calculator configuration
//! from YAML files, including statute metadata, the jurisdiction
//! minimum-wage table, and the default rates used to pre-populate the form.
//!
//! The configuration is consumed by the presentation layer only; the
//! calculation core never reads it.
//!
//! # Example
//!
//! ```no_run
//! use prop22_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/prop22").unwrap();
//! println!("Loaded statute: {}", config.statute().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    GuaranteeConfig, Jurisdiction, JurisdictionsConfig, RateDefaults, StatuteMetadata,
};
