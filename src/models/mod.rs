//! Core data models for the Prop 22 guarantee calculator.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod time_entry;

pub use calculation_input::CalculationInput;
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, GuaranteeBreakdown, GuaranteeResult,
};
pub use time_entry::TimeEntry;
