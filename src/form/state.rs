//! Form state management.
//!
//! This module holds the live form snapshot together with the loaded
//! configuration, and recomputes the guarantee on demand.

use std::sync::Arc;

use tracing::debug;

use crate::calculation::calculate_guarantee;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::GuaranteeResult;

use super::input::FormInput;
use super::summary::FormSummary;

/// The live state of the calculator form.
///
/// Holds the loaded configuration and the current raw input snapshot.
/// There is no cached output: every input change is followed by a
/// [`recompute`](FormState::recompute), which derives the full result from
/// the current snapshot alone.
pub struct FormState {
    /// The loaded calculator configuration.
    config: Arc<ConfigLoader>,
    /// The current raw form input.
    input: FormInput,
}

impl FormState {
    /// Creates a new form state with the given configuration loader.
    ///
    /// The minimum wage and per-mile fields start pre-populated with the
    /// configured defaults; everything else starts empty.
    pub fn new(config: ConfigLoader) -> Self {
        let input = FormInput::with_defaults(config.defaults());
        Self {
            config: Arc::new(config),
            input,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the current raw input snapshot.
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Returns a mutable reference to the raw input snapshot.
    pub fn input_mut(&mut self) -> &mut FormInput {
        &mut self.input
    }

    /// Selects a jurisdiction and copies its minimum wage into the
    /// minimum-wage field.
    ///
    /// The field stays editable afterwards; a manual edit simply
    /// overwrites the pre-filled rate, as on the original form.
    ///
    /// # Errors
    ///
    /// Returns `JurisdictionNotFound` if the code is not in the table.
    pub fn select_jurisdiction(&mut self, code: &str) -> EngineResult<()> {
        let jurisdiction = self.config.get_jurisdiction(code)?;
        debug!(
            jurisdiction = %jurisdiction.name,
            minimum_wage = %jurisdiction.minimum_wage,
            "Pre-filling minimum wage from jurisdiction table"
        );
        self.input.minimum_wage = jurisdiction.minimum_wage.to_string();
        self.input.jurisdiction = Some(code.to_string());
        Ok(())
    }

    /// Recomputes the guarantee from the current input snapshot.
    ///
    /// Called after every input change; the previous result is simply
    /// discarded and replaced.
    pub fn recompute(&self) -> GuaranteeResult {
        calculate_guarantee(&self.input.to_calculation_input())
    }

    /// Recomputes and renders the display summary in one step.
    pub fn summary(&self) -> FormSummary {
        FormSummary::from(&self.recompute())
    }
}
