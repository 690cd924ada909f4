//! Raw form input handling.
//!
//! This module defines the text-level form snapshot and the parsing rule
//! that turns it into a [`CalculationInput`] for the core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateDefaults;
use crate::models::{CalculationInput, TimeEntry};

/// Parses a raw text amount into a `Decimal`.
///
/// Empty or unparsable text is substituted with zero rather than rejected;
/// this is the contract boundary with the calculation core, which only
/// accepts numbers. A leading dollar sign and thousands separators are
/// tolerated.
///
/// # Example
///
/// ```
/// use prop22_engine::form::parse_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_amount("16.50"), Decimal::from_str("16.50").unwrap());
/// assert_eq!(parse_amount("$1,234.56"), Decimal::from_str("1234.56").unwrap());
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// assert_eq!(parse_amount("not a number"), Decimal::ZERO);
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    cleaned.parse().unwrap_or(Decimal::ZERO)
}

/// The raw text snapshot of the form, one field per input control.
///
/// Fields hold whatever the user typed; parsing and zero-substitution
/// happen when the snapshot is folded into a [`CalculationInput`]. The
/// selected jurisdiction is remembered only so the form can display it;
/// the core never sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Week 1 engaged hours, as typed.
    pub week_one_hours: String,
    /// Week 1 engaged minutes, as typed.
    pub week_one_minutes: String,
    /// Week 2 engaged hours, as typed.
    pub week_two_hours: String,
    /// Week 2 engaged minutes, as typed.
    pub week_two_minutes: String,
    /// Total engaged miles, as typed.
    pub engaged_miles: String,
    /// Local minimum wage in dollars per hour, as typed or pre-filled.
    pub minimum_wage: String,
    /// Per-engaged-mile rate in dollars per mile, as typed or pre-filled.
    pub per_mile_rate: String,
    /// Base earnings received, as typed.
    pub base_earnings: String,
    /// Top-up already paid, as typed.
    pub already_paid: String,
    /// The jurisdiction code selected to pre-fill the minimum wage, if any.
    pub jurisdiction: Option<String>,
}

impl FormInput {
    /// Creates a form snapshot pre-populated with the configured default
    /// rates. All other fields start empty and parse to zero.
    pub fn with_defaults(defaults: &RateDefaults) -> Self {
        Self {
            minimum_wage: defaults.minimum_wage.to_string(),
            per_mile_rate: defaults.per_mile_rate.to_string(),
            ..Self::default()
        }
    }

    /// Folds the raw text fields into a numeric input snapshot for the
    /// calculation core, substituting zero for anything unparsable.
    pub fn to_calculation_input(&self) -> CalculationInput {
        CalculationInput {
            week_one: TimeEntry::new(
                parse_amount(&self.week_one_hours),
                parse_amount(&self.week_one_minutes),
            ),
            week_two: TimeEntry::new(
                parse_amount(&self.week_two_hours),
                parse_amount(&self.week_two_minutes),
            ),
            engaged_miles: parse_amount(&self.engaged_miles),
            minimum_wage: parse_amount(&self.minimum_wage),
            per_mile_rate: parse_amount(&self.per_mile_rate),
            base_earnings: parse_amount(&self.base_earnings),
            already_paid: parse_amount(&self.already_paid),
        }
    }
}
