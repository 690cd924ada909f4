//! Calculation input model.
//!
//! This module contains the [`CalculationInput`] type, the complete snapshot
//! of form values handed to the calculation core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeEntry;

/// The full set of inputs for one guarantee calculation.
///
/// A `CalculationInput` is constructed from current form state and discarded
/// on the next recompute; it has no identity beyond the in-memory snapshot.
/// All fields are expected to be non-negative, but the core does not validate
/// this by contract: negative values propagate into the formulas unchanged
/// (only the engaged-hours total and the top-up owed are floored at zero).
///
/// # Example
///
/// ```
/// use prop22_engine::models::{CalculationInput, TimeEntry};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput {
///     week_one: TimeEntry::new(Decimal::from(20), Decimal::ZERO),
///     week_two: TimeEntry::new(Decimal::from(20), Decimal::ZERO),
///     engaged_miles: Decimal::from(100),
///     minimum_wage: Decimal::from_str("16.50").unwrap(),
///     per_mile_rate: Decimal::from_str("0.36").unwrap(),
///     base_earnings: Decimal::from(500),
///     already_paid: Decimal::ZERO,
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Engaged time worked in week 1 of the pay period.
    pub week_one: TimeEntry,
    /// Engaged time worked in week 2 of the pay period.
    pub week_two: TimeEntry,
    /// Total engaged miles driven over the two-week period.
    pub engaged_miles: Decimal,
    /// The applicable local minimum wage, in dollars per hour.
    pub minimum_wage: Decimal,
    /// The per-engaged-mile compensation rate, in dollars per mile.
    pub per_mile_rate: Decimal,
    /// Base earnings received for the period, excluding gratuities, tolls,
    /// and promotional payments.
    pub base_earnings: Decimal,
    /// Top-up amount already paid out for the period.
    pub already_paid: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_input() -> CalculationInput {
        CalculationInput {
            week_one: TimeEntry::new(dec("20"), dec("0")),
            week_two: TimeEntry::new(dec("20"), dec("0")),
            engaged_miles: dec("100"),
            minimum_wage: dec("16.50"),
            per_mile_rate: dec("0.36"),
            base_earnings: dec("500"),
            already_paid: dec("0"),
        }
    }

    #[test]
    fn test_default_is_all_zero() {
        let input = CalculationInput::default();
        assert_eq!(input.engaged_miles, Decimal::ZERO);
        assert_eq!(input.minimum_wage, Decimal::ZERO);
        assert_eq!(input.base_earnings, Decimal::ZERO);
    }

    #[test]
    fn test_serialize_round_trip() {
        let input = sample_input();
        let json = serde_json::to_string(&input).unwrap();
        let parsed: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "week_one": {"hours": "20", "minutes": "0"},
            "week_two": {"hours": "20", "minutes": "0"},
            "engaged_miles": "100",
            "minimum_wage": "16.50",
            "per_mile_rate": "0.36",
            "base_earnings": "500",
            "already_paid": "0"
        }"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.minimum_wage, dec("16.50"));
        assert_eq!(input.week_one.hours, dec("20"));
    }
}
