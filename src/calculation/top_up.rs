//! Top-up calculation functionality.
//!
//! This module computes the top-up owed: the shortfall between the
//! guaranteed earnings floor and the base earnings actually received.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of computing the top-up owed, including the audit step.
#[derive(Debug, Clone)]
pub struct TopUpResult {
    /// The top-up owed, never negative.
    pub owed: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the top-up owed for a pay period.
///
/// The top-up is `max(0, guaranteed_floor - base_earnings)`: if base
/// earnings already meet or exceed the guaranteed floor, the top-up owed is
/// exactly zero.
///
/// # Arguments
///
/// * `guaranteed_floor` - The guaranteed earnings floor for the period
/// * `base_earnings` - Base earnings received, excluding gratuities, tolls,
///   and promotional payments
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// Section 7453(a) obligates the network company to pay the difference when
/// net earnings fall below the floor.
///
/// # Examples
///
/// ```
/// use prop22_engine::calculation::calculate_top_up_owed;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_top_up_owed(
///     Decimal::from_str("55.80").unwrap(),
///     Decimal::from(50),
///     1,
/// );
/// assert_eq!(result.owed, Decimal::from_str("5.80").unwrap());
/// ```
pub fn calculate_top_up_owed(
    guaranteed_floor: Decimal,
    base_earnings: Decimal,
    step_number: u32,
) -> TopUpResult {
    let shortfall = guaranteed_floor - base_earnings;
    let owed = shortfall.max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "top_up_owed".to_string(),
        rule_name: "Top-Up Owed".to_string(),
        section_ref: "7453(a)".to_string(),
        input: serde_json::json!({
            "guaranteed_floor": guaranteed_floor.normalize().to_string(),
            "base_earnings": base_earnings.normalize().to_string()
        }),
        output: serde_json::json!({
            "top_up_owed": owed.normalize().to_string(),
            "earnings_met_floor": shortfall <= Decimal::ZERO
        }),
        reasoning: if shortfall <= Decimal::ZERO {
            format!(
                "Base earnings ${} meet the guaranteed floor ${}; no top-up owed",
                base_earnings.normalize(),
                guaranteed_floor.normalize()
            )
        } else {
            format!(
                "max(0, ${} - ${}) = ${}",
                guaranteed_floor.normalize(),
                base_earnings.normalize(),
                owed.normalize()
            )
        },
    };

    TopUpResult { owed, audit_step }
}
