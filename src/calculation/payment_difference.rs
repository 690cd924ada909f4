//! Payment difference calculation functionality.
//!
//! This module compares the top-up owed against any top-up amount already
//! paid out for the same pay period.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of comparing owed against paid, including the audit step.
#[derive(Debug, Clone)]
pub struct PaymentDifferenceResult {
    /// Top-up owed minus already paid. Positive means underpaid, negative
    /// means overpaid, zero means exact; not clamped.
    pub difference: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the difference between the top-up owed and the amount already
/// paid.
///
/// The difference is `top_up_owed - already_paid` with no clamping: a
/// positive result means the driver is still underpaid, a negative result
/// means the period was overpaid, and zero means the payment was exact.
///
/// # Arguments
///
/// * `top_up_owed` - The top-up owed for the period (never negative)
/// * `already_paid` - The top-up amount already paid out
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// Section 7453(b) requires the comparison to be settled per pay period of
/// no more than 14 days.
///
/// # Examples
///
/// ```
/// use prop22_engine::calculation::calculate_payment_difference;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_payment_difference(
///     Decimal::from_str("5.80").unwrap(),
///     Decimal::from(20),
///     1,
/// );
/// assert_eq!(result.difference, Decimal::from_str("-14.20").unwrap());
/// ```
pub fn calculate_payment_difference(
    top_up_owed: Decimal,
    already_paid: Decimal,
    step_number: u32,
) -> PaymentDifferenceResult {
    let difference = top_up_owed - already_paid;

    let standing = if difference > Decimal::ZERO {
        "underpaid"
    } else if difference < Decimal::ZERO {
        "overpaid"
    } else {
        "settled"
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "difference_vs_paid".to_string(),
        rule_name: "Difference vs. Already Paid".to_string(),
        section_ref: "7453(b)".to_string(),
        input: serde_json::json!({
            "top_up_owed": top_up_owed.normalize().to_string(),
            "already_paid": already_paid.normalize().to_string()
        }),
        output: serde_json::json!({
            "difference": difference.normalize().to_string(),
            "standing": standing
        }),
        reasoning: format!(
            "${} owed - ${} already paid = ${} ({})",
            top_up_owed.normalize(),
            already_paid.normalize(),
            difference.normalize(),
            standing
        ),
    };

    PaymentDifferenceResult {
        difference,
        audit_step,
    }
}
