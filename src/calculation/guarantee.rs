//! Guarantee calculation orchestration.
//!
//! This module composes the individual calculation rules into a single
//! recompute over a form snapshot, producing a [`GuaranteeResult`] with a
//! complete audit trace.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AuditTrace, AuditWarning, CalculationInput, GuaranteeBreakdown, GuaranteeResult, TimeEntry,
};

use super::engaged_hours::calculate_engaged_hours;
use super::guaranteed_floor::calculate_guaranteed_floor;
use super::payment_difference::calculate_payment_difference;
use super::top_up::calculate_top_up_owed;

/// Performs a full guarantee calculation over one input snapshot.
///
/// Runs the four calculation rules in order (engaged hours, guaranteed
/// floor, top-up owed, difference vs. paid), threading each output into the
/// next and collecting their audit steps. Unusual inputs (minutes outside
/// 0-59, negative quantities) are recorded as warnings on the audit trace;
/// they never change the computed amounts and never fail the calculation.
///
/// The calculation is deterministic: the same input snapshot always
/// produces the same breakdown.
///
/// # Examples
///
/// ```
/// use prop22_engine::calculation::calculate_guarantee;
/// use prop22_engine::models::{CalculationInput, TimeEntry};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput {
///     week_one: TimeEntry::new(Decimal::from(20), Decimal::ZERO),
///     week_two: TimeEntry::new(Decimal::from(20), Decimal::ZERO),
///     engaged_miles: Decimal::ZERO,
///     minimum_wage: Decimal::from_str("16.50").unwrap(),
///     per_mile_rate: Decimal::from_str("0.36").unwrap(),
///     base_earnings: Decimal::ZERO,
///     already_paid: Decimal::ZERO,
/// };
///
/// let result = calculate_guarantee(&input);
/// assert_eq!(result.breakdown.guaranteed_floor, Decimal::from_str("792.00").unwrap());
/// ```
pub fn calculate_guarantee(input: &CalculationInput) -> GuaranteeResult {
    let started = Instant::now();
    let mut steps = Vec::with_capacity(4);
    let warnings = collect_input_warnings(input);

    let engaged = calculate_engaged_hours(&input.week_one, &input.week_two, 1);
    steps.push(engaged.audit_step);

    let floor = calculate_guaranteed_floor(
        input.minimum_wage,
        engaged.hours,
        input.per_mile_rate,
        input.engaged_miles,
        2,
    );
    steps.push(floor.audit_step);

    let top_up = calculate_top_up_owed(floor.floor, input.base_earnings, 3);
    steps.push(top_up.audit_step);

    let difference = calculate_payment_difference(top_up.owed, input.already_paid, 4);
    steps.push(difference.audit_step);

    let breakdown = GuaranteeBreakdown {
        engaged_hours: engaged.hours,
        time_component: floor.time_component,
        mileage_component: floor.mileage_component,
        guaranteed_floor: floor.floor,
        base_earnings: input.base_earnings,
        top_up_owed: top_up.owed,
        already_paid: input.already_paid,
        difference_vs_paid: difference.difference,
    };

    let duration = started.elapsed();
    debug!(
        engaged_hours = %breakdown.engaged_hours,
        guaranteed_floor = %breakdown.guaranteed_floor,
        top_up_owed = %breakdown.top_up_owed,
        difference_vs_paid = %breakdown.difference_vs_paid,
        warnings = warnings.len(),
        duration_us = duration.as_micros() as u64,
        "Guarantee calculation completed"
    );

    GuaranteeResult {
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input: input.clone(),
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    }
}

/// Collects warnings for unusual raw inputs.
///
/// Clamping and sign-flooring are part of the calculation rules themselves;
/// the warnings only make them visible on the audit trace.
fn collect_input_warnings(input: &CalculationInput) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    push_minutes_warning(&mut warnings, "week 1", &input.week_one);
    push_minutes_warning(&mut warnings, "week 2", &input.week_two);

    let negatives = [
        ("week 1 hours", input.week_one.hours),
        ("week 2 hours", input.week_two.hours),
        ("engaged miles", input.engaged_miles),
        ("minimum wage", input.minimum_wage),
        ("per-mile rate", input.per_mile_rate),
        ("base earnings", input.base_earnings),
    ];
    for (field, value) in negatives {
        if value < Decimal::ZERO {
            warnings.push(AuditWarning {
                code: "NEGATIVE_INPUT".to_string(),
                message: format!("{} is negative ({})", field, value.normalize()),
                severity: "medium".to_string(),
            });
        }
    }

    warnings
}

fn push_minutes_warning(warnings: &mut Vec<AuditWarning>, week: &str, entry: &TimeEntry) {
    if entry.minutes < Decimal::ZERO || entry.minutes > Decimal::from(59) {
        warnings.push(AuditWarning {
            code: "MINUTES_CLAMPED".to_string(),
            message: format!(
                "{} minutes entry {} clamped to the range 0-59",
                week,
                entry.minutes.normalize()
            ),
            severity: "low".to_string(),
        });
    }
}
