//! Engaged hours calculation functionality.
//!
//! This module provides functions for folding the two weekly hour/minute
//! entries of a pay period into a single engaged-hours total, as counted
//! toward the Prop 22 earnings guarantee.

use rust_decimal::Decimal;

use crate::models::{AuditStep, TimeEntry};

fn minutes_per_hour() -> Decimal {
    Decimal::from(60)
}

/// Clamps a minutes entry to the closed range [0, 59].
///
/// Values outside the range are silently clamped, not rejected; an
/// out-of-range minutes entry is not an error condition.
///
/// # Example
///
/// ```
/// use prop22_engine::calculation::clamp_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clamp_minutes(Decimal::from(75)), Decimal::from(59));
/// assert_eq!(clamp_minutes(Decimal::from(-5)), Decimal::ZERO);
/// assert_eq!(clamp_minutes(Decimal::from(30)), Decimal::from(30));
/// ```
pub fn clamp_minutes(minutes: Decimal) -> Decimal {
    minutes.clamp(Decimal::ZERO, Decimal::from(59))
}

/// The result of totaling engaged hours, including the audit step.
#[derive(Debug, Clone)]
pub struct EngagedHoursResult {
    /// Total engaged hours over the two-week period, never negative.
    pub hours: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Totals engaged time over a two-week pay period into fractional hours.
///
/// Each week's minutes are clamped to [0, 59] and folded into fractional
/// hours before the weeks are summed. The final total is floored at zero;
/// the per-week partial sums are not floored individually, so a negative
/// week offsets a positive one before the floor applies.
///
/// # Arguments
///
/// * `week_one` - Engaged time for week 1 of the pay period
/// * `week_two` - Engaged time for week 2 of the pay period
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `EngagedHoursResult` containing the total and an audit step.
/// The total is always >= 0, even if hour inputs are negative.
///
/// # Statute Reference
///
/// Section 7463 defines engaged time as the time from job acceptance to
/// drop-off; only engaged time counts toward the guarantee.
///
/// # Examples
///
/// ```
/// use prop22_engine::calculation::calculate_engaged_hours;
/// use prop22_engine::models::TimeEntry;
/// use rust_decimal::Decimal;
///
/// let week_one = TimeEntry::new(Decimal::from(20), Decimal::ZERO);
/// let week_two = TimeEntry::new(Decimal::from(20), Decimal::ZERO);
/// let result = calculate_engaged_hours(&week_one, &week_two, 1);
/// assert_eq!(result.hours, Decimal::from(40));
/// ```
pub fn calculate_engaged_hours(
    week_one: &TimeEntry,
    week_two: &TimeEntry,
    step_number: u32,
) -> EngagedHoursResult {
    let week_one_hours = week_one.hours + clamp_minutes(week_one.minutes) / minutes_per_hour();
    let week_two_hours = week_two.hours + clamp_minutes(week_two.minutes) / minutes_per_hour();
    let hours = (week_one_hours + week_two_hours).max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "engaged_hours".to_string(),
        rule_name: "Engaged Hours Totaling".to_string(),
        section_ref: "7463".to_string(),
        input: serde_json::json!({
            "week_one_hours": week_one.hours.normalize().to_string(),
            "week_one_minutes": week_one.minutes.normalize().to_string(),
            "week_two_hours": week_two.hours.normalize().to_string(),
            "week_two_minutes": week_two.minutes.normalize().to_string()
        }),
        output: serde_json::json!({
            "week_one_fractional_hours": week_one_hours.normalize().to_string(),
            "week_two_fractional_hours": week_two_hours.normalize().to_string(),
            "engaged_hours": hours.normalize().to_string()
        }),
        reasoning: format!(
            "{}h {}m + {}h {}m = {} engaged hours (minutes clamped to 0-59, total floored at zero)",
            week_one.hours.normalize(),
            week_one.minutes.normalize(),
            week_two.hours.normalize(),
            week_two.minutes.normalize(),
            hours.normalize()
        ),
    };

    EngagedHoursResult { hours, audit_step }
}
