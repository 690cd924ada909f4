//! Guaranteed earnings floor calculation functionality.
//!
//! This module computes the Prop 22 net earnings floor for a pay period:
//! 120% of the applicable minimum wage for each engaged hour, plus a
//! per-mile supplement for each engaged mile.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Returns the earnings guarantee multiplier defined in section 7453(d)(1).
///
/// The multiplier is 1.2 (120% of the applicable minimum wage). It is fixed
/// by the statute, not configurable.
pub fn guarantee_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

/// The result of computing the guaranteed floor, including the audit step.
#[derive(Debug, Clone)]
pub struct GuaranteedFloorResult {
    /// The time-based component: 1.2 x minimum wage x engaged hours.
    pub time_component: Decimal,
    /// The mileage component: per-mile rate x engaged miles.
    pub mileage_component: Decimal,
    /// The guaranteed earnings floor (time component + mileage component).
    pub floor: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the guaranteed earnings floor for a pay period.
///
/// The floor is `1.2 * minimum_wage * engaged_hours + per_mile_rate *
/// engaged_miles`. No clamping is applied: the caller is expected to supply
/// non-negative inputs, and the floor can go negative if it does not. This
/// mirrors the statute, which fixes the formula but says nothing about
/// negative quantities.
///
/// # Arguments
///
/// * `minimum_wage` - The applicable local minimum wage, in dollars per hour
/// * `engaged_hours` - Total engaged hours over the pay period
/// * `per_mile_rate` - The per-engaged-mile compensation rate
/// * `engaged_miles` - Total engaged miles over the pay period
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// Section 7453(d)(1) sets the 120%-of-minimum-wage guarantee for engaged
/// time; section 7453(d)(2) sets the per-engaged-mile compensation.
///
/// # Examples
///
/// ```
/// use prop22_engine::calculation::calculate_guaranteed_floor;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_guaranteed_floor(
///     Decimal::from_str("16.50").unwrap(),
///     Decimal::from(40),
///     Decimal::from_str("0.36").unwrap(),
///     Decimal::ZERO,
///     1,
/// );
/// assert_eq!(result.floor, Decimal::from_str("792.00").unwrap());
/// ```
pub fn calculate_guaranteed_floor(
    minimum_wage: Decimal,
    engaged_hours: Decimal,
    per_mile_rate: Decimal,
    engaged_miles: Decimal,
    step_number: u32,
) -> GuaranteedFloorResult {
    let multiplier = guarantee_multiplier();
    let time_component = multiplier * minimum_wage * engaged_hours;
    let mileage_component = per_mile_rate * engaged_miles;
    let floor = time_component + mileage_component;

    let audit_step = AuditStep {
        step_number,
        rule_id: "guaranteed_floor".to_string(),
        rule_name: "Guaranteed Earnings Floor".to_string(),
        section_ref: "7453(d)".to_string(),
        input: serde_json::json!({
            "minimum_wage": minimum_wage.normalize().to_string(),
            "engaged_hours": engaged_hours.normalize().to_string(),
            "per_mile_rate": per_mile_rate.normalize().to_string(),
            "engaged_miles": engaged_miles.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "time_component": time_component.normalize().to_string(),
            "mileage_component": mileage_component.normalize().to_string(),
            "guaranteed_floor": floor.normalize().to_string()
        }),
        reasoning: format!(
            "{} x ${}/h x {}h = ${}; ${}/mi x {}mi = ${}; floor = ${}",
            multiplier.normalize(),
            minimum_wage.normalize(),
            engaged_hours.normalize(),
            time_component.normalize(),
            per_mile_rate.normalize(),
            engaged_miles.normalize(),
            mileage_component.normalize(),
            floor.normalize()
        ),
    };

    GuaranteedFloorResult {
        time_component,
        mileage_component,
        floor,
        audit_step,
    }
}
