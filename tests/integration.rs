//! Comprehensive integration tests for the Prop 22 guarantee calculator.
//!
//! This test suite covers the full form-to-summary flow:
//! - Engaged time folding over a two-week period
//! - The guaranteed floor and its time/mileage components
//! - Top-up owed and the difference against payments already made
//! - Minute clamping and zero-normalization of raw text input
//! - Jurisdiction minimum-wage pre-population
//! - Audit traces and warnings

use rust_decimal::Decimal;
use std::str::FromStr;

use prop22_engine::calculation::calculate_guarantee;
use prop22_engine::config::ConfigLoader;
use prop22_engine::error::EngineError;
use prop22_engine::form::{FormState, FormSummary, PaymentStanding};
use prop22_engine::models::{CalculationInput, TimeEntry};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn create_state() -> FormState {
    let config = ConfigLoader::load("./config/prop22").expect("Failed to load config");
    FormState::new(config)
}

/// Fills the form with raw text, the way the inputs arrive from the page.
#[allow(clippy::too_many_arguments)]
fn fill_form(
    state: &mut FormState,
    w1h: &str,
    w1m: &str,
    w2h: &str,
    w2m: &str,
    miles: &str,
    base_earnings: &str,
    already_paid: &str,
) {
    let input = state.input_mut();
    input.week_one_hours = w1h.to_string();
    input.week_one_minutes = w1m.to_string();
    input.week_two_hours = w2h.to_string();
    input.week_two_minutes = w2m.to_string();
    input.engaged_miles = miles.to_string();
    input.base_earnings = base_earnings.to_string();
    input.already_paid = already_paid.to_string();
}

// =============================================================================
// Full-period scenarios
// =============================================================================

/// Two 20-hour weeks at the statewide wage, no miles, no earnings: the
/// full floor of $792.00 is owed.
#[test]
fn test_full_period_at_statewide_wage() {
    let mut state = create_state();
    fill_form(&mut state, "20", "0", "20", "0", "0", "0", "0");

    let result = state.recompute();

    assert_eq!(result.breakdown.engaged_hours, dec("40"));
    assert_eq!(result.breakdown.guaranteed_floor, dec("792.00"));
    assert_eq!(result.breakdown.top_up_owed, dec("792.00"));
    assert_eq!(result.breakdown.difference_vs_paid, dec("792.00"));

    let summary = FormSummary::from(&result);
    assert_eq!(summary.engaged_hours, "40.00");
    assert_eq!(summary.guaranteed_floor, "$792.00");
    assert_eq!(summary.top_up_owed, "$792.00");
    assert_eq!(summary.standing, PaymentStanding::Underpaid);
}

/// One engaged hour (30 minutes per week) plus 100 miles against $50 of
/// base earnings: $19.80 + $36.00 floor, $5.80 top-up owed.
#[test]
fn test_short_period_with_mileage() {
    let mut state = create_state();
    fill_form(&mut state, "0", "30", "0", "30", "100", "50", "0");

    let result = state.recompute();

    assert_eq!(result.breakdown.engaged_hours, dec("1"));
    assert_eq!(result.breakdown.time_component, dec("19.80"));
    assert_eq!(result.breakdown.mileage_component, dec("36.00"));
    assert_eq!(result.breakdown.guaranteed_floor, dec("55.80"));
    assert_eq!(result.breakdown.top_up_owed, dec("5.80"));
    assert_eq!(result.breakdown.difference_vs_paid, dec("5.80"));
}

/// Base earnings above the floor: nothing owed, difference stays zero.
#[test]
fn test_earnings_above_floor_owe_nothing() {
    let mut state = create_state();
    state.input_mut().per_mile_rate = "0".to_string();
    fill_form(&mut state, "10", "0", "0", "0", "0", "300", "0");

    let result = state.recompute();

    assert_eq!(result.breakdown.guaranteed_floor, dec("198.00"));
    assert_eq!(result.breakdown.top_up_owed, Decimal::ZERO);
    assert_eq!(result.breakdown.difference_vs_paid, Decimal::ZERO);
    assert_eq!(
        FormSummary::from(&result).standing,
        PaymentStanding::Settled
    );
}

/// An already-paid top-up larger than the amount owed flips the
/// difference negative: the period was overpaid by $14.20.
#[test]
fn test_already_paid_exceeding_owed_goes_negative() {
    let mut state = create_state();
    fill_form(&mut state, "0", "30", "0", "30", "100", "50", "20");

    let result = state.recompute();

    assert_eq!(result.breakdown.top_up_owed, dec("5.80"));
    assert_eq!(result.breakdown.difference_vs_paid, dec("-14.20"));

    let summary = FormSummary::from(&result);
    assert_eq!(summary.difference_vs_paid, "-$14.20");
    assert_eq!(summary.standing, PaymentStanding::Overpaid);
}

// =============================================================================
// Clamping and normalization at the form boundary
// =============================================================================

/// A minutes entry of 75 is clamped to 59 before folding, and the clamp
/// is surfaced as a warning on the audit trace.
#[test]
fn test_minutes_above_range_clamp_with_warning() {
    let mut state = create_state();
    fill_form(&mut state, "1", "75", "0", "0", "0", "0", "0");

    let result = state.recompute();

    assert_eq!(
        result.breakdown.engaged_hours,
        dec("1") + dec("59") / dec("60")
    );
    assert_eq!(result.audit_trace.warnings.len(), 1);
    assert_eq!(result.audit_trace.warnings[0].code, "MINUTES_CLAMPED");
}

/// Negative minutes clamp to zero.
#[test]
fn test_negative_minutes_clamp_to_zero() {
    let mut state = create_state();
    fill_form(&mut state, "2", "-5", "3", "0", "0", "0", "0");

    let result = state.recompute();

    assert_eq!(result.breakdown.engaged_hours, dec("5"));
}

/// Unparsable text entries are normalized to zero before reaching the
/// core, never rejected.
#[test]
fn test_garbage_text_normalizes_to_zero() {
    let mut state = create_state();
    fill_form(&mut state, "twenty", "0", "20", "0", "oops", "1e3", "0");

    let result = state.recompute();

    assert_eq!(result.breakdown.engaged_hours, dec("20"));
    assert_eq!(result.breakdown.mileage_component, Decimal::ZERO);
    assert_eq!(result.breakdown.base_earnings, Decimal::ZERO);
}

/// A negative week offsets a positive one before the final floor at zero;
/// only the total is clamped.
#[test]
fn test_negative_week_offsets_before_final_floor() {
    let mut state = create_state();
    fill_form(&mut state, "-2", "0", "3", "0", "0", "0", "0");
    assert_eq!(state.recompute().breakdown.engaged_hours, dec("1"));

    fill_form(&mut state, "-5", "0", "2", "0", "0", "0", "0");
    assert_eq!(state.recompute().breakdown.engaged_hours, Decimal::ZERO);
}

// =============================================================================
// Jurisdiction pre-population
// =============================================================================

/// Selecting a jurisdiction pre-fills its minimum wage and feeds through
/// to the floor.
#[test]
fn test_jurisdiction_prefill_feeds_calculation() {
    let mut state = create_state();
    state.select_jurisdiction("emeryville").unwrap();
    fill_form(&mut state, "1", "0", "0", "0", "0", "0", "0");

    let result = state.recompute();

    // 1.2 * 19.90 * 1
    assert_eq!(result.breakdown.guaranteed_floor, dec("23.880"));
    assert_eq!(result.input.minimum_wage, dec("19.90"));
}

/// The pre-filled wage stays editable; a manual entry wins.
#[test]
fn test_manual_wage_edit_wins_over_prefill() {
    let mut state = create_state();
    state.select_jurisdiction("san_jose").unwrap();
    state.input_mut().minimum_wage = "20.00".to_string();
    fill_form(&mut state, "1", "0", "0", "0", "0", "0", "0");

    let result = state.recompute();

    assert_eq!(result.breakdown.guaranteed_floor, dec("24.0000"));
}

/// An unknown jurisdiction code is an error and leaves the form unchanged.
#[test]
fn test_unknown_jurisdiction_is_an_error() {
    let mut state = create_state();

    let result = state.select_jurisdiction("gotham");

    match result {
        Err(EngineError::JurisdictionNotFound { code }) => assert_eq!(code, "gotham"),
        other => panic!("Expected JurisdictionNotFound, got {:?}", other),
    }
    assert_eq!(state.input().minimum_wage, "16.50");
}

/// The shipped table carries the fifteen Aug 2025 jurisdictions.
#[test]
fn test_shipped_jurisdiction_table() {
    let state = create_state();
    let loader = state.config();

    assert_eq!(loader.jurisdiction_codes().len(), 15);
    assert_eq!(
        loader.minimum_wage_for("california_statewide").unwrap(),
        dec("16.50")
    );
    assert_eq!(loader.minimum_wage_for("west_hollywood").unwrap(), dec("19.65"));
    assert_eq!(loader.minimum_wage_for("daly_city").unwrap(), dec("17.07"));
}

// =============================================================================
// Audit trace
// =============================================================================

/// Every recompute produces the same four steps in order.
#[test]
fn test_audit_trace_has_four_steps_in_order() {
    let mut state = create_state();
    fill_form(&mut state, "20", "0", "20", "0", "100", "500", "0");

    let result = state.recompute();

    let rule_ids: Vec<&str> = result
        .audit_trace
        .steps
        .iter()
        .map(|s| s.rule_id.as_str())
        .collect();
    assert_eq!(
        rule_ids,
        vec![
            "engaged_hours",
            "guaranteed_floor",
            "top_up_owed",
            "difference_vs_paid"
        ]
    );
    for (index, step) in result.audit_trace.steps.iter().enumerate() {
        assert_eq!(step.step_number as usize, index + 1);
        assert!(!step.reasoning.is_empty());
    }
}

/// The audit trace records the statute sections behind each rule.
#[test]
fn test_audit_trace_cites_statute_sections() {
    let mut state = create_state();
    fill_form(&mut state, "1", "0", "0", "0", "0", "0", "0");

    let result = state.recompute();

    let sections: Vec<&str> = result
        .audit_trace
        .steps
        .iter()
        .map(|s| s.section_ref.as_str())
        .collect();
    assert_eq!(sections, vec!["7463", "7453(d)", "7453(a)", "7453(b)"]);
}

// =============================================================================
// Core determinism and serialization
// =============================================================================

/// Recomputing the same snapshot twice yields identical output.
#[test]
fn test_recompute_is_referentially_transparent() {
    let input = CalculationInput {
        week_one: TimeEntry::new(dec("17"), dec("42")),
        week_two: TimeEntry::new(dec("22"), dec("9")),
        engaged_miles: dec("412.7"),
        minimum_wage: dec("19.18"),
        per_mile_rate: dec("0.36"),
        base_earnings: dec("880.25"),
        already_paid: dec("12.40"),
    };

    let first = calculate_guarantee(&input);
    let second = calculate_guarantee(&input);

    assert_eq!(first.breakdown, second.breakdown);
    assert_eq!(first.audit_trace.steps, second.audit_trace.steps);
}

/// The full result serializes to JSON and back without loss.
#[test]
fn test_result_json_round_trip() {
    let mut state = create_state();
    fill_form(&mut state, "0", "30", "0", "30", "100", "50", "20");

    let result = state.recompute();
    let json = serde_json::to_string(&result).unwrap();
    let parsed: prop22_engine::models::GuaranteeResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.breakdown, result.breakdown);
    assert_eq!(parsed.input, result.input);
}
