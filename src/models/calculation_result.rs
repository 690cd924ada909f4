//! Calculation result models for the Prop 22 guarantee calculator.
//!
//! This module contains the [`GuaranteeResult`] type and its associated
//! structures that capture all outputs from a guarantee calculation,
//! including the earnings breakdown and audit traces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationInput;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute section for this rule.
    pub section_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate unusual inputs that don't prevent calculation
/// but may require attention, such as a minutes entry outside 0-59.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency.
///
/// # Example
///
/// ```
/// use prop22_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Aggregated amounts for a guarantee calculation.
///
/// This struct mirrors the summary card of the calculator: the guaranteed
/// floor and its two components, alongside the earnings comparison that
/// produces the top-up owed and the difference versus the amount already
/// paid.
///
/// # Example
///
/// ```
/// use prop22_engine::models::GuaranteeBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = GuaranteeBreakdown {
///     engaged_hours: Decimal::from_str("40.00").unwrap(),
///     time_component: Decimal::from_str("792.00").unwrap(),
///     mileage_component: Decimal::ZERO,
///     guaranteed_floor: Decimal::from_str("792.00").unwrap(),
///     base_earnings: Decimal::ZERO,
///     top_up_owed: Decimal::from_str("792.00").unwrap(),
///     already_paid: Decimal::ZERO,
///     difference_vs_paid: Decimal::from_str("792.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeBreakdown {
    /// Total engaged hours over the two-week period (never negative).
    pub engaged_hours: Decimal,
    /// The 120%-of-minimum-wage component of the floor (rate x hours).
    pub time_component: Decimal,
    /// The per-mile component of the floor (rate x miles).
    pub mileage_component: Decimal,
    /// The guaranteed earnings floor (time component + mileage component).
    pub guaranteed_floor: Decimal,
    /// Base earnings received, as supplied on the input.
    pub base_earnings: Decimal,
    /// Top-up owed: the shortfall below the floor, never negative.
    pub top_up_owed: Decimal,
    /// Top-up amount already paid, as supplied on the input.
    pub already_paid: Decimal,
    /// Top-up owed minus already paid. Positive means underpaid, negative
    /// means overpaid; not clamped.
    pub difference_vs_paid: Decimal,
}

/// The complete result of a guarantee calculation.
///
/// Captures all outputs from one recompute over the current form snapshot:
/// the echoed input, the earnings breakdown, and a full audit trace. The
/// result carries no identity; it is replaced wholesale on the next
/// recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuaranteeResult {
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The input snapshot the calculation was performed over.
    pub input: CalculationInput,
    /// Aggregated amounts for the calculation.
    pub breakdown: GuaranteeBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
