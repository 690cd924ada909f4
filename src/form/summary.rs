//! Display-ready calculation summary.
//!
//! This module renders a [`GuaranteeResult`] into the strings the form
//! shows on its summary card.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::GuaranteeResult;

use super::format::{format_hours, format_usd};

/// The payment standing implied by the difference versus the amount paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStanding {
    /// More top-up is owed than has been paid.
    Underpaid,
    /// More top-up has been paid than is owed.
    Overpaid,
    /// The top-up paid matches the top-up owed exactly.
    Settled,
}

impl PaymentStanding {
    /// Derives the standing from the unclamped difference.
    pub fn from_difference(difference: Decimal) -> Self {
        if difference > Decimal::ZERO {
            Self::Underpaid
        } else if difference < Decimal::ZERO {
            Self::Overpaid
        } else {
            Self::Settled
        }
    }
}

impl fmt::Display for PaymentStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Underpaid => "underpaid",
            Self::Overpaid => "overpaid",
            Self::Settled => "settled",
        };
        f.write_str(text)
    }
}

/// The formatted summary card for one calculation.
///
/// Every amount is a display string produced by [`format_usd`] (hours by
/// [`format_hours`]); the raw numbers stay on the [`GuaranteeResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSummary {
    /// Total engaged time, e.g. "40.00".
    pub engaged_hours: String,
    /// 120% of minimum wage times engaged hours, e.g. "$792.00".
    pub time_component: String,
    /// Per-mile rate times engaged miles, e.g. "$36.00".
    pub mileage_component: String,
    /// The guaranteed floor, e.g. "$828.00".
    pub guaranteed_floor: String,
    /// Base earnings received, e.g. "$500.00".
    pub base_earnings: String,
    /// Top-up owed, e.g. "$328.00".
    pub top_up_owed: String,
    /// Top-up already paid, e.g. "$0.00".
    pub already_paid: String,
    /// Difference versus paid, e.g. "-$14.20".
    pub difference_vs_paid: String,
    /// Whether the period is underpaid, overpaid, or settled.
    pub standing: PaymentStanding,
}

impl From<&GuaranteeResult> for FormSummary {
    fn from(result: &GuaranteeResult) -> Self {
        let breakdown = &result.breakdown;
        Self {
            engaged_hours: format_hours(breakdown.engaged_hours),
            time_component: format_usd(breakdown.time_component),
            mileage_component: format_usd(breakdown.mileage_component),
            guaranteed_floor: format_usd(breakdown.guaranteed_floor),
            base_earnings: format_usd(breakdown.base_earnings),
            top_up_owed: format_usd(breakdown.top_up_owed),
            already_paid: format_usd(breakdown.already_paid),
            difference_vs_paid: format_usd(breakdown.difference_vs_paid),
            standing: PaymentStanding::from_difference(breakdown.difference_vs_paid),
        }
    }
}
