//! Engaged time entry model.
//!
//! This module contains the [`TimeEntry`] type representing the engaged time
//! worked during one week of a pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Engaged time worked during a single week, as entered on the form.
///
/// Engaged time is the time from job acceptance to drop-off; it is the only
/// work time counted toward the Prop 22 guarantee. A two-week pay period is
/// entered as two `TimeEntry` values.
///
/// Minutes are expected to lie in `[0, 59]` but are not validated here: the
/// calculation clamps them to that range at the point of use, so an
/// out-of-range entry is folded silently rather than rejected.
///
/// # Example
///
/// ```
/// use prop22_engine::models::TimeEntry;
/// use rust_decimal::Decimal;
///
/// let week_one = TimeEntry {
///     hours: Decimal::from(20),
///     minutes: Decimal::from(30),
/// };
/// assert_eq!(week_one.hours, Decimal::from(20));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Whole hours of engaged time.
    pub hours: Decimal,
    /// Additional minutes of engaged time, nominally 0-59.
    pub minutes: Decimal,
}

impl TimeEntry {
    /// Creates a time entry from hour and minute counts.
    pub fn new(hours: Decimal, minutes: Decimal) -> Self {
        Self { hours, minutes }
    }
}
