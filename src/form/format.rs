//! Display formatting for computed amounts.
//!
//! The calculation core returns raw numeric values; this module renders
//! them as US-locale currency and hour strings for the form.

use rust_decimal::Decimal;

/// Formats a dollar amount as a US currency string.
///
/// Amounts are rounded to cents, grouped with thousands separators, and
/// prefixed with a dollar sign; negative amounts carry a leading minus.
///
/// # Example
///
/// ```
/// use prop22_engine::form::format_usd;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_usd(Decimal::from_str("792").unwrap()), "$792.00");
/// assert_eq!(format_usd(Decimal::from_str("1234.5").unwrap()), "$1,234.50");
/// assert_eq!(format_usd(Decimal::from_str("-14.20").unwrap()), "-$14.20");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let magnitude = rounded.abs();

    let text = format!("{:.2}", magnitude);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part
    )
}

/// Formats an hours total to two decimal places for display.
///
/// # Example
///
/// ```
/// use prop22_engine::form::format_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_hours(Decimal::from(40)), "40.00");
/// ```
pub fn format_hours(hours: Decimal) -> String {
    format!("{:.2}", hours.round_dp(2))
}

/// Inserts thousands separators into a string of integer digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
