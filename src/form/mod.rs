//! Form layer for the Prop 22 guarantee calculator.
//!
//! This module is the presentation boundary around the calculation core:
//! it accepts raw text input, normalizes unparsable or empty entries to
//! zero, pre-populates the minimum wage from the jurisdiction table, and
//! formats the computed amounts as currency strings for display. The core
//! itself only ever sees the parsed numeric snapshot.

mod format;
mod input;
mod state;
mod summary;

pub use format::{format_hours, format_usd};
pub use input::{FormInput, parse_amount};
pub use state::FormState;
pub use summary::{FormSummary, PaymentStanding};
