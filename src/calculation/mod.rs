//! Calculation logic for the Prop 22 guarantee calculator.
//!
//! This module contains all the calculation functions for determining the
//! earnings guarantee, including engaged hours totaling with minute
//! clamping, the guaranteed earnings floor (120% of minimum wage plus the
//! per-mile supplement), the top-up owed, the difference against any top-up
//! already paid, and the orchestrator that composes them into a single
//! recompute.

mod engaged_hours;
mod guarantee;
mod guaranteed_floor;
mod payment_difference;
mod top_up;

pub use engaged_hours::{EngagedHoursResult, calculate_engaged_hours, clamp_minutes};
pub use guarantee::calculate_guarantee;
pub use guaranteed_floor::{
    GuaranteedFloorResult, calculate_guaranteed_floor, guarantee_multiplier,
};
pub use payment_difference::{PaymentDifferenceResult, calculate_payment_difference};
pub use top_up::{TopUpResult, calculate_top_up_owed};
