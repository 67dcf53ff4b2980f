//! Fixed-point rounding of reported figures.
//!
//! Rounds the exact binary value of an `f64` half away from zero. Scaling
//! by a power of ten first would round the product instead, and the product
//! can land exactly on a midpoint the original value never reached
//! (0.175 is stored as 0.17499999999999999, which must round to 0.17).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

fn round_exact(value: f64, places: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
}

/// Round to `places` decimals.
///
/// Values a `Decimal` cannot hold (non-finite or huge) are returned as is.
#[must_use]
pub fn round_fixed(value: f64, places: u32) -> f64 {
    round_exact(value, places)
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Format with exactly `places` decimals, rounded like [`round_fixed`].
#[must_use]
pub fn format_fixed(value: f64, places: u32) -> String {
    let width = places as usize;
    round_exact(value, places).map_or_else(
        || format!("{value:.width$}"),
        |d| format!("{d:.width$}"),
    )
}
