//! Display rounding for day balances.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` half-up to `dp` decimal places and fixes the scale, so
/// `12` is reported as `12.0` at one decimal place.
///
/// Balances are never negative, so rounding midpoints away from zero is
/// half-up.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_half_up(Decimal::from_str("2.25").unwrap(), 1);
/// assert_eq!(rounded.to_string(), "2.3");
///
/// let rounded = round_half_up(Decimal::from(12), 1);
/// assert_eq!(rounded.to_string(), "12.0");
/// ```
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}
