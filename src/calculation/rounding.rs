//! Monetary rounding policy.
//!
//! All derived monetary amounts in the engine are rounded to 2 decimal
//! places using round-half-away-from-zero, matching canonical currency
//! rounding. Banker's rounding would not reproduce reference outputs.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, ties away from zero.
///
/// # Examples
///
/// ```
/// use receipt_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("2.345").unwrap();
/// assert_eq!(round_money(value), Decimal::from_str("2.35").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
