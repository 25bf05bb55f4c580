//! Price normalization between decimal major units and stored minor units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Minor units per major unit (cents per dollar).
const MINOR_PER_MAJOR: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price {0} does not fit in minor units")]
    OutOfRange(Decimal),
}

/// Convert a major-unit price to integer minor units.
///
/// Computes `round(price * 100)` with exact decimal arithmetic, rounding
/// half away from zero, so `10.005` becomes `1001` and `25.5` becomes `2550`.
pub fn to_minor_units(price: Decimal) -> Result<i64, PriceError> {
    price
        .checked_mul(Decimal::from(MINOR_PER_MAJOR))
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .ok_or(PriceError::OutOfRange(price))
}
