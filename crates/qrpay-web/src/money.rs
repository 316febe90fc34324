//! Amount parsing and display

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please enter a valid amount greater than 0")]
pub struct AmountError;

/// Parse a dollar amount typed by the user into cents
///
/// Rounds half away from zero at the cent. Zero, negative, non-numeric
/// and out-of-range input is rejected.
pub fn parse_amount(input: &str) -> Result<i64, AmountError> {
    let value: Decimal = input.trim().parse().map_err(|_| AmountError)?;

    if value <= Decimal::ZERO {
        return Err(AmountError);
    }

    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(AmountError)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(AmountError)
}

/// Format cents as `$X.YY`
pub fn format_cents(cents: i64) -> String {
    format!("${}", Decimal::new(cents, 2))
}
