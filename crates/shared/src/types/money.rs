//! Cent rounding for decimal money values.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`; rounding only decides equality and
//! what gets reported, it never feeds back into a running sum.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in a cent-rounded amount.
pub const CENT_SCALE: u32 = 2;

/// Rounds an amount to the nearest cent, halves away from zero.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true if both amounts are equal once rounded to cents.
#[must_use]
pub fn amounts_equal(a: Decimal, b: Decimal) -> bool {
    round_to_cents(a) == round_to_cents(b)
}
