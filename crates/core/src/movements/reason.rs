//! Builds typed reasons and their diagnostic messages.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::ValidationReason;

/// Advice attached to every duplicate-id reason.
pub const DUPLICATE_IDS_MESSAGE: &str = "Duplicate operations found; merge or remove them.";

/// Builds a duplicate-ids reason.
#[must_use]
pub fn duplicate_ids(duplicate_ids: Vec<u64>) -> ValidationReason {
    ValidationReason::DuplicateIds {
        duplicate_ids,
        message: DUPLICATE_IDS_MESSAGE.to_string(),
    }
}

/// Builds a balance-mismatch reason.
///
/// `computed_sum` and `difference` are expected already rounded to cents.
#[must_use]
pub fn balance_mismatch(
    date: NaiveDate,
    expected_balance: Decimal,
    computed_sum: Decimal,
    difference: Decimal,
) -> ValidationReason {
    ValidationReason::BalanceMismatch {
        date,
        expected_balance,
        computed_sum,
        difference,
        message: mismatch_message(date, expected_balance, computed_sum, difference),
    }
}

fn mismatch_message(
    date: NaiveDate,
    expected_balance: Decimal,
    computed_sum: Decimal,
    difference: Decimal,
) -> String {
    let base = format!(
        "On {date}: expected {}, computed {}",
        expected_balance.normalize(),
        computed_sum.normalize()
    );
    if difference > Decimal::ZERO {
        format!(
            "{base} (difference +{}). Duplicate or extraneous operations.",
            difference.normalize()
        )
    } else {
        format!(
            "{base} (difference {}). Missing operations.",
            difference.normalize()
        )
    }
}
