//! Property-based tests for movement validation.
//!
//! Covers: checkpoint order independence, no false duplicate positives,
//! sub-cent rounding tolerance, inclusive date boundary and independent
//! same-date checkpoints.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::duplicates::find_duplicate_ids;
use super::reconcile::check_balances;
use super::service::MovementValidator;
use super::types::{BalanceCheckpoint, Movement, ReasonKind, ValidationReason, ValidationResult};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Strategy for a date within the first year after the base date.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..365).prop_map(|offset| base_date() + Days::new(offset))
}

/// Strategy for a signed amount from -10,000.00 to 10,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn movement_strategy() -> impl Strategy<Value = Movement> {
    (1u64..50, date_strategy(), amount_strategy())
        .prop_map(|(id, date, amount)| Movement::new(id, date, "op", amount))
}

fn checkpoint_strategy() -> impl Strategy<Value = BalanceCheckpoint> {
    (date_strategy(), amount_strategy())
        .prop_map(|(date, balance)| BalanceCheckpoint::new(date, balance))
}

fn exact_sum_through(movements: &[Movement], date: NaiveDate) -> Decimal {
    movements
        .iter()
        .filter(|m| m.date <= date)
        .map(|m| m.amount)
        .sum()
}

fn mismatch_dates(result: &ValidationResult) -> Vec<NaiveDate> {
    result
        .reasons()
        .iter()
        .filter_map(|r| match r {
            ValidationReason::BalanceMismatch { date, .. } => Some(*date),
            ValidationReason::DuplicateIds { .. } => None,
        })
        .collect()
}

/// Mismatch reasons as a sorted multiset of `(date, expected, computed, difference)`.
fn mismatch_keys(result: &ValidationResult) -> Vec<(NaiveDate, Decimal, Decimal, Decimal)> {
    let mut keys: Vec<_> = result
        .reasons()
        .iter()
        .filter_map(|r| match r {
            ValidationReason::BalanceMismatch {
                date,
                expected_balance,
                computed_sum,
                difference,
                ..
            } => Some((*date, *expected_balance, *computed_sum, *difference)),
            ValidationReason::DuplicateIds { .. } => None,
        })
        .collect();
    keys.sort();
    keys
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Permuting checkpoints yields the same mismatch reasons. Only reasons for
    /// checkpoints sharing a date may trade places, since ties keep input order.
    #[test]
    fn prop_checkpoint_order_independent(
        movements in prop::collection::vec(movement_strategy(), 1..30),
        (balances, shuffled) in prop::collection::vec(checkpoint_strategy(), 1..20)
            .prop_flat_map(|b| (Just(b.clone()), Just(b).prop_shuffle())),
    ) {
        let validator = MovementValidator::default();
        let original = validator.validate(&movements, &balances);
        let permuted = validator.validate(&movements, &shuffled);

        prop_assert_eq!(original.is_valid(), permuted.is_valid());
        prop_assert_eq!(mismatch_keys(&original), mismatch_keys(&permuted));
        prop_assert_eq!(mismatch_dates(&original), mismatch_dates(&permuted));
    }

    /// With distinct checkpoint dates the output is identical for any order.
    #[test]
    fn prop_distinct_date_checkpoints_identical(
        movements in prop::collection::vec(movement_strategy(), 1..30),
        (balances, shuffled) in prop::collection::btree_map(date_strategy(), amount_strategy(), 1..20)
            .prop_map(|m| {
                m.into_iter()
                    .map(|(date, balance)| BalanceCheckpoint::new(date, balance))
                    .collect::<Vec<_>>()
            })
            .prop_flat_map(|b| (Just(b.clone()), Just(b).prop_shuffle())),
    ) {
        let validator = MovementValidator::default();
        prop_assert_eq!(
            validator.validate(&movements, &balances),
            validator.validate(&movements, &shuffled)
        );
    }

    /// Mismatch reasons always come out by ascending checkpoint date.
    #[test]
    fn prop_mismatches_ascending(
        movements in prop::collection::vec(movement_strategy(), 1..30),
        balances in prop::collection::vec(checkpoint_strategy(), 1..20),
    ) {
        let dates: Vec<NaiveDate> = check_balances(&movements, &balances)
            .iter()
            .filter_map(|r| match r {
                ValidationReason::BalanceMismatch { date, .. } => Some(*date),
                ValidationReason::DuplicateIds { .. } => None,
            })
            .collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Pairwise distinct ids never produce a duplicate reason.
    #[test]
    fn prop_distinct_ids_no_duplicates(
        ids in prop::collection::hash_set(1u64..10_000, 1..100),
    ) {
        let ids: Vec<u64> = ids.into_iter().collect();
        prop_assert!(find_duplicate_ids(ids.iter().copied()).is_empty());

        let movements: Vec<Movement> = ids
            .iter()
            .map(|id| Movement::new(*id, base_date(), "op", Decimal::ONE))
            .collect();
        let balance = BalanceCheckpoint::new(base_date(), Decimal::from(movements.len()));
        prop_assert_eq!(
            MovementValidator::default().validate(&movements, &[balance]),
            ValidationResult::Valid
        );
    }

    /// Every repeated id is reported exactly once, ascending.
    #[test]
    fn prop_duplicates_sorted_and_distinct(
        ids in prop::collection::vec(1u64..20, 0..60),
    ) {
        let duplicates = find_duplicate_ids(ids.iter().copied());
        prop_assert!(duplicates.windows(2).all(|w| w[0] < w[1]));
        for id in &duplicates {
            prop_assert!(ids.iter().filter(|x| *x == id).count() > 1);
        }
        for id in &ids {
            let repeated = ids.iter().filter(|x| *x == id).count() > 1;
            prop_assert_eq!(repeated, duplicates.contains(id));
        }
    }

    /// A balance within less than half a cent of the true sum is accepted.
    #[test]
    fn prop_sub_cent_difference_tolerated(
        movements in prop::collection::vec(movement_strategy(), 1..30),
        checkpoint_date in date_strategy(),
        noise in -49i64..=49,
    ) {
        let sum = exact_sum_through(&movements, checkpoint_date);
        // noise in tenths of a millicent keeps |balance - sum| < 0.005
        let balance = sum + Decimal::new(noise, 4);
        let reasons = check_balances(&movements, &[BalanceCheckpoint::new(checkpoint_date, balance)]);
        prop_assert!(reasons.is_empty(), "unexpected reasons: {:?}", reasons);
    }

    /// A movement dated exactly on the checkpoint date is counted.
    #[test]
    fn prop_inclusive_boundary(
        movements in prop::collection::vec(movement_strategy(), 0..30),
        checkpoint_date in date_strategy(),
        amount in amount_strategy(),
    ) {
        prop_assume!(!amount.is_zero());
        let mut movements = movements;
        movements.push(Movement::new(999, checkpoint_date, "boundary", amount));

        let with_boundary = exact_sum_through(&movements, checkpoint_date);
        let checkpoint = BalanceCheckpoint::new(checkpoint_date, with_boundary);
        prop_assert!(check_balances(&movements, &[checkpoint]).is_empty());

        let without_boundary = BalanceCheckpoint::new(checkpoint_date, with_boundary - amount);
        prop_assert_eq!(check_balances(&movements, &[without_boundary]).len(), 1);
    }

    /// Disagreeing checkpoints on the same date each get their own reason.
    #[test]
    fn prop_same_date_checkpoints_independent(
        movements in prop::collection::vec(movement_strategy(), 1..30),
        checkpoint_date in date_strategy(),
        offset_a in 1i64..1_000_000,
        offset_b in 1i64..1_000_000,
    ) {
        let sum = exact_sum_through(&movements, checkpoint_date);
        let balances = [
            BalanceCheckpoint::new(checkpoint_date, sum + Decimal::new(offset_a, 2)),
            BalanceCheckpoint::new(checkpoint_date, sum - Decimal::new(offset_b, 2)),
        ];
        let result = MovementValidator::default().validate(&movements, &balances);
        let mismatches = result
            .reasons()
            .iter()
            .filter(|r| r.kind() == ReasonKind::BalanceMismatch)
            .count();
        prop_assert_eq!(mismatches, 2);
    }
}
