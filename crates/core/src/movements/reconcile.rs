//! Cumulative balance reconciliation.
//!
//! Every checkpoint is compared against the sum of all movements dated on or
//! before it. Checkpoints are evaluated in ascending date order (stable, so
//! equal dates keep their input order) and each one is independent: two
//! checkpoints on the same date are never merged.

use chrono::NaiveDate;
use rayon::prelude::*;
use rust_decimal::Decimal;

use banksync_shared::types::{amounts_equal, round_to_cents};

use super::reason;
use super::types::{BalanceCheckpoint, Movement, ValidationOptions, ValidationReason};

/// Running totals of movements, sorted by date.
///
/// Answers "sum of every movement dated on or before `date`" with a binary
/// search instead of rescanning the movements for each checkpoint.
#[derive(Debug, Clone)]
pub struct BalanceTimeline {
    dates: Vec<NaiveDate>,
    running_totals: Vec<Decimal>,
}

impl BalanceTimeline {
    /// Builds the timeline from movements in any order.
    #[must_use]
    pub fn new(movements: &[Movement]) -> Self {
        let mut dated: Vec<(NaiveDate, Decimal)> =
            movements.iter().map(|m| (m.date, m.amount)).collect();
        dated.sort_by_key(|(date, _)| *date);

        let mut running = Decimal::ZERO;
        let (dates, running_totals) = dated
            .into_iter()
            .map(|(date, amount)| {
                running += amount;
                (date, running)
            })
            .unzip();

        Self {
            dates,
            running_totals,
        }
    }

    /// Sum of every movement dated on or before `date`.
    #[must_use]
    pub fn sum_through(&self, date: NaiveDate) -> Decimal {
        match self.dates.partition_point(|d| *d <= date) {
            0 => Decimal::ZERO,
            n => self.running_totals[n - 1],
        }
    }
}

/// Reconciles checkpoints with default options.
#[must_use]
pub fn check_balances(
    movements: &[Movement],
    balances: &[BalanceCheckpoint],
) -> Vec<ValidationReason> {
    check_balances_with(movements, balances, ValidationOptions::default())
}

/// Reconciles checkpoints, returning one mismatch reason per failing checkpoint
/// in ascending checkpoint-date order.
///
/// Large checkpoint sets are evaluated on the rayon pool; the output is the
/// same as the sequential path.
#[must_use]
pub fn check_balances_with(
    movements: &[Movement],
    balances: &[BalanceCheckpoint],
    options: ValidationOptions,
) -> Vec<ValidationReason> {
    let timeline = BalanceTimeline::new(movements);

    let mut ordered: Vec<&BalanceCheckpoint> = balances.iter().collect();
    ordered.sort_by_key(|checkpoint| checkpoint.date);

    if ordered.len() >= options.parallel_threshold {
        ordered
            .par_iter()
            .filter_map(|checkpoint| reconcile_checkpoint(&timeline, checkpoint))
            .collect()
    } else {
        ordered
            .iter()
            .filter_map(|checkpoint| reconcile_checkpoint(&timeline, checkpoint))
            .collect()
    }
}

fn reconcile_checkpoint(
    timeline: &BalanceTimeline,
    checkpoint: &BalanceCheckpoint,
) -> Option<ValidationReason> {
    let sum = timeline.sum_through(checkpoint.date);
    if amounts_equal(sum, checkpoint.balance) {
        return None;
    }

    Some(reason::balance_mismatch(
        checkpoint.date,
        checkpoint.balance,
        round_to_cents(sum),
        round_to_cents(sum - checkpoint.balance),
    ))
}
