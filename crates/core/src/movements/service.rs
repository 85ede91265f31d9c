//! Ledger validation service.
//!
//! Runs duplicate detection and balance reconciliation and merges their
//! findings into a single verdict. Pure business logic: no I/O, no shared
//! state, deterministic for a given input.

use super::duplicates::find_duplicate_ids;
use super::reason;
use super::reconcile::check_balances_with;
use super::types::{BalanceCheckpoint, Movement, ValidationOptions, ValidationResult};

/// Validates movements against balance checkpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementValidator {
    options: ValidationOptions,
}

impl MovementValidator {
    /// Creates a validator with the given options.
    #[must_use]
    pub const fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Returns the options this validator runs with.
    #[must_use]
    pub const fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Validates a submitted ledger.
    ///
    /// Both checks always run. Reasons are ordered duplicate ids first, then
    /// balance mismatches by ascending checkpoint date. Inconsistencies are
    /// reported in the result, never as errors.
    ///
    /// Callers guarantee both slices are non-empty and well-formed.
    #[must_use]
    pub fn validate(
        &self,
        movements: &[Movement],
        balances: &[BalanceCheckpoint],
    ) -> ValidationResult {
        let mut reasons = Vec::new();

        let duplicate_ids = find_duplicate_ids(movements.iter().map(|m| m.id));
        if !duplicate_ids.is_empty() {
            reasons.push(reason::duplicate_ids(duplicate_ids));
        }

        reasons.extend(check_balances_with(movements, balances, self.options));

        ValidationResult::from_reasons(reasons)
    }
}
