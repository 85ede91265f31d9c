//! Movement and balance checkpoint validation.
//!
//! This module implements the ledger consistency checks:
//! - Duplicate movement id detection
//! - Cumulative balance reconciliation against dated checkpoints
//! - Typed, human-readable inconsistency reasons
//! - The validator that runs both checks and produces a verdict

pub mod duplicates;
pub mod reason;
pub mod reconcile;
pub mod service;
pub mod types;

#[cfg(test)]
mod validation_props;

pub use duplicates::find_duplicate_ids;
pub use reconcile::{BalanceTimeline, check_balances, check_balances_with};
pub use service::MovementValidator;
pub use types::{
    BalanceCheckpoint, Movement, ReasonKind, ValidationOptions, ValidationReason,
    ValidationResult,
};
