//! Core business logic for Banksync.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `movements` - Duplicate detection and balance checkpoint reconciliation

pub mod movements;

pub use movements::{
    BalanceCheckpoint, Movement, MovementValidator, ReasonKind, ValidationOptions,
    ValidationReason, ValidationResult,
};
