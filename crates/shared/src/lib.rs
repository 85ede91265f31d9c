//! Shared types, errors, and configuration for Banksync.
//!
//! This crate provides common types used across all other crates:
//! - Cent rounding helpers for decimal money values
//! - Calendar-date parsing for ISO-8601 request fields
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
