//! Common types used across the application.

pub mod date;
pub mod money;

pub use date::parse_calendar_date;
pub use money::{CENT_SCALE, amounts_equal, round_to_cents};
