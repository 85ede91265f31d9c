//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Ledger inconsistencies (duplicate ids, balance mismatches) are not errors;
/// they travel as data inside the validation result. These variants only cover
/// requests that never reach the validator.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is not valid JSON or does not match the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Request body is well-formed but a field value is out of its allowed range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request body is larger than the configured limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MalformedBody(_) | Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::PayloadTooLarge(_) => 413,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }
}
