//! Movement validation routes.
//!
//! `POST /movements/validation` checks a batch of movements against declared
//! balance checkpoints:
//! - 200 `{"message": "Accepted"}` when consistent
//! - 422 `{"message": "Validation failed", "reasons": [...]}` otherwise
//! - 400 when the body is malformed (handled by [`ValidatedJson`])

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::{Validate, ValidationError};

use crate::{AppState, extractors::ValidatedJson};
use banksync_core::movements::{BalanceCheckpoint, Movement, ValidationReason, ValidationResult};

/// Largest accepted absolute amount or balance.
const MAX_ABS_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Creates the movement validation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/movements/validation", post(validate_movements))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for validating movements.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ValidateMovementsRequest {
    /// Movements to validate.
    #[validate(length(min = 1, message = "at least one movement is required"), nested)]
    pub movements: Vec<MovementRequest>,
    /// Balance checkpoints to reconcile against.
    #[validate(length(min = 1, message = "at least one balance is required"), nested)]
    pub balances: Vec<BalanceRequest>,
}

/// A movement as submitted by the client.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MovementRequest {
    /// Operation ID.
    #[validate(range(min = 1, message = "movement id must be 1 or greater"))]
    pub id: u64,
    /// Date (ISO 8601).
    #[serde(deserialize_with = "banksync_shared::types::date::deserialize")]
    pub date: NaiveDate,
    /// Label.
    pub label: String,
    /// Signed amount.
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
}

/// A balance checkpoint as submitted by the client.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BalanceRequest {
    /// Checkpoint date (ISO 8601).
    #[serde(deserialize_with = "banksync_shared::types::date::deserialize")]
    pub date: NaiveDate,
    /// Expected balance.
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_amount"))]
    pub balance: Decimal,
}

/// Response when the ledger is consistent.
#[derive(Debug, Serialize)]
pub struct AcceptedResponse {
    /// Always `"Accepted"`.
    pub message: &'static str,
}

/// Response when the ledger is inconsistent.
#[derive(Debug, Serialize)]
pub struct ValidationFailedResponse {
    /// Always `"Validation failed"`.
    pub message: &'static str,
    /// Why the ledger was rejected.
    pub reasons: Vec<ValidationReason>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.abs() > MAX_ABS_AMOUNT {
        let mut err = ValidationError::new("amount_out_of_range");
        err.message = Some("amount must be between -10^15 and 10^15".into());
        return Err(err);
    }
    Ok(())
}

impl ValidateMovementsRequest {
    /// Converts the request into core domain values.
    #[must_use]
    pub fn into_domain(self) -> (Vec<Movement>, Vec<BalanceCheckpoint>) {
        let movements = self
            .movements
            .into_iter()
            .map(|m| Movement::new(m.id, m.date, m.label, m.amount))
            .collect();
        let balances = self
            .balances
            .into_iter()
            .map(|b| BalanceCheckpoint::new(b.date, b.balance))
            .collect();
        (movements, balances)
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /movements/validation
async fn validate_movements(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ValidateMovementsRequest>,
) -> Response {
    let (movements, balances) = request.into_domain();

    match state.validator.validate(&movements, &balances) {
        ValidationResult::Valid => {
            info!(
                movements = movements.len(),
                balances = balances.len(),
                "Movements accepted"
            );
            (StatusCode::OK, Json(AcceptedResponse { message: "Accepted" })).into_response()
        }
        ValidationResult::Invalid { reasons } => {
            warn!(
                movements = movements.len(),
                balances = balances.len(),
                reasons = reasons.len(),
                "Movements rejected"
            );
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationFailedResponse {
                    message: "Validation failed",
                    reasons,
                }),
            )
                .into_response()
        }
    }
}
