//! Movement validation domain types.
//!
//! Reasons and results serialize to the wire shape clients consume:
//! a `kind` discriminator, camelCase field names and decimals as JSON numbers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A single dated, signed monetary entry.
///
/// Ids come from the caller and are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    /// Caller-supplied operation id (1 or greater).
    pub id: u64,
    /// Calendar date the movement was booked on.
    pub date: NaiveDate,
    /// Free-form label.
    pub label: String,
    /// Signed amount.
    pub amount: Decimal,
}

impl Movement {
    /// Creates a new movement.
    #[must_use]
    pub fn new(id: u64, date: NaiveDate, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id,
            date,
            label: label.into(),
            amount,
        }
    }
}

/// A declared balance expected to hold as of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceCheckpoint {
    /// Checkpoint date (inclusive).
    pub date: NaiveDate,
    /// Declared balance.
    pub balance: Decimal,
}

impl BalanceCheckpoint {
    /// Creates a new checkpoint.
    #[must_use]
    pub const fn new(date: NaiveDate, balance: Decimal) -> Self {
        Self { date, balance }
    }
}

/// Discriminator for [`ValidationReason`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonKind {
    /// Two or more movements share an id.
    DuplicateIds,
    /// A checkpoint disagrees with the cumulative movement sum.
    BalanceMismatch,
}

impl ReasonKind {
    /// Returns the wire code of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateIds => "DUPLICATE_IDS",
            Self::BalanceMismatch => "BALANCE_MISMATCH",
        }
    }
}

impl std::fmt::Display for ReasonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a submitted ledger was rejected.
///
/// `message` is diagnostic text only; the other fields are normative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ValidationReason {
    /// Movement ids that occur more than once.
    #[serde(rename = "DUPLICATE_IDS", rename_all = "camelCase")]
    DuplicateIds {
        /// Distinct duplicated ids, ascending.
        duplicate_ids: Vec<u64>,
        /// Human-readable advice.
        message: String,
    },

    /// Cumulative movements disagree with a declared checkpoint balance.
    #[serde(rename = "BALANCE_MISMATCH", rename_all = "camelCase")]
    BalanceMismatch {
        /// Checkpoint date.
        date: NaiveDate,
        /// Declared balance, as given.
        #[serde(with = "rust_decimal::serde::float")]
        expected_balance: Decimal,
        /// Sum of movements up to and including `date`, rounded to cents.
        #[serde(with = "rust_decimal::serde::float")]
        computed_sum: Decimal,
        /// `computed - expected`, rounded to cents.
        #[serde(with = "rust_decimal::serde::float")]
        difference: Decimal,
        /// Human-readable explanation.
        message: String,
    },
}

impl ValidationReason {
    /// Returns the discriminator of this reason.
    #[must_use]
    pub const fn kind(&self) -> ReasonKind {
        match self {
            Self::DuplicateIds { .. } => ReasonKind::DuplicateIds,
            Self::BalanceMismatch { .. } => ReasonKind::BalanceMismatch,
        }
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DuplicateIds { message, .. } | Self::BalanceMismatch { message, .. } => message,
        }
    }
}

/// Verdict of a ledger validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// No inconsistency found.
    Valid,
    /// At least one inconsistency found.
    Invalid {
        /// Duplicate-id findings first, then balance mismatches by ascending date.
        reasons: Vec<ValidationReason>,
    },
}

impl ValidationResult {
    /// Builds a result from collected reasons: `Valid` when there are none.
    #[must_use]
    pub fn from_reasons(reasons: Vec<ValidationReason>) -> Self {
        if reasons.is_empty() {
            Self::Valid
        } else {
            Self::Invalid { reasons }
        }
    }

    /// Returns true if the ledger is consistent.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the reasons, empty when valid.
    #[must_use]
    pub fn reasons(&self) -> &[ValidationReason] {
        match self {
            Self::Valid => &[],
            Self::Invalid { reasons } => reasons,
        }
    }
}

/// Tuning knobs for validation. They never change the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Checkpoint count from which reconciliation runs on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
        }
    }
}
