//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic data/domain failures (validation,
/// integrity, resolution). A single bad record degrades only its own derived
/// status; callers must never abort a whole aggregation over one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty or malformed).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A calendar date field failed to parse.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A foreign reference had no match in its target collection.
    ///
    /// Recoverable: display layers resolve this to the `"Unknown"` placeholder.
    #[error("dangling reference: {entity} {id}")]
    DanglingReference { entity: &'static str, id: String },

    /// A transaction's signed quantity disagrees with its declared direction.
    #[error("quantity sign disagrees with declared direction: {0}")]
    QuantitySignMismatch(String),

    /// A requested record was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// Authentication or capability check failed.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub fn dangling(entity: &'static str, id: impl Into<String>) -> Self {
        Self::DanglingReference {
            entity,
            id: id.into(),
        }
    }

    pub fn quantity_sign_mismatch(msg: impl Into<String>) -> Self {
        Self::QuantitySignMismatch(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
