use crate::types::ProductId;

/// Outcome category of a gateway operation.
///
/// Front ends branch on this to pick a status code, a message tag, or a
/// console notice. It never has to be recovered from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Success,
    ValidationFailed,
    NotFound,
    Conflict,
    NoOp,
    DatabaseError,
}

impl OutcomeKind {
    /// Stable machine-readable code, e.g. `NOT_FOUND`.
    pub fn code(self) -> &'static str {
        match self {
            OutcomeKind::Success => "SUCCESS",
            OutcomeKind::ValidationFailed => "VALIDATION_FAILED",
            OutcomeKind::NotFound => "NOT_FOUND",
            OutcomeKind::Conflict => "CONFLICT",
            OutcomeKind::NoOp => "NO_OP",
            OutcomeKind::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Bracketed prefix used by human-readable status lines.
    pub fn tag(self) -> &'static str {
        match self {
            OutcomeKind::Success => "[SUCCESS]",
            OutcomeKind::ValidationFailed => "[VALIDATION FAILED]",
            OutcomeKind::NotFound => "[NOT FOUND]",
            OutcomeKind::Conflict => "[CONFLICT]",
            OutcomeKind::NoOp => "[INFO]",
            OutcomeKind::DatabaseError => "[ERROR]",
        }
    }
}

/// Failure half of every gateway result.
///
/// `Ok(_)` is the success case; each variant here is one named failure
/// category. Store failures are wrapped into [`CoreError::Database`] at the
/// gateway boundary so no driver error reaches a front end.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("{reason}")]
    ValidationFailed { reason: String },

    #[error("Product with ID {id} not found.")]
    NotFound { id: ProductId },

    #[error("Product ID {id} already exists.")]
    Conflict { id: ProductId },

    #[error("No update values provided.")]
    NoChanges,

    #[error("Database error: {detail}")]
    Database { detail: String },
}

impl CoreError {
    pub fn validation(reason: impl Into<String>) -> Self {
        CoreError::ValidationFailed {
            reason: reason.into(),
        }
    }

    pub fn database(detail: impl Into<String>) -> Self {
        CoreError::Database {
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            CoreError::ValidationFailed { .. } => OutcomeKind::ValidationFailed,
            CoreError::NotFound { .. } => OutcomeKind::NotFound,
            CoreError::Conflict { .. } => OutcomeKind::Conflict,
            CoreError::NoChanges => OutcomeKind::NoOp,
            CoreError::Database { .. } => OutcomeKind::DatabaseError,
        }
    }
}

/// Result type returned by every gateway operation.
pub type CoreResult<T> = Result<T, CoreError>;
