use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stockroom_core::error::{CoreError, OutcomeKind};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for gateway outcomes and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failed gateway outcome.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body did not satisfy the DTO schema.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                OutcomeKind::ValidationFailed.code(),
                errors.to_string(),
            ),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a gateway outcome to an HTTP status, error code, and message.
///
/// - Not found maps to 404.
/// - Validation failures, duplicate ids and empty updates map to 400.
/// - Database failures map to 500 with a sanitized message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    let code = err.kind().code();
    match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, code, err.to_string()),
        CoreError::ValidationFailed { .. } | CoreError::Conflict { .. } | CoreError::NoChanges => {
            (StatusCode::BAD_REQUEST, code, err.to_string())
        }
        CoreError::Database { detail } => {
            tracing::error!(error = %detail, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
