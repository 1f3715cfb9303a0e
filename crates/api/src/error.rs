use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use composer_core::error::ProviderError;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{ "detail": "<message>" }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The upstream provider call failed. Reported as 500 with the
    /// provider's error text.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The request body was rejected before reaching the handler.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The provider did not answer within the whole-request limit
    /// (`REQUEST_TIMEOUT_SECS`). Reported as 500 like any upstream failure.
    #[error("Prompt generation timed out after {0} seconds")]
    Timeout(u64),

    /// A programming error (e.g. a handler panic). The message is logged
    /// but not returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// No route matches the request path.
    pub fn not_found() -> Self {
        AppError::Rejected {
            status: StatusCode::NOT_FOUND,
            message: "Not Found".to_string(),
        }
    }

    /// The path exists but not for this method.
    pub fn method_not_allowed() -> Self {
        AppError::Rejected {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: "Method Not Allowed".to_string(),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Provider(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::Timeout(_) => {
                tracing::warn!(error = %self, "Request timed out");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Rejected { status, message } => {
                tracing::debug!(%status, error = %message, "Request rejected");
                (*status, message.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}
