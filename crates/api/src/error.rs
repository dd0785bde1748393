use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use trivia_core::error::CoreError;
use trivia_db::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for read-path
/// persistence failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce the `{success, error, message}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure outside of a write (reported as 500).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A write failed in the store and was rolled back.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// The request body could not be read as JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// The route exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorBody {
    fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

pub const MSG_NOT_FOUND: &str = "resource not found";
pub const MSG_UNPROCESSABLE: &str = "unprocessable";
pub const MSG_BAD_REQUEST: &str = "bad request";
pub const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const MSG_REQUEST_TIMEOUT: &str = "request timeout";
pub const MSG_INTERNAL: &str = "internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::NoResults(_) => {
                    tracing::debug!(error = %core, "Not found");
                    (StatusCode::NOT_FOUND, MSG_NOT_FOUND)
                }
                CoreError::Validation(msg) => {
                    tracing::debug!(error = %msg, "Validation failed");
                    (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE)
                }
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
            }

            // --- HTTP-specific errors ---
            AppError::Unprocessable(msg) => {
                tracing::warn!(error = %msg, "Write rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE)
            }
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST)
            }
            AppError::RouteNotFound(path) => {
                tracing::debug!(path = %path, "No matching route");
                (StatusCode::NOT_FOUND, MSG_NOT_FOUND)
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED),
            AppError::RequestTimeout => {
                tracing::warn!("Request timed out");
                (StatusCode::REQUEST_TIMEOUT, MSG_REQUEST_TIMEOUT)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL)
            }
        };

        (status, axum::Json(ErrorBody::new(status, message))).into_response()
    }
}

/// Map a failed write into [`AppError::Unprocessable`], logging the cause.
///
/// Used by the create and delete handlers, where every store failure is
/// reported as 422 after the store has rolled the transaction back.
pub fn write_failed(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |err| {
        tracing::error!(error = %err, context, "Store write failed");
        AppError::Unprocessable(format!("{context}: {err}"))
    }
}
