use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gallery_core::error::CoreError;
use gallery_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`StoreError`]. Pages are served to browsers, so error bodies are short plain-text
/// messages; the underlying detail is only logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gallery_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the image store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const NOT_FOUND_MESSAGE: &str = "not found";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id = %id, "Entity not found");
                    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
                }
                // Only image id tokens in request paths are validated at
                // this edge; a bad token is reported as a server error.
                CoreError::Validation(msg) => {
                    tracing::warn!(error = %msg, "Invalid image id in path");
                    (StatusCode::INTERNAL_SERVER_ERROR, "invalid image id")
                }
            },

            // --- Store errors ---
            AppError::Store(StoreError::NotFound) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::Store(StoreError::Database(err)) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "error fetching image")
            }
        };

        (status, message).into_response()
    }
}
