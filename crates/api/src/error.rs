use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use roster_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Client errors carry a JSON body; not-found and store failures answer with
/// a bare status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A repository call failed while performing `operation`.
    #[error("Error {operation}: {source}")]
    Store {
        operation: &'static str,
        source: StoreError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` that tags a store failure with the operation name.
    ///
    /// ```ignore
    /// state.people.get_all().await.map_err(AppError::store("getting all people"))?;
    /// ```
    pub fn store(operation: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { operation, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::Store { operation, source } => {
                tracing::error!(operation, error = %source, "Error {operation}: {source}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
