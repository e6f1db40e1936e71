use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tripdesk_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Sent back as plain text
    #[error("{0}")]
    ValidationError(String),
    /// Sent back as the given JSON body
    #[error("Not found: {0}")]
    NotFoundError(serde_json::Value),
    #[error("{0}")]
    ConflictError(String),
    #[error("{0}")]
    InternalServerError(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::NotFoundError(body) => (StatusCode::NOT_FOUND, Json(body)).into_response(),
            AppError::ConflictError(msg) => {
                (StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                internal(msg)
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {:#}", err);
                internal(err.to_string())
            }
        }
    }
}

fn internal(msg: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": msg }))).into_response()
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => AppError::ValidationError(msg),
            CoreError::PackageNotFound(package_id) => AppError::NotFoundError(json!({
                "message": "Travel package not found.",
                "packageId": package_id,
            })),
            CoreError::InsufficientSeats { .. } => AppError::ConflictError(err.to_string()),
            CoreError::Seed(_) | CoreError::Internal(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}
