use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum AppError {
    /// No entry matches the requested title.
    #[error("URL not found")]
    NotFound,
    /// The record source is misconfigured (missing URL or table id).
    #[error("{0}")]
    Config(String),
    /// The record source is configured but the fetch failed.
    #[error("Failed to process redirect")]
    Upstream(#[source] linkdeck_engine::RecordError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
