use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::UnknownFormat;
use crate::services::TemplateError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownFormat(#[from] UnknownFormat),

    #[error("Colour name not found: {0}")]
    NameNotFound(String),

    #[error("Rendering error: {0}")]
    Template(#[from] TemplateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownFormat(_) => StatusCode::BAD_REQUEST,
            ApiError::NameNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
