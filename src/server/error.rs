//! Error responses for the portal routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced to HTTP clients as JSON bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Filename inválido.")]
    InvalidFilename,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::InvalidFilename => (
                StatusCode::BAD_REQUEST,
                "Filename inválido.".to_string(),
                None,
            ),
            // Relay the backend's status alongside its raw error text.
            ApiError::Backend(BackendError::Status {
                status,
                detail,
            }) => (
                StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "Erro ao buscar dados no backend.".to_string(),
                Some(detail),
            ),
            ApiError::Backend(BackendError::Transport(e)) => {
                tracing::error!("Backend request failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Erro interno: {}", e),
                    None,
                )
            }
        };

        let body = match detail {
            Some(detail) => json!({ "error": message, "detail": detail }),
            None => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
