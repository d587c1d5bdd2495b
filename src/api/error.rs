use crate::utils::error::FacadeError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
    pub error: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn from_error(error: &FacadeError) -> Self {
        Self {
            message: error.to_string(),
            status: status_code(error).as_u16(),
            error: error.kind().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

pub fn status_code(error: &FacadeError) -> StatusCode {
    match error {
        // 400 Bad Request
        FacadeError::Validation { .. } | FacadeError::EmptyResult { .. } => StatusCode::BAD_REQUEST,

        // 404 Not Found
        FacadeError::NotFound { .. } => StatusCode::NOT_FOUND,

        // 502 Bad Gateway
        FacadeError::Transport(_) | FacadeError::Decode(_) => StatusCode::BAD_GATEWAY,

        // 500 Internal Server Error
        FacadeError::Config { .. } | FacadeError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::from_error(&self);
        if self.is_client_error() {
            tracing::warn!("Request rejected ({}): {}", body.error, body.message);
        } else {
            tracing::error!("Request failed ({}): {}", body.error, body.message);
        }
        (status_code(&self), Json(body)).into_response()
    }
}
