use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("signature verification failed")]
    InvalidSignature,

    #[error("invalid webhook payload: {0}")]
    InvalidPayload(String),

    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("pipeline worker unavailable")]
    WorkerUnavailable,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WebhookError>;

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebhookError::InvalidSignature => StatusCode::UNAUTHORIZED,
            WebhookError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            WebhookError::MissingHeader(_) => StatusCode::BAD_REQUEST,
            WebhookError::WorkerUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            WebhookError::Json(_) => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
