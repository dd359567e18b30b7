mod error;
mod events;
mod handler;
mod parse;
mod verify;

pub use error::{Result, WebhookError};
pub use events::WebhookEvent;
pub use handler::pipeline_request;

use axum::{Router, routing::post};
use fleet_core::PipelineRequest;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct WebhookConfig {
    pub secret: String,
    pub pipeline_tx: mpsc::Sender<PipelineRequest>,
}

pub fn router(config: WebhookConfig) -> Router {
    Router::new()
        .route("/webhook", post(handler::handle_webhook))
        .with_state(Arc::new(config))
}
