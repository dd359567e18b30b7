use crate::WebhookConfig;
use crate::error::{Result, WebhookError};
use crate::events::WebhookEvent;
use crate::parse::parse_webhook_event;
use crate::verify::verify_signature;
use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
};
use fleet_core::{Action, BranchIdentity, PipelineRequest};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

pub async fn handle_webhook(
    State(config): State<Arc<WebhookConfig>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode> {
    if let Err(e) = verify_signature(&headers, &body, &config.secret) {
        error!("Signature verification failed, IP: {}", addr.ip());
        return Err(e);
    }

    dispatch(&config, &headers, &body).await
}

async fn dispatch(config: &WebhookConfig, headers: &HeaderMap, body: &[u8]) -> Result<StatusCode> {
    let event = parse_webhook_event(headers, body)?;

    let Some(request) = pipeline_request(event)? else {
        return Ok(StatusCode::OK);
    };

    info!(
        "Queueing {} for {}/{}",
        request.action,
        request.identity.repository(),
        request.identity.branch()
    );

    config
        .pipeline_tx
        .send(request)
        .await
        .map_err(|_| WebhookError::WorkerUnavailable)?;

    Ok(StatusCode::ACCEPTED)
}

/// Maps an event to the pipeline operation it triggers, if any.
pub fn pipeline_request(event: WebhookEvent) -> Result<Option<PipelineRequest>> {
    let (action, owner, repository, branch) = match event {
        WebhookEvent::Ping => {
            info!("Received ping");
            return Ok(None);
        }
        WebhookEvent::Push {
            owner,
            repository,
            branch,
            deleted,
        } => {
            if !deleted {
                return Ok(None);
            }
            info!("Branch deleted: {}/{}", repository, branch);
            (Action::Delete, owner, repository, branch)
        }
        WebhookEvent::PullRequest {
            action,
            owner,
            repository,
            branch,
        } => match action.as_str() {
            "opened" | "reopened" => (Action::Create, owner, repository, branch),
            "closed" => (Action::Delete, owner, repository, branch),
            _ => {
                warn!("Ignoring PR action: {}", action);
                return Ok(None);
            }
        },
    };

    let identity = BranchIdentity::new(owner, repository, branch)
        .map_err(|e| WebhookError::InvalidPayload(e.to_string()))?;

    Ok(Some(PipelineRequest { identity, action }))
}
