use crate::error::{Result, WebhookError};
use crate::events::*;
use axum::http::HeaderMap;

const EVENT_HEADER: &str = "X-GitHub-Event";
const ZERO_SHA: &str = "0000000000000000000000000000000000000000";

pub fn parse_webhook_event(headers: &HeaderMap, body: &[u8]) -> Result<WebhookEvent> {
    let event_type = headers
        .get(EVENT_HEADER)
        .ok_or(WebhookError::MissingHeader(EVENT_HEADER))?
        .to_str()
        .map_err(|_| WebhookError::InvalidPayload("Invalid event header".to_string()))?;

    match event_type {
        "ping" => Ok(WebhookEvent::Ping),
        "push" => parse_push_event(body),
        "pull_request" => parse_pull_request_event(body),
        _ => Err(WebhookError::InvalidPayload(format!(
            "Unsupported event type: {}",
            event_type
        ))),
    }
}

fn parse_push_event(body: &[u8]) -> Result<WebhookEvent> {
    let event: GitHubPushEvent = serde_json::from_slice(body)?;

    let branch = event
        .git_ref
        .strip_prefix("refs/heads/")
        .unwrap_or(&event.git_ref)
        .to_string();

    Ok(WebhookEvent::Push {
        owner: event.repository.owner.login,
        repository: event.repository.name,
        branch,
        deleted: event.deleted || event.after == ZERO_SHA,
    })
}

fn parse_pull_request_event(body: &[u8]) -> Result<WebhookEvent> {
    let event: GitHubPullRequestEvent = serde_json::from_slice(body)?;

    Ok(WebhookEvent::PullRequest {
        action: event.action,
        owner: event.repository.owner.login,
        repository: event.repository.name,
        branch: event.pull_request.head.git_ref,
    })
}
