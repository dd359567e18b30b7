use crate::error::{Result, WebhookError};
use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

pub fn verify_signature(headers: &HeaderMap, body: &[u8], secret: &str) -> Result<()> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .ok_or(WebhookError::MissingHeader(SIGNATURE_HEADER))?
        .to_str()
        .map_err(|_| WebhookError::InvalidSignature)?;

    let signature = signature
        .strip_prefix("sha256=")
        .ok_or(WebhookError::InvalidSignature)?;
    let signature = hex::decode(signature).map_err(|_| WebhookError::InvalidSignature)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| WebhookError::InvalidSignature)?;
    mac.update(body);

    // constant-time comparison
    mac.verify_slice(&signature)
        .map_err(|_| WebhookError::InvalidSignature)
}

#[cfg(test)]
pub(crate) fn sign(body: &[u8], secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}
