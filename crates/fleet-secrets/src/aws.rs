use async_trait::async_trait;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use fleet_core::{ErrorKind, ProviderError, SecretResolver, classify};
use tracing::debug;

const SERVICE: &str = "secretsmanager";

pub struct AwsSecretsResolver {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretsResolver {
    pub fn new(client: aws_sdk_secretsmanager::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretResolver for AwsSecretsResolver {
    async fn resolve(&self, name: &str, key: &str) -> Result<String, ProviderError> {
        debug!("Reading secret {}/{}", name, key);

        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                let kind = match &e {
                    SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
                        ErrorKind::Transient
                    }
                    _ => classify(e.code(), e.message()),
                };
                ProviderError::new(SERVICE, kind, DisplayErrorContext(&e).to_string())
            })?;

        let secret_string = output.secret_string().ok_or_else(|| {
            ProviderError::not_found(SERVICE, format!("secret {} has no string value", name))
        })?;

        parse_secret_value(secret_string, key)
    }
}

/// Secrets are stored as JSON objects; returns the string stored under `key`.
pub fn parse_secret_value(secret_string: &str, key: &str) -> Result<String, ProviderError> {
    let value: serde_json::Value = serde_json::from_str(secret_string)
        .map_err(|e| ProviderError::fatal(SERVICE, format!("secret is not valid JSON: {}", e)))?;

    value
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| ProviderError::not_found(SERVICE, format!("secret has no key {}", key)))
}
