use async_trait::async_trait;
use fleet_core::{ProviderError, SecretResolver};
use std::sync::Arc;
use tracing::info;

/// Name of the environment variable that overrides secret `name`/`key`,
/// e.g. `github`/`read_from_github` -> `GITHUB_READ_FROM_GITHUB`.
pub fn secret_env_var(name: &str, key: &str) -> String {
    format!("{}_{}", name, key)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Checks the environment before falling back to another resolver, so local runs can
/// supply tokens without touching the secret store.
pub struct EnvSecretResolver {
    inner: Arc<dyn SecretResolver>,
    lookup: fn(&str) -> Option<String>,
}

impl EnvSecretResolver {
    pub fn new(inner: Arc<dyn SecretResolver>) -> Self {
        Self {
            inner,
            lookup: |var| std::env::var(var).ok(),
        }
    }

    pub fn with_lookup(inner: Arc<dyn SecretResolver>, lookup: fn(&str) -> Option<String>) -> Self {
        Self { inner, lookup }
    }
}

#[async_trait]
impl SecretResolver for EnvSecretResolver {
    async fn resolve(&self, name: &str, key: &str) -> Result<String, ProviderError> {
        let var = secret_env_var(name, key);

        if let Some(value) = (self.lookup)(&var).filter(|v| !v.is_empty()) {
            info!("Using secret {}/{} from environment variable {}", name, key, var);
            return Ok(value);
        }

        self.inner.resolve(name, key).await
    }
}
