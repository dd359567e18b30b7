use crate::Result;
use async_trait::async_trait;

/// Flags sent with every document upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    pub force: bool,
    pub is_private: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            force: true,
            is_private: false,
        }
    }
}

/// API documentation registry. Every call returns the HTTP status code the registry answered
/// with; only transport failures are errors.
#[async_trait]
pub trait DocsProvider: Send + Sync {
    async fn delete_api(&self, organization: &str, api_id: &str) -> Result<u16>;

    async fn delete_api_version(
        &self,
        organization: &str,
        api_id: &str,
        version: &str,
    ) -> Result<u16>;

    async fn update_api(
        &self,
        organization: &str,
        api_id: &str,
        version: &str,
        body: &str,
        options: UpdateOptions,
    ) -> Result<u16>;
}
