use crate::Result;
use crate::info::SwaggerHubInfo;
use crate::provider::DocsProvider;
use std::sync::Arc;
use tracing::{info, warn};

/// Removes the documentation of one branch deployment.
pub struct SwaggerHubUpdater {
    docs: Arc<dyn DocsProvider>,
    info: SwaggerHubInfo,
    primary: bool,
}

impl SwaggerHubUpdater {
    pub fn new(
        docs: Arc<dyn DocsProvider>,
        canonical: &SwaggerHubInfo,
        stack_name: &str,
        branch: &str,
        primary_branch: &str,
    ) -> Self {
        Self {
            docs,
            info: canonical.for_branch(stack_name, branch, primary_branch),
            primary: branch == primary_branch,
        }
    }

    /// The primary branch only drops its configured version of the shared document; other
    /// branches remove their whole document.
    pub async fn delete_api(&self) -> Result<u16> {
        let status = if self.primary {
            self.docs
                .delete_api_version(
                    &self.info.organization,
                    &self.info.api_id,
                    &self.info.api_version,
                )
                .await?
        } else {
            self.docs
                .delete_api(&self.info.organization, &self.info.api_id)
                .await?
        };

        log_status("delete", &self.info, status);
        Ok(status)
    }
}

fn log_status(operation: &str, info: &SwaggerHubInfo, status: u16) {
    if (200..300).contains(&status) {
        info!(
            "SwaggerHub {} of {}/{} returned {}",
            operation, info.organization, info.api_id, status
        );
    } else {
        warn!(
            "SwaggerHub {} of {}/{} returned {}",
            operation, info.organization, info.api_id, status
        );
    }
}
