use crate::Result;
use crate::provider::{CustomDomainProvider, DnsProvider, RecordChange};
use crate::static_url::StaticUrlInfo;
use std::sync::Arc;
use tracing::{info, warn};

/// Detaches a branch's static url from its RestApi.
pub struct Route53Updater {
    static_url: StaticUrlInfo,
    rest_api_id: String,
    dns: Arc<dyn DnsProvider>,
    domains: Arc<dyn CustomDomainProvider>,
}

impl Route53Updater {
    pub fn new(
        static_url: StaticUrlInfo,
        rest_api_id: impl Into<String>,
        dns: Arc<dyn DnsProvider>,
        domains: Arc<dyn CustomDomainProvider>,
    ) -> Self {
        Self {
            static_url,
            rest_api_id: rest_api_id.into(),
            dns,
            domains,
        }
    }

    /// Builds the deletion of the alias record, or `None` when no alias exists.
    pub async fn create_delete_request(&self) -> Result<Option<RecordChange>> {
        let record = self
            .dns
            .find_alias_record(&self.static_url.zone_name, &self.static_url.record_set_name)
            .await?;

        match record {
            Some(record) => Ok(Some(RecordChange::delete(record))),
            None => {
                info!(
                    "No alias record {} in zone {}, nothing to detach",
                    self.static_url.record_set_name, self.static_url.zone_name
                );
                Ok(None)
            }
        }
    }

    pub async fn execute_delete_request(&self, change: &RecordChange) -> Result<()> {
        info!(
            "Detaching {} from RestApi {}",
            change.record.name, self.rest_api_id
        );

        self.dns
            .change_record_sets(&self.static_url.zone_name, change)
            .await?;

        let domain_name = change.record.name.trim_end_matches('.');
        match self.domains.delete_domain_name(domain_name).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                warn!("Custom domain name {} already removed", domain_name);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
