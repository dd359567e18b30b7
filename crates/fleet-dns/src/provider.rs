use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Looks up the alias record called `record_name` in the hosted zone `zone_name`.
    async fn find_alias_record(
        &self,
        zone_name: &str,
        record_name: &str,
    ) -> Result<Option<AliasRecord>>;

    async fn change_record_sets(&self, zone_name: &str, change: &RecordChange) -> Result<()>;
}

/// API Gateway custom domain names attached to a static url.
#[async_trait]
pub trait CustomDomainProvider: Send + Sync {
    async fn delete_domain_name(&self, domain_name: &str) -> Result<()>;
}

/// An `A` alias record pointing at an API Gateway regional domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub name: String,
    pub target: AliasTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTarget {
    pub dns_name: String,
    pub hosted_zone_id: String,
    pub evaluate_target_health: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    pub action: ChangeAction,
    pub record: AliasRecord,
}

impl RecordChange {
    pub fn delete(record: AliasRecord) -> Self {
        Self {
            action: ChangeAction::Delete,
            record,
        }
    }
}

/// Compares DNS names ignoring case and the trailing root dot Route53 appends.
pub(crate) fn same_name(left: &str, right: &str) -> bool {
    left.trim_end_matches('.')
        .eq_ignore_ascii_case(right.trim_end_matches('.'))
}
