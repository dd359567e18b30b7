use crate::provider::{AliasRecord, AliasTarget, ChangeAction, DnsProvider, RecordChange, same_name};
use crate::{DnsError, Result};
use async_trait::async_trait;
use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_route53::types::{self as route53, RrType};
use fleet_core::{ErrorKind, ProviderError, classify};
use tracing::{debug, info};

const SERVICE: &str = "route53";

pub struct Route53Provider {
    client: aws_sdk_route53::Client,
}

impl Route53Provider {
    pub fn new(client: aws_sdk_route53::Client) -> Self {
        Self { client }
    }

    async fn hosted_zone_id(&self, zone_name: &str) -> Result<String> {
        let response = self
            .client
            .list_hosted_zones_by_name()
            .dns_name(zone_name)
            .send()
            .await
            .map_err(provider_error)?;

        response
            .hosted_zones()
            .iter()
            .find(|zone| same_name(zone.name(), zone_name))
            .map(|zone| zone.id().to_string())
            .ok_or_else(|| {
                ProviderError::not_found(SERVICE, format!("hosted zone {} not found", zone_name))
                    .into()
            })
    }
}

#[async_trait]
impl DnsProvider for Route53Provider {
    async fn find_alias_record(
        &self,
        zone_name: &str,
        record_name: &str,
    ) -> Result<Option<AliasRecord>> {
        let zone_id = self.hosted_zone_id(zone_name).await?;

        debug!("Looking up alias {} in zone {}", record_name, zone_id);

        let response = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(&zone_id)
            .start_record_name(record_name)
            .start_record_type(RrType::A)
            .send()
            .await
            .map_err(provider_error)?;

        let record = response.resource_record_sets().iter().find_map(|set| {
            if !same_name(set.name(), record_name) || *set.r#type() != RrType::A {
                return None;
            }

            let target = set.alias_target()?;
            Some(AliasRecord {
                name: set.name().to_string(),
                target: AliasTarget {
                    dns_name: target.dns_name().to_string(),
                    hosted_zone_id: target.hosted_zone_id().to_string(),
                    evaluate_target_health: target.evaluate_target_health(),
                },
            })
        });

        Ok(record)
    }

    async fn change_record_sets(&self, zone_name: &str, change: &RecordChange) -> Result<()> {
        let zone_id = self.hosted_zone_id(zone_name).await?;
        let record = &change.record;

        let invalid = |e: aws_sdk_route53::error::BuildError| DnsError::InvalidRecord {
            name: record.name.clone(),
            reason: e.to_string(),
        };

        let alias_target = route53::AliasTarget::builder()
            .dns_name(&record.target.dns_name)
            .hosted_zone_id(&record.target.hosted_zone_id)
            .evaluate_target_health(record.target.evaluate_target_health)
            .build()
            .map_err(invalid)?;

        let record_set = route53::ResourceRecordSet::builder()
            .name(&record.name)
            .r#type(RrType::A)
            .alias_target(alias_target)
            .build()
            .map_err(invalid)?;

        let action = match change.action {
            ChangeAction::Delete => route53::ChangeAction::Delete,
        };

        let batch = route53::ChangeBatch::builder()
            .changes(
                route53::Change::builder()
                    .action(action)
                    .resource_record_set(record_set)
                    .build()
                    .map_err(invalid)?,
            )
            .build()
            .map_err(invalid)?;

        self.client
            .change_resource_record_sets()
            .hosted_zone_id(&zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(provider_error)?;

        info!(
            "Submitted {:?} of record {} in zone {}",
            change.action, record.name, zone_name
        );

        Ok(())
    }
}

fn provider_error<E, R>(error: SdkError<E, R>) -> DnsError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let kind = match &error {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => ErrorKind::Transient,
        _ => classify(error.code(), error.message()),
    };

    ProviderError::new(SERVICE, kind, DisplayErrorContext(&error).to_string()).into()
}
