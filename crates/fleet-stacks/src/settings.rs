use crate::provider::{BucketProvider, LogGroupProvider, StackProvider};
use fleet_config::FleetConfig;
use fleet_dns::{CustomDomainProvider, DnsProvider};
use fleet_docs::{DocsProvider, SwaggerHubInfo};
use std::path::PathBuf;
use std::sync::Arc;

/// Provider clients, built once at startup and shared by every pipeline operation.
#[derive(Clone)]
pub struct Providers {
    pub stacks: Arc<dyn StackProvider>,
    pub buckets: Arc<dyn BucketProvider>,
    pub logs: Arc<dyn LogGroupProvider>,
    pub dns: Arc<dyn DnsProvider>,
    pub domains: Arc<dyn CustomDomainProvider>,
    pub docs: Arc<dyn DocsProvider>,
}

/// Deployment-wide settings that do not depend on the branch being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSettings {
    pub primary_branch: String,
    pub template_path: PathBuf,
    pub zone_name: String,
    pub application_url: String,
    pub swaggerhub: SwaggerHubInfo,
}

impl DeploymentSettings {
    pub fn from_config(config: &FleetConfig) -> Self {
        Self {
            primary_branch: config.primary_branch.clone(),
            template_path: config.template_path.clone(),
            zone_name: config.route53.zone_name.clone(),
            application_url: config.route53.application_url.clone(),
            swaggerhub: SwaggerHubInfo::from_config(&config.swaggerhub),
        }
    }
}
