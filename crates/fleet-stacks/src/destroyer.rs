use crate::provider::REST_API_RESOURCE_TYPE;
use crate::settings::{DeploymentSettings, Providers};
use crate::{Result, StackError};
use fleet_core::{BranchIdentity, Stage};
use fleet_dns::{Route53Updater, StaticUrlInfo};
use fleet_docs::SwaggerHubUpdater;
use tracing::{error, info};

/// Detaches the resources a service stack's RestApi is wired to outside CloudFormation:
/// its SwaggerHub document and its static url alias.
pub struct ResourceDestroyer {
    providers: Providers,
    settings: DeploymentSettings,
}

impl ResourceDestroyer {
    pub fn new(providers: Providers, settings: DeploymentSettings) -> Self {
        Self {
            providers,
            settings,
        }
    }

    pub async fn destroy(
        &self,
        stack_name: &str,
        stage: Stage,
        identity: &BranchIdentity,
    ) -> Result<()> {
        let rest_api_id = self.find_rest_api(stack_name).await?;

        info!(
            "Destroying resources attached to RestApi {} of stack {}",
            rest_api_id, stack_name
        );

        let swaggerhub = SwaggerHubUpdater::new(
            self.providers.docs.clone(),
            &self.settings.swaggerhub,
            stack_name,
            identity.branch(),
            &self.settings.primary_branch,
        );
        let docs_result = swaggerhub.delete_api().await;

        let static_url = StaticUrlInfo::for_branch(
            &self.settings.zone_name,
            &self.settings.application_url,
            stage,
            identity.branch(),
            &self.settings.primary_branch,
        );
        let route53 = Route53Updater::new(
            static_url,
            rest_api_id,
            self.providers.dns.clone(),
            self.providers.domains.clone(),
        );
        let dns_result = async {
            if let Some(request) = route53.create_delete_request().await? {
                route53.execute_delete_request(&request).await?;
            }
            Ok::<_, fleet_dns::DnsError>(())
        }
        .await;

        match (docs_result, dns_result) {
            (Err(docs), Err(dns)) => {
                error!(
                    "Static url cleanup for stack {} also failed: {}",
                    stack_name, dns
                );
                Err(docs.into())
            }
            (Err(docs), Ok(())) => Err(docs.into()),
            (Ok(_), dns) => dns.map_err(StackError::from),
        }
    }

    async fn find_rest_api(&self, stack_name: &str) -> Result<String> {
        let resources = self.providers.stacks.list_stack_resources(stack_name).await?;

        resources
            .into_iter()
            .find(|resource| resource.resource_type == REST_API_RESOURCE_TYPE)
            .and_then(|resource| resource.physical_id)
            .ok_or_else(|| StackError::Discovery {
                stack: stack_name.to_string(),
                resource_type: REST_API_RESOURCE_TYPE,
            })
    }
}
