use crate::Result;
use crate::provider::{Capability, CreateStackRequest, StackProvider, StackResource};
use crate::sdk;
use async_trait::async_trait;
use aws_sdk_cloudformation::types;
use tracing::{debug, info};

const SERVICE: &str = "cloudformation";

pub struct CloudFormationProvider {
    client: aws_sdk_cloudformation::Client,
}

impl CloudFormationProvider {
    pub fn new(client: aws_sdk_cloudformation::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StackProvider for CloudFormationProvider {
    async fn create_stack(&self, request: &CreateStackRequest) -> Result<()> {
        let capabilities = request
            .capabilities
            .iter()
            .map(|capability| match capability {
                Capability::NamedIam => types::Capability::CapabilityNamedIam,
            })
            .collect();

        let parameters = request
            .parameters
            .iter()
            .map(|parameter| {
                types::Parameter::builder()
                    .parameter_key(parameter.key)
                    .parameter_value(&parameter.value)
                    .build()
            })
            .collect();

        let response = self
            .client
            .create_stack()
            .stack_name(&request.stack_name)
            .template_body(&request.template_body)
            .set_capabilities(Some(capabilities))
            .set_parameters(Some(parameters))
            .send()
            .await
            .map_err(|e| sdk::provider_error(SERVICE, e))?;

        info!(
            "Create of stack {} accepted ({})",
            request.stack_name,
            response.stack_id().unwrap_or("no stack id")
        );

        Ok(())
    }

    async fn delete_stack(&self, stack_name: &str) -> Result<()> {
        self.client
            .delete_stack()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| sdk::provider_error(SERVICE, e))?;

        info!("Delete of stack {} accepted", stack_name);

        Ok(())
    }

    async fn list_stack_resources(&self, stack_name: &str) -> Result<Vec<StackResource>> {
        let mut resources = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_stack_resources()
                .stack_name(stack_name)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| sdk::provider_error(SERVICE, e))?;

            resources.extend(response.stack_resource_summaries().iter().map(|summary| {
                StackResource {
                    logical_id: summary.logical_resource_id().unwrap_or_default().to_string(),
                    physical_id: summary.physical_resource_id().map(str::to_string),
                    resource_type: summary.resource_type().unwrap_or_default().to_string(),
                }
            }));

            match response.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        debug!("Stack {} has {} resources", stack_name, resources.len());

        Ok(resources)
    }
}
