use crate::Result;
use crate::provider::CustomDomainProvider;
use async_trait::async_trait;
use aws_sdk_apigateway::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use fleet_core::{ErrorKind, ProviderError, classify};
use tracing::info;

const SERVICE: &str = "apigateway";

pub struct ApiGatewayDomainProvider {
    client: aws_sdk_apigateway::Client,
}

impl ApiGatewayDomainProvider {
    pub fn new(client: aws_sdk_apigateway::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomDomainProvider for ApiGatewayDomainProvider {
    async fn delete_domain_name(&self, domain_name: &str) -> Result<()> {
        self.client
            .delete_domain_name()
            .domain_name(domain_name)
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

        info!("Deleted custom domain name {}", domain_name);

        Ok(())
    }
}
