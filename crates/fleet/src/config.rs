use anyhow::Context;
use fleet_config::FleetConfig;
use fleet_core::{SecretRef, SecretResolver};
use fleet_dns::{ApiGatewayDomainProvider, Route53Provider};
use fleet_docs::SwaggerHubClient;
use fleet_secrets::{AwsSecretsResolver, EnvSecretResolver};
use fleet_stacks::{CloudFormationProvider, CloudWatchLogsProvider, Providers, S3BucketProvider};
use std::sync::Arc;

pub struct Clients {
    pub providers: Providers,
    pub secrets: Arc<dyn SecretResolver>,
}

pub async fn create_clients(config: &FleetConfig) -> anyhow::Result<Clients> {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    let sdk_config = loader.load().await;

    let secrets: Arc<dyn SecretResolver> = Arc::new(EnvSecretResolver::new(Arc::new(
        AwsSecretsResolver::new(aws_sdk_secretsmanager::Client::new(&sdk_config)),
    )));

    let swaggerhub_key = secrets
        .resolve(&config.swaggerhub.secret_name, &config.swaggerhub.secret_key)
        .await
        .context("Failed to resolve the SwaggerHub API key")?;
    let docs = SwaggerHubClient::new(&config.swaggerhub.base_url, swaggerhub_key)
        .context("Failed to create the SwaggerHub client")?;

    let providers = Providers {
        stacks: Arc::new(CloudFormationProvider::new(
            aws_sdk_cloudformation::Client::new(&sdk_config),
        )),
        buckets: Arc::new(S3BucketProvider::new(aws_sdk_s3::Client::new(&sdk_config))),
        logs: Arc::new(CloudWatchLogsProvider::new(
            aws_sdk_cloudwatchlogs::Client::new(&sdk_config),
        )),
        dns: Arc::new(Route53Provider::new(aws_sdk_route53::Client::new(
            &sdk_config,
        ))),
        domains: Arc::new(ApiGatewayDomainProvider::new(
            aws_sdk_apigateway::Client::new(&sdk_config),
        )),
        docs: Arc::new(docs),
    };

    Ok(Clients { providers, secrets })
}

pub fn github_token(config: &FleetConfig) -> SecretRef {
    SecretRef::new(&config.github.secret_name, &config.github.secret_key)
}

pub async fn webhook_secret(
    config: &FleetConfig,
    secrets: &dyn SecretResolver,
) -> anyhow::Result<String> {
    let (Some(name), Some(key)) = (
        &config.github.webhook_secret_name,
        &config.github.webhook_secret_key,
    ) else {
        anyhow::bail!("github.webhook_secret_name and github.webhook_secret_key must be set");
    };

    secrets
        .resolve(name, key)
        .await
        .context("Failed to resolve the webhook secret")
}
