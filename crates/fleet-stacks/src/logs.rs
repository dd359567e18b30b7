use crate::Result;
use crate::provider::LogGroupProvider;
use crate::sdk;
use async_trait::async_trait;

const SERVICE: &str = "logs";

pub struct CloudWatchLogsProvider {
    client: aws_sdk_cloudwatchlogs::Client,
}

impl CloudWatchLogsProvider {
    pub fn new(client: aws_sdk_cloudwatchlogs::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogGroupProvider for CloudWatchLogsProvider {
    async fn delete_log_group(&self, log_group: &str) -> Result<()> {
        self.client
            .delete_log_group()
            .log_group_name(log_group)
            .send()
            .await
            .map_err(|e| sdk::provider_error(SERVICE, e))?;

        Ok(())
    }
}
