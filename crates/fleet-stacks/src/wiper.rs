use crate::Result;
use crate::provider::{BucketProvider, LogGroupProvider, StackProvider};
use crate::settings::Providers;
use fleet_core::PipelineStackConfiguration;
use std::sync::Arc;
use tracing::{debug, info, warn};

const LAMBDA_LOG_GROUP_PREFIX: &str = "/aws/lambda/";
const CODEBUILD_LOG_GROUP_PREFIX: &str = "/aws/codebuild/";

/// Deletes stacks, treating an absent stack as already deleted.
#[derive(Clone)]
pub struct StackWiper {
    stacks: Arc<dyn StackProvider>,
    buckets: Arc<dyn BucketProvider>,
    logs: Arc<dyn LogGroupProvider>,
}

impl StackWiper {
    pub fn new(providers: &Providers) -> Self {
        Self {
            stacks: providers.stacks.clone(),
            buckets: providers.buckets.clone(),
            logs: providers.logs.clone(),
        }
    }

    /// Single attempt, no retry. Only a not-found failure is swallowed.
    pub async fn wipe(&self, stack_name: &str) -> Result<()> {
        match self.stacks.delete_stack(stack_name).await {
            Ok(()) => {
                info!("Wiped stack {}", stack_name);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                warn!("Stack {} does not exist, nothing to wipe", stack_name);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Wipes the pipeline stack together with what it leaves behind: the artifact bucket is
    /// emptied first, and the log groups of its lambdas and build projects go last.
    pub async fn wipe_pipeline(&self, configuration: &PipelineStackConfiguration) -> Result<()> {
        let bucket = configuration.bucket_name();
        match self.buckets.empty_bucket(bucket).await {
            Ok(removed) => info!("Emptied bucket {} ({} objects)", bucket, removed),
            Err(e) if e.is_not_found() => {
                warn!("Bucket {} does not exist, nothing to empty", bucket);
            }
            Err(e) => return Err(e),
        }

        self.wipe(configuration.pipeline_stack_name()).await?;

        for log_group in log_groups(configuration) {
            match self.logs.delete_log_group(&log_group).await {
                Ok(()) => info!("Deleted log group {}", log_group),
                Err(e) if e.is_not_found() => debug!("Log group {} does not exist", log_group),
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

fn log_groups(configuration: &PipelineStackConfiguration) -> [String; 4] {
    [
        format!("{}{}", LAMBDA_LOG_GROUP_PREFIX, configuration.init_lambda_function_name()),
        format!("{}{}", LAMBDA_LOG_GROUP_PREFIX, configuration.destroy_lambda_function_name()),
        format!("{}{}", CODEBUILD_LOG_GROUP_PREFIX, configuration.codebuild_project_name()),
        format!("{}{}", CODEBUILD_LOG_GROUP_PREFIX, configuration.execute_tests_project_name()),
    ]
}
