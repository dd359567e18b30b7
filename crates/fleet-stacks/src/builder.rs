use crate::Result;
use crate::parameters::template_parameters;
use crate::provider::{Capability, CreateStackRequest, StackProvider};
use crate::template::load_template;
use crate::wiper::StackWiper;
use fleet_core::PipelineStackConfiguration;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Creates a branch's pipeline stack, replacing any stack left from an earlier run.
pub struct StackBuilder {
    wiper: StackWiper,
    configuration: PipelineStackConfiguration,
    stacks: Arc<dyn StackProvider>,
    template_path: PathBuf,
}

impl StackBuilder {
    pub fn new(
        wiper: StackWiper,
        configuration: PipelineStackConfiguration,
        stacks: Arc<dyn StackProvider>,
        template_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            wiper,
            configuration,
            stacks,
            template_path: template_path.into(),
        }
    }

    pub async fn create_stacks(&self) -> Result<()> {
        let stack_name = self.configuration.pipeline_stack_name();

        self.wiper.wipe_pipeline(&self.configuration).await?;

        let request = self.create_stack_request().await?;
        self.stacks.create_stack(&request).await?;

        info!(
            "Requested pipeline stack {} for {}/{}",
            stack_name,
            self.configuration.identity().repository(),
            self.configuration.branch_name()
        );

        Ok(())
    }

    pub async fn create_stack_request(&self) -> Result<CreateStackRequest> {
        Ok(CreateStackRequest {
            stack_name: self.configuration.pipeline_stack_name().to_string(),
            template_body: load_template(&self.template_path).await?,
            capabilities: vec![Capability::NamedIam],
            parameters: template_parameters(&self.configuration),
        })
    }
}
