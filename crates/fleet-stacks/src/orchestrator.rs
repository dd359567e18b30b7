use crate::Result;
use crate::builder::StackBuilder;
use crate::destroyer::ResourceDestroyer;
use crate::settings::{DeploymentSettings, Providers};
use crate::teardown::teardown_pipeline;
use crate::wiper::StackWiper;
use fleet_core::{Action, PipelineStackConfiguration};

/// Entry point used by both the one-shot command and the webhook worker.
#[derive(Clone)]
pub struct PipelineOrchestrator {
    providers: Providers,
    settings: DeploymentSettings,
}

impl PipelineOrchestrator {
    pub fn new(providers: Providers, settings: DeploymentSettings) -> Self {
        Self {
            providers,
            settings,
        }
    }

    pub async fn run(
        &self,
        action: Action,
        configuration: PipelineStackConfiguration,
    ) -> Result<()> {
        match action {
            Action::Create => self.create(configuration).await,
            Action::Delete => self.delete(&configuration).await,
        }
    }

    pub async fn create(&self, configuration: PipelineStackConfiguration) -> Result<()> {
        StackBuilder::new(
            self.wiper(),
            configuration,
            self.providers.stacks.clone(),
            &self.settings.template_path,
        )
        .create_stacks()
        .await
    }

    pub async fn delete(&self, configuration: &PipelineStackConfiguration) -> Result<()> {
        let destroyer = ResourceDestroyer::new(self.providers.clone(), self.settings.clone());
        teardown_pipeline(configuration, &destroyer, &self.wiper()).await
    }

    fn wiper(&self) -> StackWiper {
        StackWiper::new(&self.providers)
    }
}
