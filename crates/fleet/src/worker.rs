use fleet_core::{PipelineRequest, PipelineStackConfiguration, SecretRef, SecretResolver};
use fleet_stacks::PipelineOrchestrator;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Clone)]
pub struct PipelineWorker {
    pub orchestrator: PipelineOrchestrator,
    pub secrets: Arc<dyn SecretResolver>,
    pub github_token: SecretRef,
}

impl PipelineWorker {
    pub async fn process(&self, request: PipelineRequest) -> fleet_stacks::Result<()> {
        let action = request.action;
        let configuration = PipelineStackConfiguration::resolve(
            request.identity,
            self.secrets.as_ref(),
            &self.github_token,
        )
        .await?;

        info!(
            "Running {} for {} (stack {})",
            action,
            configuration.branch_name(),
            configuration.pipeline_stack_name()
        );

        self.orchestrator.run(action, configuration).await
    }
}

/// Handles requests one at a time, so two operations on the same branch never overlap.
pub async fn run_pipeline_worker(
    mut pipeline_rx: mpsc::Receiver<PipelineRequest>,
    worker: PipelineWorker,
) {
    info!("Starting pipeline worker");

    while let Some(request) = pipeline_rx.recv().await {
        let repository = request.identity.repository().to_string();
        let branch = request.identity.branch().to_string();
        let action = request.action;

        match worker.process(request).await {
            Ok(()) => info!("Finished {} for {}/{}", action, repository, branch),
            Err(e) => error!("{} failed for {}/{}: {}", action, repository, branch, e),
        }
    }

    info!("Pipeline worker shutting down");
}
