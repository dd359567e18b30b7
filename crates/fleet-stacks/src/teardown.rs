use crate::Result;
use crate::destroyer::ResourceDestroyer;
use crate::wiper::StackWiper;
use fleet_core::{PipelineStackConfiguration, Stage};
use tracing::{info, warn};

/// Removes everything a branch pipeline created: per stage the attached resources and then
/// the service stack, and last the pipeline stack itself.
pub async fn teardown_pipeline(
    configuration: &PipelineStackConfiguration,
    destroyer: &ResourceDestroyer,
    wiper: &StackWiper,
) -> Result<()> {
    info!(
        "Tearing down pipeline {} for branch {}",
        configuration.pipeline_stack_name(),
        configuration.branch_name()
    );

    for stage in Stage::ALL {
        let service_stack = configuration.service_stack(stage);

        match destroyer
            .destroy(service_stack, stage, configuration.identity())
            .await
        {
            Ok(()) => {}
            Err(e @ crate::StackError::Discovery { .. }) => {
                warn!("Nothing attached to {}: {}", service_stack, e);
            }
            Err(e) if e.is_not_found() => {
                warn!("Stack {} is already gone: {}", service_stack, e);
            }
            Err(e) => return Err(e),
        }

        wiper.wipe(service_stack).await?;
    }

    wiper.wipe_pipeline(configuration).await
}
