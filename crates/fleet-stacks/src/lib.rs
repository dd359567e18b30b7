mod builder;
mod cloudformation;
mod destroyer;
mod error;
mod logs;
mod orchestrator;
pub mod parameters;
mod provider;
mod s3;
mod sdk;
mod settings;
mod teardown;
mod template;
mod wiper;

pub use builder::StackBuilder;
pub use cloudformation::CloudFormationProvider;
pub use destroyer::ResourceDestroyer;
pub use error::{Result, StackError};
pub use logs::CloudWatchLogsProvider;
pub use orchestrator::PipelineOrchestrator;
pub use provider::{
    BucketProvider, Capability, CreateStackRequest, LogGroupProvider, REST_API_RESOURCE_TYPE,
    StackParameter, StackProvider, StackResource,
};
pub use s3::S3BucketProvider;
pub use settings::{DeploymentSettings, Providers};
pub use teardown::teardown_pipeline;
pub use template::load_template;
pub use wiper::StackWiper;
