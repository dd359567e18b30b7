pub mod configuration;
pub mod error;
pub mod identity;
pub mod naming;
pub mod secrets;

pub use configuration::PipelineStackConfiguration;
pub use error::{ConfigurationError, ErrorKind, ProviderError, classify};
pub use identity::{Action, BranchIdentity, PipelineRequest, Stage};
pub use secrets::{SecretRef, SecretResolver};
