use crate::Result;
use async_trait::async_trait;
use std::fmt;

pub const REST_API_RESOURCE_TYPE: &str = "AWS::ApiGateway::RestApi";

#[async_trait]
pub trait StackProvider: Send + Sync {
    /// Returns once the provider has accepted the request, not when the stack is complete.
    async fn create_stack(&self, request: &CreateStackRequest) -> Result<()>;

    async fn delete_stack(&self, stack_name: &str) -> Result<()>;

    async fn list_stack_resources(&self, stack_name: &str) -> Result<Vec<StackResource>>;
}

/// Artifact buckets a pipeline writes to. CloudFormation cannot delete a bucket that still
/// holds objects.
#[async_trait]
pub trait BucketProvider: Send + Sync {
    /// Deletes every object in `bucket` and returns how many were removed.
    async fn empty_bucket(&self, bucket: &str) -> Result<usize>;
}

#[async_trait]
pub trait LogGroupProvider: Send + Sync {
    async fn delete_log_group(&self, log_group: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    NamedIam,
}

#[derive(Clone, PartialEq, Eq)]
pub struct StackParameter {
    pub key: &'static str,
    pub value: String,
    pub no_echo: bool,
}

impl StackParameter {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
            no_echo: false,
        }
    }

    pub fn secret(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            no_echo: true,
            ..Self::new(key, value)
        }
    }
}

impl fmt::Debug for StackParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.no_echo {
            "<redacted>"
        } else {
            self.value.as_str()
        };
        f.debug_struct("StackParameter")
            .field("key", &self.key)
            .field("value", &value)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStackRequest {
    pub stack_name: String,
    pub template_body: String,
    pub capabilities: Vec<Capability>,
    pub parameters: Vec<StackParameter>,
}

impl CreateStackRequest {
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackResource {
    pub logical_id: String,
    pub physical_id: Option<String>,
    pub resource_type: String,
}
