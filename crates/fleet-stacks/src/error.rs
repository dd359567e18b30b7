use fleet_core::{ConfigurationError, ProviderError};
use fleet_dns::DnsError;
use fleet_docs::DocsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StackError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("stack {stack} has no {resource_type} resource")]
    Discovery {
        stack: String,
        resource_type: &'static str,
    },

    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Dns(#[from] DnsError),

    #[error(transparent)]
    Docs(#[from] DocsError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl StackError {
    pub fn is_not_found(&self) -> bool {
        match self {
            StackError::Provider(e) => e.is_not_found(),
            StackError::Dns(e) => e.is_not_found(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StackError>;
