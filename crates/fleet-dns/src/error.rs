use thiserror::Error;

#[derive(Debug, Error)]
pub enum DnsError {
    #[error(transparent)]
    Provider(#[from] fleet_core::ProviderError),

    #[error("Invalid record {name}: {reason}")]
    InvalidRecord { name: String, reason: String },
}

impl DnsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DnsError::Provider(e) if e.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, DnsError>;
