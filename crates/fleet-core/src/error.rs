use std::fmt;
use thiserror::Error;

/// Closed classification every provider adapter maps its failures into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Transient,
    Fatal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Transient => "transient",
            ErrorKind::Fatal => "fatal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{service} error ({kind}): {message}")]
pub struct ProviderError {
    pub service: &'static str,
    pub kind: ErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(service: &'static str, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            service,
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(service: &'static str, message: impl Into<String>) -> Self {
        Self::new(service, ErrorKind::NotFound, message)
    }

    pub fn fatal(service: &'static str, message: impl Into<String>) -> Self {
        Self::new(service, ErrorKind::Fatal, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

const NOT_FOUND_CODES: &[&str] = &[
    "ResourceNotFoundException",
    "NotFoundException",
    "NoSuchHostedZone",
    "NoSuchBucket",
    "StackNotFoundException",
];

const CONFLICT_CODES: &[&str] = &[
    "AlreadyExistsException",
    "ConflictException",
    "ConflictingDomainExists",
    "OperationInProgressException",
    "PriorRequestNotComplete",
    "TokenAlreadyExistsException",
];

const TRANSIENT_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "Throttled",
    "TooManyRequestsException",
    "RequestLimitExceeded",
    "ServiceUnavailable",
    "ServiceUnavailableException",
    "InternalFailure",
];

/// Maps a provider error code and message to an [`ErrorKind`].
///
/// CloudFormation reports a missing stack as a generic `ValidationError` whose message
/// says the stack "does not exist", so the message is inspected for that code only.
pub fn classify(code: Option<&str>, message: Option<&str>) -> ErrorKind {
    let message = message.unwrap_or_default();

    match code {
        Some(code) if NOT_FOUND_CODES.contains(&code) => ErrorKind::NotFound,
        Some("ValidationError") if message.contains("does not exist") => ErrorKind::NotFound,
        Some(code) if CONFLICT_CODES.contains(&code) => ErrorKind::Conflict,
        Some(code) if TRANSIENT_CODES.contains(&code) => ErrorKind::Transient,
        _ if message.contains("_IN_PROGRESS") => ErrorKind::Conflict,
        _ => ErrorKind::Fatal,
    }
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("required field is not set: {0}")]
    MissingField(&'static str),

    #[error("secret {name}/{key} could not be resolved: {source}")]
    SecretUnresolved {
        name: String,
        key: String,
        source: ProviderError,
    },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}
