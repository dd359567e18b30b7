use crate::StackError;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use fleet_core::{ErrorKind, ProviderError, classify};

/// Classifies an SDK failure. Every AWS client shares the same `SdkError` type.
pub(crate) fn provider_error<E, R>(service: &'static str, error: SdkError<E, R>) -> StackError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let kind = match &error {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => ErrorKind::Transient,
        _ => classify(error.code(), error.message()),
    };

    ProviderError::new(service, kind, DisplayErrorContext(&error).to_string()).into()
}
