mod apigateway;
mod error;
mod provider;
mod route53;
mod static_url;
mod updater;

pub use apigateway::ApiGatewayDomainProvider;
pub use error::{DnsError, Result};
pub use provider::{
    AliasRecord, AliasTarget, ChangeAction, CustomDomainProvider, DnsProvider, RecordChange,
};
pub use route53::Route53Provider;
pub use static_url::StaticUrlInfo;
pub use updater::Route53Updater;
