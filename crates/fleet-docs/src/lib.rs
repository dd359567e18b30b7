mod error;
mod info;
mod provider;
mod swaggerhub;
mod updater;

pub use error::{DocsError, Result};
pub use info::SwaggerHubInfo;
pub use provider::{DocsProvider, UpdateOptions};
pub use swaggerhub::SwaggerHubClient;
pub use updater::SwaggerHubUpdater;
