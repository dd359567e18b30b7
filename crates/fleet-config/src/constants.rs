use std::time::Duration;

pub const NAME_SEPARATOR: char = '-';
pub const MAX_PROJECT_WORD_LENGTH: usize = 10;
pub const NORMALIZED_BRANCH_MAX_LENGTH: usize = 25;

pub const STACK_NAME_MAX_LENGTH: usize = 128;
pub const BUCKET_NAME_MIN_LENGTH: usize = 3;
pub const BUCKET_NAME_MAX_LENGTH: usize = 63;
pub const ROLE_NAME_MAX_LENGTH: usize = 64;
pub const FUNCTION_NAME_MAX_LENGTH: usize = 64;
pub const PIPELINE_NAME_MAX_LENGTH: usize = 100;

pub const DEFAULT_PRIMARY_BRANCH: &str = "master";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/fleet/fleet.toml";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/pipeline.yaml";
pub const DEFAULT_SWAGGERHUB_URL: &str = "https://api.swaggerhub.com";

pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: &str = "3000";

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(300);

pub const PIPELINE_CHANNEL_CAPACITY: usize = 100;
