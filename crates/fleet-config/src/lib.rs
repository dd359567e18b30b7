pub mod config;
pub mod constants;

pub use config::{
    ConfigError, FleetConfig, GithubConfig, Route53Config, SwaggerHubConfig, load_fleet_config,
};
