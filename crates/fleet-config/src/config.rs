use crate::constants;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default = "default_primary_branch")]
    pub primary_branch: String,

    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    pub github: GithubConfig,

    pub swaggerhub: SwaggerHubConfig,

    pub route53: Route53Config,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    pub secret_name: String,
    pub secret_key: String,

    #[serde(default)]
    pub webhook_secret_name: Option<String>,

    #[serde(default)]
    pub webhook_secret_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SwaggerHubConfig {
    pub organization: String,

    /// Api id shared by every deployment of the primary branch.
    pub api_id: String,

    pub api_version: String,

    pub secret_name: String,
    pub secret_key: String,

    #[serde(default = "default_swaggerhub_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Route53Config {
    pub zone_name: String,
    pub application_url: String,
}

fn default_primary_branch() -> String {
    constants::DEFAULT_PRIMARY_BRANCH.to_string()
}

fn default_template_path() -> PathBuf {
    PathBuf::from(constants::DEFAULT_TEMPLATE_PATH)
}

fn default_swaggerhub_url() -> String {
    constants::DEFAULT_SWAGGERHUB_URL.to_string()
}

pub async fn load_fleet_config(path: &Path) -> Result<FleetConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let config: FleetConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded fleet configuration from {}", path.display());

    Ok(config)
}
