use fleet_config::SwaggerHubConfig;

/// Coordinates of one document in the SwaggerHub registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerHubInfo {
    pub organization: String,
    pub api_id: String,
    pub api_version: String,
}

impl SwaggerHubInfo {
    pub fn new(
        organization: impl Into<String>,
        api_id: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            api_id: api_id.into(),
            api_version: api_version.into(),
        }
    }

    pub fn from_config(config: &SwaggerHubConfig) -> Self {
        Self::new(&config.organization, &config.api_id, &config.api_version)
    }

    /// The primary branch publishes under the canonical api id; every other branch gets its
    /// own document named after its stack.
    pub fn for_branch(&self, stack_name: &str, branch: &str, primary_branch: &str) -> Self {
        if branch == primary_branch {
            self.clone()
        } else {
            Self {
                api_id: stack_name.to_string(),
                ..self.clone()
            }
        }
    }
}
