use fleet_core::Stage;
use fleet_core::naming::normalized_branch_name;

/// Hostname under which one stage of one branch is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticUrlInfo {
    pub zone_name: String,
    pub record_set_name: String,
    pub stage: Stage,
}

impl StaticUrlInfo {
    /// Primary-branch FINAL deployments own `application_url` itself; every other branch
    /// gets a subdomain named after its normalized branch, and TEST stages get a further
    /// `test.` prefix.
    pub fn for_branch(
        zone_name: &str,
        application_url: &str,
        stage: Stage,
        branch: &str,
        primary_branch: &str,
    ) -> Self {
        let mut record_set_name = application_url.trim_end_matches('.').to_string();

        if branch != primary_branch {
            record_set_name = format!("{}.{}", normalized_branch_name(branch), record_set_name);
        }

        if stage == Stage::Test {
            record_set_name = format!("test.{}", record_set_name);
        }

        Self {
            zone_name: zone_name.to_string(),
            record_set_name,
            stage,
        }
    }
}
