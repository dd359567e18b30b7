//! Deterministic mapping from repository and branch names to identifiers that every
//! provider accepts (CloudFormation stacks, S3 buckets, IAM roles, Lambda functions).

use fleet_config::constants::{
    MAX_PROJECT_WORD_LENGTH, NAME_SEPARATOR, NORMALIZED_BRANCH_MAX_LENGTH,
};

/// Lower-cases `raw` and splits it on every run of characters outside `[a-z0-9]`.
fn tokens(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn project_id(repository: &str) -> String {
    tokens(repository)
        .iter()
        .map(|token| token.chars().take(MAX_PROJECT_WORD_LENGTH).collect::<String>())
        .collect::<Vec<_>>()
        .join(&NAME_SEPARATOR.to_string())
}

pub fn normalized_branch_name(branch: &str) -> String {
    let mut joined = tokens(branch).join(&NAME_SEPARATOR.to_string());

    // Stack names must start with a letter.
    if joined.starts_with(|c: char| c.is_ascii_digit()) {
        joined.insert(0, 'b');
    }

    let truncated: String = joined.chars().take(NORMALIZED_BRANCH_MAX_LENGTH).collect();
    truncated.trim_end_matches(NAME_SEPARATOR).to_string()
}

/// Joins the non-empty `parts` with the name separator, leaving each part untouched.
pub fn format(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(&NAME_SEPARATOR.to_string())
}
