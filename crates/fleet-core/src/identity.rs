use crate::error::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// Git identity a pipeline is provisioned for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchIdentity {
    owner: String,
    repository: String,
    branch: String,
}

impl BranchIdentity {
    pub fn new(
        owner: impl Into<String>,
        repository: impl Into<String>,
        branch: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let owner = required("owner", owner.into())?;
        let repository = required("repository", repository.into())?;
        let branch = required("branch", branch.into())?;

        Ok(Self {
            owner,
            repository,
            branch,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }
}

fn required(field: &'static str, value: String) -> Result<String, ConfigurationError> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::MissingField(field));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Test,
    Final,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::Test, Stage::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Test => "test",
            Stage::Final => "final",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stage {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "test" => Ok(Stage::Test),
            "final" => Ok(Stage::Final),
            _ => Err(ConfigurationError::InvalidValue {
                field: "stage",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "create" => Ok(Action::Create),
            "delete" => Ok(Action::Delete),
            _ => Err(ConfigurationError::InvalidValue {
                field: "action",
                value: s.to_string(),
            }),
        }
    }
}

/// A request to create or tear down the pipeline of one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    pub identity: BranchIdentity,
    pub action: Action,
}
