use crate::error::ConfigurationError;
use crate::identity::{BranchIdentity, Stage};
use crate::naming;
use crate::secrets::{SecretRef, SecretResolver};
use fleet_config::constants::{
    BUCKET_NAME_MAX_LENGTH, BUCKET_NAME_MIN_LENGTH, FUNCTION_NAME_MAX_LENGTH,
    PIPELINE_NAME_MAX_LENGTH, ROLE_NAME_MAX_LENGTH, STACK_NAME_MAX_LENGTH,
};
use std::fmt;
use tracing::debug;

/// Every resource name one branch pipeline uses, derived from its [`BranchIdentity`].
///
/// Two configurations built from equal identities are equal in every derived field, which
/// is what lets a later wipe target the resources an earlier create produced.
#[derive(Clone, PartialEq, Eq)]
pub struct PipelineStackConfiguration {
    identity: BranchIdentity,
    github_token: String,

    project_id: String,
    normalized_branch_name: String,

    pipeline_stack_name: String,
    pipeline_name: String,
    bucket_name: String,
    pipeline_role_name: String,
    create_stack_role_name: String,
    source_output_artifact_name: String,

    codebuild_output_artifact: String,
    codebuild_project_name: String,
    execute_tests_project_name: String,

    test_service_stack: String,
    final_service_stack: String,
    init_lambda_function_name: String,
    destroy_lambda_function_name: String,
}

impl PipelineStackConfiguration {
    /// Resolves the git auth token and derives all names. The secret lookup is the only
    /// remote call made here.
    pub async fn resolve(
        identity: BranchIdentity,
        secrets: &dyn SecretResolver,
        github_token: &SecretRef,
    ) -> Result<Self, ConfigurationError> {
        let token = secrets
            .resolve(&github_token.name, &github_token.key)
            .await
            .map_err(|source| ConfigurationError::SecretUnresolved {
                name: github_token.name.clone(),
                key: github_token.key.clone(),
                source,
            })?;

        Self::with_token(identity, token)
    }

    /// Derives all names and rejects the identity when one of them would be refused by the
    /// provider it is sent to.
    pub fn with_token(
        identity: BranchIdentity,
        github_token: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let project_id = naming::project_id(identity.repository());
        let normalized_branch_name = naming::normalized_branch_name(identity.branch());

        let name = |purpose: &str| {
            naming::format(&[project_id.as_str(), normalized_branch_name.as_str(), purpose])
        };
        let service_stack = |stage: Stage| {
            naming::format(&[
                project_id.as_str(),
                normalized_branch_name.as_str(),
                "service-stack",
                stage.as_str(),
            ])
        };

        let configuration = Self {
            pipeline_stack_name: name("pipelineStack"),
            pipeline_name: name("pipeline"),
            bucket_name: name(""),
            pipeline_role_name: name("pipelineRole"),
            create_stack_role_name: name("CreateStackRole"),
            source_output_artifact_name: name("sourceOutput"),
            codebuild_output_artifact: name("codebuildOutput"),
            codebuild_project_name: name("CodeBuild"),
            execute_tests_project_name: name("executeTests"),
            test_service_stack: service_stack(Stage::Test),
            final_service_stack: service_stack(Stage::Final),
            init_lambda_function_name: name("init"),
            destroy_lambda_function_name: name("destroy"),
            identity,
            github_token: github_token.into(),
            project_id,
            normalized_branch_name,
        };

        configuration.validate()?;

        debug!(
            "Derived pipeline configuration for {}/{} ({})",
            configuration.identity.repository(),
            configuration.identity.branch(),
            configuration.pipeline_stack_name
        );

        Ok(configuration)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        for (field, name) in [
            ("pipeline_stack_name", &self.pipeline_stack_name),
            ("test_service_stack", &self.test_service_stack),
            ("final_service_stack", &self.final_service_stack),
        ] {
            check_stack_name(field, name)?;
        }

        check_length(
            "bucket_name",
            &self.bucket_name,
            BUCKET_NAME_MIN_LENGTH,
            BUCKET_NAME_MAX_LENGTH,
        )?;
        check_length("pipeline_name", &self.pipeline_name, 1, PIPELINE_NAME_MAX_LENGTH)?;

        for (field, name) in [
            ("pipeline_role_name", &self.pipeline_role_name),
            ("create_stack_role_name", &self.create_stack_role_name),
        ] {
            check_length(field, name, 1, ROLE_NAME_MAX_LENGTH)?;
        }

        for (field, name) in [
            ("init_lambda_function_name", &self.init_lambda_function_name),
            ("destroy_lambda_function_name", &self.destroy_lambda_function_name),
        ] {
            check_length(field, name, 1, FUNCTION_NAME_MAX_LENGTH)?;
        }

        Ok(())
    }

    pub fn identity(&self) -> &BranchIdentity {
        &self.identity
    }

    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn branch_name(&self) -> &str {
        self.identity.branch()
    }

    pub fn normalized_branch_name(&self) -> &str {
        &self.normalized_branch_name
    }

    pub fn pipeline_stack_name(&self) -> &str {
        &self.pipeline_stack_name
    }

    pub fn pipeline_name(&self) -> &str {
        &self.pipeline_name
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn pipeline_role_name(&self) -> &str {
        &self.pipeline_role_name
    }

    pub fn create_stack_role_name(&self) -> &str {
        &self.create_stack_role_name
    }

    pub fn source_output_artifact_name(&self) -> &str {
        &self.source_output_artifact_name
    }

    pub fn codebuild_output_artifact(&self) -> &str {
        &self.codebuild_output_artifact
    }

    pub fn codebuild_project_name(&self) -> &str {
        &self.codebuild_project_name
    }

    pub fn execute_tests_project_name(&self) -> &str {
        &self.execute_tests_project_name
    }

    pub fn test_service_stack(&self) -> &str {
        &self.test_service_stack
    }

    pub fn final_service_stack(&self) -> &str {
        &self.final_service_stack
    }

    pub fn service_stack(&self, stage: Stage) -> &str {
        match stage {
            Stage::Test => &self.test_service_stack,
            Stage::Final => &self.final_service_stack,
        }
    }

    pub fn init_lambda_function_name(&self) -> &str {
        &self.init_lambda_function_name
    }

    pub fn destroy_lambda_function_name(&self) -> &str {
        &self.destroy_lambda_function_name
    }
}

/// CloudFormation stack names match `[A-Za-z][A-Za-z0-9-]*`.
fn check_stack_name(field: &'static str, name: &str) -> Result<(), ConfigurationError> {
    let legal = name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if !legal {
        return Err(ConfigurationError::InvalidValue {
            field,
            value: name.to_string(),
        });
    }

    check_length(field, name, 1, STACK_NAME_MAX_LENGTH)
}

fn check_length(
    field: &'static str,
    name: &str,
    min: usize,
    max: usize,
) -> Result<(), ConfigurationError> {
    if (min..=max).contains(&name.len()) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidValue {
            field,
            value: name.to_string(),
        })
    }
}

impl fmt::Debug for PipelineStackConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineStackConfiguration")
            .field("identity", &self.identity)
            .field("github_token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("normalized_branch_name", &self.normalized_branch_name)
            .field("pipeline_stack_name", &self.pipeline_stack_name)
            .finish_non_exhaustive()
    }
}
