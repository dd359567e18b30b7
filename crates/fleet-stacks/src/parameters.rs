//! Parameter names the pipeline template declares.

use crate::provider::StackParameter;
use fleet_core::{PipelineStackConfiguration, Stage};

pub const GITHUB_OWNER: &str = "GithubOwner";
pub const GITHUB_REPO: &str = "GithubRepo";
pub const GITHUB_AUTH: &str = "GithubAuth";
pub const PIPELINE_NAME: &str = "PipelineName";
pub const PIPELINE_BUCKET_NAME: &str = "PipelineBucketname";
pub const PIPELINE_ROLE_NAME: &str = "PipelineRolename";
pub const CREATE_STACK_ROLE_NAME: &str = "CreateStackRolename";
pub const SOURCE_STAGE_OUTPUT_ARTIFACT: &str = "SourceStageOutputArtifact";
pub const PROJECT_ID: &str = "ProjectId";
pub const PROJECT_BRANCH: &str = "ProjectBranch";
pub const NORMALIZED_BRANCH_NAME: &str = "NormalizedBranchName";
pub const CODEBUILD_OUTPUT_ARTIFACT: &str = "CodebuildOutputArtifact";
pub const CODEBUILD_PROJECT_NAME: &str = "CodebuildProjectname";
pub const EXECUTE_TESTS_PROJECT_NAME: &str = "ExecuteTestsProjectname";
pub const TEST_SERVICE_STACK_NAME: &str = "PipelineTestServiceStackName";
pub const FINAL_SERVICE_STACK_NAME: &str = "PipelineFinalServiceStackName";
pub const INIT_FUNCTION_NAME: &str = "InitFunctionName";
pub const DESTROY_FUNCTION_NAME: &str = "DestroyFunctionName";
pub const TEST_PHASE_NAME: &str = "TestPhaseName";
pub const FINAL_PHASE_NAME: &str = "FinalPhaseName";

pub fn template_parameters(configuration: &PipelineStackConfiguration) -> Vec<StackParameter> {
    let identity = configuration.identity();

    vec![
        StackParameter::new(GITHUB_OWNER, identity.owner()),
        StackParameter::new(GITHUB_REPO, identity.repository()),
        StackParameter::secret(GITHUB_AUTH, configuration.github_token()),
        StackParameter::new(PIPELINE_NAME, configuration.pipeline_name()),
        StackParameter::new(PIPELINE_BUCKET_NAME, configuration.bucket_name()),
        StackParameter::new(PIPELINE_ROLE_NAME, configuration.pipeline_role_name()),
        StackParameter::new(CREATE_STACK_ROLE_NAME, configuration.create_stack_role_name()),
        StackParameter::new(
            SOURCE_STAGE_OUTPUT_ARTIFACT,
            configuration.source_output_artifact_name(),
        ),
        StackParameter::new(PROJECT_ID, configuration.project_id()),
        StackParameter::new(PROJECT_BRANCH, configuration.branch_name()),
        StackParameter::new(NORMALIZED_BRANCH_NAME, configuration.normalized_branch_name()),
        StackParameter::new(
            CODEBUILD_OUTPUT_ARTIFACT,
            configuration.codebuild_output_artifact(),
        ),
        StackParameter::new(CODEBUILD_PROJECT_NAME, configuration.codebuild_project_name()),
        StackParameter::new(
            EXECUTE_TESTS_PROJECT_NAME,
            configuration.execute_tests_project_name(),
        ),
        StackParameter::new(TEST_SERVICE_STACK_NAME, configuration.test_service_stack()),
        StackParameter::new(FINAL_SERVICE_STACK_NAME, configuration.final_service_stack()),
        StackParameter::new(INIT_FUNCTION_NAME, configuration.init_lambda_function_name()),
        StackParameter::new(
            DESTROY_FUNCTION_NAME,
            configuration.destroy_lambda_function_name(),
        ),
        StackParameter::new(TEST_PHASE_NAME, Stage::Test.as_str()),
        StackParameter::new(FINAL_PHASE_NAME, Stage::Final.as_str()),
    ]
}
