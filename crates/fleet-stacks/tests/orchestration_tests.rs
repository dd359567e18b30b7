use async_trait::async_trait;
use fleet_core::{BranchIdentity, ErrorKind, PipelineStackConfiguration, ProviderError, Stage};
use fleet_dns::{
    AliasRecord, AliasTarget, ChangeAction, CustomDomainProvider, DnsError, DnsProvider,
    RecordChange,
};
use fleet_docs::{DocsError, DocsProvider, SwaggerHubInfo, UpdateOptions};
use fleet_stacks::{
    BucketProvider, Capability, CreateStackRequest, DeploymentSettings, LogGroupProvider,
    PipelineOrchestrator, Providers, REST_API_RESOURCE_TYPE, ResourceDestroyer, StackBuilder,
    StackError, StackProvider, StackResource, StackWiper,
};
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

type Journal = Arc<Mutex<Vec<String>>>;

fn record(journal: &Journal, entry: String) {
    journal.lock().unwrap().push(entry);
}

struct FakeStacks {
    journal: Journal,
    delete_failure: Option<ErrorKind>,
    resources: HashMap<String, Vec<StackResource>>,
    created: Mutex<Vec<CreateStackRequest>>,
}

#[async_trait]
impl StackProvider for FakeStacks {
    async fn create_stack(&self, request: &CreateStackRequest) -> fleet_stacks::Result<()> {
        record(&self.journal, format!("create_stack {}", request.stack_name));
        self.created.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn delete_stack(&self, stack_name: &str) -> fleet_stacks::Result<()> {
        record(&self.journal, format!("delete_stack {}", stack_name));
        match self.delete_failure {
            Some(kind) => Err(ProviderError::new("cloudformation", kind, "delete failed").into()),
            None => Ok(()),
        }
    }

    async fn list_stack_resources(
        &self,
        stack_name: &str,
    ) -> fleet_stacks::Result<Vec<StackResource>> {
        record(&self.journal, format!("list_resources {}", stack_name));
        self.resources.get(stack_name).cloned().ok_or_else(|| {
            ProviderError::not_found(
                "cloudformation",
                format!("Stack with id {} does not exist", stack_name),
            )
            .into()
        })
    }
}

struct FakeBuckets {
    journal: Journal,
    failure: Option<ErrorKind>,
}

#[async_trait]
impl BucketProvider for FakeBuckets {
    async fn empty_bucket(&self, bucket: &str) -> fleet_stacks::Result<usize> {
        record(&self.journal, format!("empty_bucket {}", bucket));
        match self.failure {
            Some(kind) => Err(ProviderError::new("s3", kind, "empty failed").into()),
            None => Ok(3),
        }
    }
}

struct FakeLogs {
    journal: Journal,
}

#[async_trait]
impl LogGroupProvider for FakeLogs {
    async fn delete_log_group(&self, log_group: &str) -> fleet_stacks::Result<()> {
        record(&self.journal, format!("delete_log_group {}", log_group));
        if log_group.starts_with("/aws/codebuild/") {
            Err(ProviderError::not_found("logs", "The specified log group does not exist.").into())
        } else {
            Ok(())
        }
    }
}

struct FakeDns {
    journal: Journal,
    records: Vec<AliasRecord>,
}

#[async_trait]
impl DnsProvider for FakeDns {
    async fn find_alias_record(
        &self,
        _zone_name: &str,
        record_name: &str,
    ) -> fleet_dns::Result<Option<AliasRecord>> {
        record(&self.journal, format!("find_alias {}", record_name));
        Ok(self.records.iter().find(|r| r.name == record_name).cloned())
    }

    async fn change_record_sets(
        &self,
        _zone_name: &str,
        change: &RecordChange,
    ) -> fleet_dns::Result<()> {
        record(
            &self.journal,
            format!("change_records {:?} {}", change.action, change.record.name),
        );
        Ok(())
    }
}

struct FakeDomains {
    journal: Journal,
}

#[async_trait]
impl CustomDomainProvider for FakeDomains {
    async fn delete_domain_name(&self, domain_name: &str) -> fleet_dns::Result<()> {
        record(&self.journal, format!("delete_domain {}", domain_name));
        Err(DnsError::Provider(ProviderError::not_found(
            "apigateway",
            "Invalid domain name identifier specified",
        )))
    }
}

struct FakeDocs {
    journal: Journal,
    fail: bool,
}

impl FakeDocs {
    fn answer(&self) -> fleet_docs::Result<u16> {
        if self.fail {
            Err(DocsError::InvalidUrl("unreachable registry".to_string()))
        } else {
            Ok(200)
        }
    }
}

#[async_trait]
impl DocsProvider for FakeDocs {
    async fn delete_api(&self, organization: &str, api_id: &str) -> fleet_docs::Result<u16> {
        record(&self.journal, format!("delete_api {}/{}", organization, api_id));
        self.answer()
    }

    async fn delete_api_version(
        &self,
        organization: &str,
        api_id: &str,
        version: &str,
    ) -> fleet_docs::Result<u16> {
        record(
            &self.journal,
            format!("delete_api_version {}/{}/{}", organization, api_id, version),
        );
        self.answer()
    }

    async fn update_api(
        &self,
        organization: &str,
        api_id: &str,
        _version: &str,
        _body: &str,
        _options: UpdateOptions,
    ) -> fleet_docs::Result<u16> {
        record(&self.journal, format!("update_api {}/{}", organization, api_id));
        self.answer()
    }
}

struct Harness {
    journal: Journal,
    stacks: Arc<FakeStacks>,
    providers: Providers,
    settings: DeploymentSettings,
    _template: NamedTempFile,
}

#[derive(Default)]
struct HarnessBuilder {
    delete_failure: Option<ErrorKind>,
    bucket_failure: Option<ErrorKind>,
    rest_apis: Vec<String>,
    aliases: Vec<String>,
    docs_fail: bool,
}

impl HarnessBuilder {
    fn delete_failure(mut self, kind: ErrorKind) -> Self {
        self.delete_failure = Some(kind);
        self
    }

    fn bucket_failure(mut self, kind: ErrorKind) -> Self {
        self.bucket_failure = Some(kind);
        self
    }

    fn rest_api(mut self, stack_name: &str) -> Self {
        self.rest_apis.push(stack_name.to_string());
        self
    }

    fn alias(mut self, record_name: &str) -> Self {
        self.aliases.push(record_name.to_string());
        self
    }

    fn docs_fail(mut self) -> Self {
        self.docs_fail = true;
        self
    }

    fn build(self) -> Harness {
        let journal: Journal = Arc::new(Mutex::new(Vec::new()));

        let mut template = NamedTempFile::new().unwrap();
        writeln!(template, "AWSTemplateFormatVersion: '2010-09-09'").unwrap();

        let resources = self
            .rest_apis
            .iter()
            .map(|stack| {
                (
                    stack.clone(),
                    vec![
                        StackResource {
                            logical_id: "ServiceRole".to_string(),
                            physical_id: Some("role".to_string()),
                            resource_type: "AWS::IAM::Role".to_string(),
                        },
                        StackResource {
                            logical_id: "RestApi".to_string(),
                            physical_id: Some("abc123".to_string()),
                            resource_type: REST_API_RESOURCE_TYPE.to_string(),
                        },
                    ],
                )
            })
            .collect();

        let stacks = Arc::new(FakeStacks {
            journal: journal.clone(),
            delete_failure: self.delete_failure,
            resources,
            created: Mutex::new(Vec::new()),
        });

        let records = self
            .aliases
            .iter()
            .map(|name| AliasRecord {
                name: name.clone(),
                target: AliasTarget {
                    dns_name: "d-abc123.execute-api.eu-west-1.amazonaws.com".to_string(),
                    hosted_zone_id: "ZLY8HYME6SFDD".to_string(),
                    evaluate_target_health: false,
                },
            })
            .collect();

        let providers = Providers {
            stacks: stacks.clone(),
            buckets: Arc::new(FakeBuckets {
                journal: journal.clone(),
                failure: self.bucket_failure,
            }),
            logs: Arc::new(FakeLogs {
                journal: journal.clone(),
            }),
            dns: Arc::new(FakeDns {
                journal: journal.clone(),
                records,
            }),
            domains: Arc::new(FakeDomains {
                journal: journal.clone(),
            }),
            docs: Arc::new(FakeDocs {
                journal: journal.clone(),
                fail: self.docs_fail,
            }),
        };

        let settings = DeploymentSettings {
            primary_branch: "master".to_string(),
            template_path: template.path().to_path_buf(),
            zone_name: "aws.unit.no".to_string(),
            application_url: "api.aws.unit.no".to_string(),
            swaggerhub: SwaggerHubInfo::new("unit", "library-api", "1.0"),
        };

        Harness {
            journal,
            stacks,
            providers,
            settings,
            _template: template,
        }
    }
}

impl Harness {
    fn builder() -> HarnessBuilder {
        HarnessBuilder::default()
    }

    fn entries(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    fn count(&self, prefix: &str) -> usize {
        self.entries()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    fn stack_builder(&self, configuration: PipelineStackConfiguration) -> StackBuilder {
        StackBuilder::new(
            StackWiper::new(&self.providers),
            configuration,
            self.providers.stacks.clone(),
            &self.settings.template_path,
        )
    }

    fn destroyer(&self) -> ResourceDestroyer {
        ResourceDestroyer::new(self.providers.clone(), self.settings.clone())
    }
}

fn configuration(branch: &str) -> PipelineStackConfiguration {
    let identity = BranchIdentity::new("BIBSYSDEV", "library", branch).unwrap();
    PipelineStackConfiguration::with_token(identity, "ghp_token").unwrap()
}

#[tokio::test]
async fn create_wipes_existing_stack_before_creating() {
    let harness = Harness::builder().build();
    let configuration = configuration("feature_x");
    let stack = configuration.pipeline_stack_name().to_string();

    harness.stack_builder(configuration).create_stacks().await.unwrap();

    assert_eq!(
        harness.entries(),
        vec![
            "empty_bucket library-feature-x".to_string(),
            format!("delete_stack {}", stack),
            "delete_log_group /aws/lambda/library-feature-x-init".to_string(),
            "delete_log_group /aws/lambda/library-feature-x-destroy".to_string(),
            "delete_log_group /aws/codebuild/library-feature-x-CodeBuild".to_string(),
            "delete_log_group /aws/codebuild/library-feature-x-executeTests".to_string(),
            format!("create_stack {}", stack),
        ]
    );
}

#[tokio::test]
async fn create_proceeds_when_bucket_is_absent() {
    let harness = Harness::builder()
        .bucket_failure(ErrorKind::NotFound)
        .build();

    harness
        .stack_builder(configuration("feature_x"))
        .create_stacks()
        .await
        .unwrap();

    assert_eq!(harness.count("delete_stack"), 1);
    assert_eq!(harness.count("create_stack"), 1);
}

#[tokio::test]
async fn create_aborts_when_bucket_cannot_be_emptied() {
    let harness = Harness::builder().bucket_failure(ErrorKind::Fatal).build();

    let result = harness
        .stack_builder(configuration("feature_x"))
        .create_stacks()
        .await;

    match result {
        Err(StackError::Provider(e)) => {
            assert_eq!(e.service, "s3");
            assert_eq!(e.kind, ErrorKind::Fatal);
        }
        other => panic!("expected provider error, got {:?}", other),
    }
    assert_eq!(harness.count("delete_stack"), 0);
    assert_eq!(harness.count("create_stack"), 0);
}

#[tokio::test]
async fn create_proceeds_when_stack_is_absent() {
    let harness = Harness::builder()
        .delete_failure(ErrorKind::NotFound)
        .build();

    harness
        .stack_builder(configuration("feature_x"))
        .create_stacks()
        .await
        .unwrap();

    assert_eq!(harness.count("delete_stack"), 1);
    assert_eq!(harness.count("create_stack"), 1);
}

#[tokio::test]
async fn create_aborts_on_other_delete_errors() {
    for kind in [ErrorKind::Conflict, ErrorKind::Transient, ErrorKind::Fatal] {
        let harness = Harness::builder().delete_failure(kind).build();

        let result = harness
            .stack_builder(configuration("feature_x"))
            .create_stacks()
            .await;

        match result {
            Err(StackError::Provider(e)) => assert_eq!(e.kind, kind),
            other => panic!("expected provider error, got {:?}", other),
        }
        assert_eq!(harness.count("delete_stack"), 1);
        assert_eq!(harness.count("create_stack"), 0);
    }
}

#[tokio::test]
async fn create_request_carries_template_and_parameters() {
    let harness = Harness::builder().build();
    let configuration = configuration("feature_x");

    harness
        .stack_builder(configuration.clone())
        .create_stacks()
        .await
        .unwrap();

    let created = harness.stacks.created.lock().unwrap();
    let request = &created[0];

    assert_eq!(request.stack_name, configuration.pipeline_stack_name());
    assert_eq!(request.capabilities, vec![Capability::NamedIam]);
    assert!(request.template_body.starts_with("AWSTemplateFormatVersion"));
    assert_eq!(request.parameters.len(), 20);
    assert_eq!(request.parameter("GithubAuth"), Some("ghp_token"));
    assert_eq!(request.parameter("ProjectBranch"), Some("feature_x"));
    assert_eq!(request.parameter("NormalizedBranchName"), Some("feature-x"));
}

#[tokio::test]
async fn create_fails_on_missing_template_without_creating() {
    let mut harness = Harness::builder().build();
    harness.settings.template_path = "/nonexistent/pipeline.yaml".into();

    let result = harness
        .stack_builder(configuration("feature_x"))
        .create_stacks()
        .await;

    assert!(matches!(result, Err(StackError::Template { .. })));
    assert_eq!(harness.count("create_stack"), 0);
}

#[tokio::test]
async fn destroy_on_primary_branch_uses_canonical_api_id() {
    let configuration = configuration("master");
    let stack = configuration.final_service_stack().to_string();
    let harness = Harness::builder().rest_api(&stack).build();

    harness
        .destroyer()
        .destroy(&stack, Stage::Final, configuration.identity())
        .await
        .unwrap();

    assert!(
        harness
            .entries()
            .contains(&"delete_api_version unit/library-api/1.0".to_string())
    );
    assert_eq!(harness.count("delete_api "), 0);
}

#[tokio::test]
async fn destroy_on_other_branch_uses_stack_name_as_api_id() {
    let configuration = configuration("notmaster");
    let stack = configuration.final_service_stack().to_string();
    let harness = Harness::builder().rest_api(&stack).build();

    harness
        .destroyer()
        .destroy(&stack, Stage::Final, configuration.identity())
        .await
        .unwrap();

    assert!(
        harness
            .entries()
            .contains(&format!("delete_api unit/{}", stack))
    );
    assert_eq!(harness.count("delete_api_version"), 0);
}

#[tokio::test]
async fn destroy_without_alias_makes_no_dns_change() {
    let configuration = configuration("feature_x");
    let stack = configuration.final_service_stack().to_string();
    let harness = Harness::builder().rest_api(&stack).build();

    harness
        .destroyer()
        .destroy(&stack, Stage::Final, configuration.identity())
        .await
        .unwrap();

    assert_eq!(harness.count("find_alias"), 1);
    assert_eq!(harness.count("change_records"), 0);
    assert_eq!(harness.count("delete_domain"), 0);
}

#[tokio::test]
async fn destroy_removes_alias_after_resolving_rest_api() {
    let configuration = configuration("feature_x");
    let stack = configuration.test_service_stack().to_string();
    let harness = Harness::builder()
        .rest_api(&stack)
        .alias("test.feature-x.api.aws.unit.no")
        .build();

    harness
        .destroyer()
        .destroy(&stack, Stage::Test, configuration.identity())
        .await
        .unwrap();

    assert_eq!(
        harness.entries(),
        vec![
            format!("list_resources {}", stack),
            format!("delete_api unit/{}", stack),
            "find_alias test.feature-x.api.aws.unit.no".to_string(),
            format!(
                "change_records {:?} test.feature-x.api.aws.unit.no",
                ChangeAction::Delete
            ),
            "delete_domain test.feature-x.api.aws.unit.no".to_string(),
        ]
    );
}

#[tokio::test]
async fn destroy_of_missing_stack_aborts_before_cleanup() {
    let configuration = configuration("feature_x");
    let stack = configuration.final_service_stack().to_string();
    let harness = Harness::builder().build();

    let result = harness
        .destroyer()
        .destroy(&stack, Stage::Final, configuration.identity())
        .await;

    assert!(result.is_err());
    assert_eq!(harness.count("delete_api"), 0);
    assert_eq!(harness.count("find_alias"), 0);
}

#[tokio::test]
async fn destroy_cleans_dns_even_when_docs_fail() {
    let configuration = configuration("feature_x");
    let stack = configuration.final_service_stack().to_string();
    let harness = Harness::builder()
        .rest_api(&stack)
        .alias("feature-x.api.aws.unit.no")
        .docs_fail()
        .build();

    let result = harness
        .destroyer()
        .destroy(&stack, Stage::Final, configuration.identity())
        .await;

    assert!(matches!(result, Err(StackError::Docs(_))));
    assert_eq!(harness.count("change_records"), 1);
}

#[tokio::test]
async fn teardown_detaches_before_wiping_each_stack() {
    let configuration = configuration("feature_x");
    let test_stack = configuration.test_service_stack().to_string();
    let final_stack = configuration.final_service_stack().to_string();
    let pipeline_stack = configuration.pipeline_stack_name().to_string();

    let harness = Harness::builder()
        .rest_api(&test_stack)
        .rest_api(&final_stack)
        .alias("feature-x.api.aws.unit.no")
        .build();
    let orchestrator =
        PipelineOrchestrator::new(harness.providers.clone(), harness.settings.clone());

    orchestrator.delete(&configuration).await.unwrap();

    let entries = harness.entries();
    let position = |entry: String| entries.iter().position(|e| *e == entry).unwrap();

    assert!(
        position(format!("delete_api unit/{}", test_stack))
            < position(format!("delete_stack {}", test_stack))
    );
    assert!(
        position("change_records Delete feature-x.api.aws.unit.no".to_string())
            < position(format!("delete_stack {}", final_stack))
    );
    assert!(
        position(format!("delete_stack {}", final_stack))
            < position(format!("delete_stack {}", pipeline_stack))
    );
    assert!(
        position("empty_bucket library-feature-x".to_string())
            < position(format!("delete_stack {}", pipeline_stack))
    );
    assert_eq!(harness.count("delete_stack"), 3);
    assert_eq!(harness.count("delete_log_group"), 4);
}

#[tokio::test]
async fn teardown_keeps_service_stack_when_detach_fails() {
    let configuration = configuration("feature_x");
    let test_stack = configuration.test_service_stack().to_string();

    let harness = Harness::builder()
        .rest_api(&test_stack)
        .alias("test.feature-x.api.aws.unit.no")
        .docs_fail()
        .build();
    let orchestrator =
        PipelineOrchestrator::new(harness.providers.clone(), harness.settings.clone());

    let result = orchestrator.delete(&configuration).await;

    assert!(matches!(result, Err(StackError::Docs(_))));
    assert_eq!(harness.count("change_records"), 1);
    assert_eq!(harness.count(&format!("delete_stack {}", test_stack)), 0);
    assert_eq!(harness.count("delete_stack"), 0);
    assert_eq!(harness.count("empty_bucket"), 0);
}

#[tokio::test]
async fn teardown_wipes_stacks_that_never_got_a_rest_api() {
    let harness = Harness::builder().build();
    let orchestrator =
        PipelineOrchestrator::new(harness.providers.clone(), harness.settings.clone());

    orchestrator
        .delete(&configuration("feature_x"))
        .await
        .unwrap();

    assert_eq!(harness.count("delete_api"), 0);
    assert_eq!(harness.count("delete_stack"), 3);
}

#[tokio::test]
async fn orchestrator_create_uses_pipeline_stack() {
    let harness = Harness::builder().build();
    let orchestrator =
        PipelineOrchestrator::new(harness.providers.clone(), harness.settings.clone());
    let configuration = configuration("feature_x");

    orchestrator
        .run(fleet_core::Action::Create, configuration.clone())
        .await
        .unwrap();

    assert_eq!(
        harness.entries().last(),
        Some(&format!("create_stack {}", configuration.pipeline_stack_name()))
    );
}

#[tokio::test]
async fn destroy_of_stack_without_rest_api_is_a_discovery_error() {
    let configuration = configuration("feature_x");
    let stack = configuration.final_service_stack().to_string();
    let mut harness = Harness::builder().build();

    let stacks = Arc::new(FakeStacks {
        journal: harness.journal.clone(),
        delete_failure: None,
        resources: HashMap::from([(
            stack.clone(),
            vec![StackResource {
                logical_id: "InitFunction".to_string(),
                physical_id: None,
                resource_type: "AWS::Lambda::Function".to_string(),
            }],
        )]),
        created: Mutex::new(Vec::new()),
    });
    harness.providers.stacks = stacks;

    let result = harness
        .destroyer()
        .destroy(&stack, Stage::Final, configuration.identity())
        .await;

    match result {
        Err(StackError::Discovery {
            stack: failed,
            resource_type,
        }) => {
            assert_eq!(failed, stack);
            assert_eq!(resource_type, REST_API_RESOURCE_TYPE);
        }
        other => panic!("expected discovery error, got {:?}", other),
    }
    assert_eq!(harness.count("delete_api"), 0);
}
