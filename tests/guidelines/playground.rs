use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use content_guidelines::core::guidelines::GuidelinesDocument;
use content_guidelines::core::playground::{
    Fixture, GenerationHook, GenerationOutcome, GenerationRequest, GenerationResult, HookChain,
    NO_PROVIDER_MESSAGE, Playground, PlaygroundRequest, PlaygroundTask,
};
use content_guidelines::core::packet::Task;
use content_guidelines::core::store::DocumentVariant;
use content_guidelines::error::{GuidelinesError, PlaygroundError};
use content_guidelines::prompt::TeraEngine;

use crate::support::{post_content, sample_document};

type HookFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<GenerationOutcome>> + Send + 'a>>;

/// Answers with the user prompt it was given.
struct EchoHook {
    calls: AtomicUsize,
}

impl EchoHook {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }
}

impl GenerationHook for EchoHook {
    fn name(&self) -> &str {
        "echo"
    }

    fn generate<'a>(&'a self, request: &'a GenerationRequest) -> HookFuture<'a> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, anyhow::Error>(GenerationOutcome::Handled(GenerationResult {
                output: request.prompt.user.clone(),
                alternatives: Vec::new(),
                metadata: serde_json::json!({ "system": request.prompt.system }),
            }))
        })
    }
}

struct DecliningHook;

impl GenerationHook for DecliningHook {
    fn name(&self) -> &str {
        "declining"
    }

    fn generate<'a>(&'a self, _request: &'a GenerationRequest) -> HookFuture<'a> {
        Box::pin(async { Ok::<_, anyhow::Error>(GenerationOutcome::NotHandled) })
    }
}

struct FailingHook;

impl GenerationHook for FailingHook {
    fn name(&self) -> &str {
        "failing"
    }

    fn generate<'a>(&'a self, _request: &'a GenerationRequest) -> HookFuture<'a> {
        Box::pin(async { Err::<GenerationOutcome, _>(anyhow::anyhow!("provider offline")) })
    }
}

fn fixture() -> Fixture {
    Fixture {
        id: Some(12),
        title: "Spring pea risotto".into(),
        content: post_content(&[
            "Act now, this class risotto is ready in thirty minutes.",
            "Stir in the peas at the end.",
        ]),
    }
}

fn draft_request(document: GuidelinesDocument) -> PlaygroundRequest {
    PlaygroundRequest {
        task: "rewrite_intro".into(),
        fixture: Some(fixture()),
        document: Some(document),
        source: DocumentVariant::Draft,
        ..PlaygroundRequest::default()
    }
}

#[tokio::test]
async fn without_hooks_reports_lint_and_packet_only() {
    let report = Playground::default()
        .run_test(&draft_request(sample_document()))
        .await
        .unwrap();

    assert!(!report.ai_available);
    assert!(report.ai_result.is_none());
    assert_eq!(report.ai_message.as_deref(), Some(NO_PROVIDER_MESSAGE));
    assert!(!report.lint_results.passed());
    assert!(report.context_packet.packet_text.contains("Lead with the dish"));
    assert_eq!(report.context_packet.post_id, Some(12));
    assert_eq!(report.fixture.title, "Spring pea risotto");
    assert!(!report.fixture.excerpt.contains('<'));
    assert!(report.compare.is_none());
}

#[tokio::test]
async fn first_handling_hook_wins() {
    let echo = EchoHook::new();
    let hooks = HookChain::new()
        .with_hook(Arc::new(FailingHook))
        .with_hook(Arc::new(DecliningHook))
        .with_hook(echo.clone());
    let mut request = draft_request(sample_document());
    request.extra_instructions = Some("Mention the season".into());

    let report = Playground::new(hooks).run_test(&request).await.unwrap();

    assert!(report.ai_available);
    assert!(report.ai_message.is_none());
    let result = report.ai_result.unwrap();
    assert!(result.output.contains("Stir in the peas"));
    assert!(result.output.contains("Additional instructions: Mention the season"));
    assert!(result.metadata["system"]
        .as_str()
        .unwrap()
        .contains("## SITE CONTENT GUIDELINES"));
    assert_eq!(echo.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn hooks_that_never_handle_leave_no_result() {
    let hooks = HookChain::new()
        .with_hook(Arc::new(DecliningHook))
        .with_hook(Arc::new(FailingHook));
    let report = Playground::new(hooks)
        .run_test(&draft_request(sample_document()))
        .await
        .unwrap();
    assert!(!report.ai_available);
    assert_eq!(report.ai_message.as_deref(), Some(NO_PROVIDER_MESSAGE));
}

#[tokio::test]
async fn compare_runs_against_active_document() {
    let echo = EchoHook::new();
    let mut request = draft_request(sample_document());
    request.compare = true;
    request.active_document = Some(GuidelinesDocument::default());

    let report = Playground::new(HookChain::new().with_hook(echo.clone()))
        .run_test(&request)
        .await
        .unwrap();

    let compare = report.compare.expect("compare section");
    assert!(compare.lint_results.passed());
    assert!(compare.context_packet.packet_structured.is_empty());
    assert!(!report.lint_results.passed());
    assert!(compare.ai_result.is_some());
    assert_eq!(echo.calls.load(Ordering::SeqCst), 2);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["source"], "draft");
}

#[tokio::test]
async fn compare_is_omitted_without_active_document() {
    let mut request = draft_request(sample_document());
    request.compare = true;

    let report = Playground::default().run_test(&request).await.unwrap();
    assert!(report.compare.is_none());
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("compare").is_none());
}

#[tokio::test]
async fn compare_only_applies_to_drafts() {
    let mut request = draft_request(sample_document());
    request.compare = true;
    request.source = DocumentVariant::Active;
    request.active_document = Some(GuidelinesDocument::default());

    let report = Playground::default().run_test(&request).await.unwrap();
    assert!(report.compare.is_none());
}

#[tokio::test]
async fn missing_fixture_is_rejected() {
    let request = PlaygroundRequest {
        task: "write_cta".into(),
        ..PlaygroundRequest::default()
    };
    let err = Playground::default().run_test(&request).await.unwrap_err();
    assert!(matches!(
        err,
        GuidelinesError::Playground(PlaygroundError::MissingFixture)
    ));
}

#[tokio::test]
async fn missing_document_uses_defaults() {
    let request = PlaygroundRequest {
        task: "generate_headlines".into(),
        fixture: Some(fixture()),
        ..PlaygroundRequest::default()
    };
    let report = Playground::default().run_test(&request).await.unwrap();
    assert!(report.lint_results.passed());
    assert!(report.context_packet.packet_structured.is_empty());
    assert!(report.fixture.excerpt.starts_with("Spring pea risotto"));
}

#[tokio::test]
async fn site_prompt_templates_override_builtins() {
    let echo = EchoHook::new();
    let mut prompts = TeraEngine::new();
    prompts
        .add_template("rewrite_intro", "Site intro prompt: {{ excerpt }}")
        .unwrap();
    let playground = Playground::new(HookChain::new().with_hook(echo.clone()))
        .with_prompts(prompts)
        .unwrap();

    let report = playground
        .run_test(&draft_request(sample_document()))
        .await
        .unwrap();
    let result = report.ai_result.unwrap();
    assert!(result.output.starts_with("Site intro prompt: "));
    assert!(result.metadata["system"]
        .as_str()
        .unwrap()
        .starts_with("You are an editorial assistant"));

    let mut request = draft_request(sample_document());
    request.task = "write_cta".into();
    let report = playground.run_test(&request).await.unwrap();
    assert!(report
        .ai_result
        .unwrap()
        .output
        .starts_with("Write a short call to action"));
}

#[tokio::test]
async fn request_without_task_runs_as_writing() {
    let request: PlaygroundRequest = serde_json::from_value(serde_json::json!({
        "fixture": { "title": "Spring pea risotto", "content": "<p>Stir in the peas.</p>" },
        "document": null,
    }))
    .unwrap();
    assert!(request.task.is_empty());
    assert_eq!(PlaygroundTask::from(request.task.as_str()).packet_task(), Task::Writing);

    let report = Playground::default().run_test(&request).await.unwrap();
    assert!(report.lint_results.passed());
    assert!(report.fixture.excerpt.contains("Stir in the peas."));
    assert!(!report.fixture.excerpt.contains("Spring pea risotto"));
}
