use super::fixture::{extract_excerpt, summarize};
use super::hook::HookChain;
use super::types::{
    ComparisonReport, Fixture, GenerationRequest, GenerationResult, NO_PROVIDER_MESSAGE,
    PlaygroundReport, PlaygroundRequest, PlaygroundTask,
};
use crate::core::guidelines::GuidelinesDocument;
use crate::core::lint::{LintChecker, LintReport};
use crate::core::packet::{ContextPacket, PacketOptions, build_packet};
use crate::core::store::DocumentVariant;
use crate::error::{PlaygroundError, Result};
use crate::prompt::{TeraEngine, build_generation_prompt, default_engine, ensure_defaults};

/// Lint, packet and generation results for one document.
struct Evaluation {
    lint_results: LintReport,
    context_packet: ContextPacket,
    ai_result: Option<GenerationResult>,
}

/// Runs guidelines against a fixture post, optionally twice (draft and
/// active) for side-by-side comparison.
pub struct Playground {
    hooks: HookChain,
    checker: LintChecker,
    prompts: TeraEngine,
    max_chars: usize,
}

impl Playground {
    pub fn new(hooks: HookChain) -> Self {
        let prompts = default_engine().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "built-in prompt templates failed to load");
            TeraEngine::new()
        });
        Self {
            hooks,
            checker: LintChecker::default(),
            prompts,
            max_chars: PacketOptions::default().max_chars,
        }
    }

    /// Use `prompts` for generation prompts. Built-in templates fill in
    /// whatever `prompts` does not define.
    pub fn with_prompts(mut self, mut prompts: TeraEngine) -> Result<Self> {
        ensure_defaults(&mut prompts)?;
        self.prompts = prompts;
        Ok(self)
    }

    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn hooks(&self) -> &HookChain {
        &self.hooks
    }

    pub async fn run_test(&self, request: &PlaygroundRequest) -> Result<PlaygroundReport> {
        let fixture = request
            .fixture
            .as_ref()
            .ok_or(PlaygroundError::MissingFixture)?;
        let task = PlaygroundTask::from(request.task.as_str());
        let excerpt = extract_excerpt(fixture, &task);
        let document = request.document.clone().unwrap_or_default();

        let primary = self
            .evaluate(&task, fixture, &excerpt, &document, request.extra_instructions.as_deref())
            .await?;

        let compare = match (&request.active_document, request.compare, request.source) {
            (Some(active), true, DocumentVariant::Draft) => {
                let active_run = self
                    .evaluate(&task, fixture, &excerpt, active, request.extra_instructions.as_deref())
                    .await?;
                Some(ComparisonReport {
                    lint_results: active_run.lint_results,
                    context_packet: active_run.context_packet,
                    ai_result: active_run.ai_result,
                })
            }
            _ => None,
        };

        let ai_available = primary.ai_result.is_some();
        if !ai_available {
            tracing::debug!(task = task.as_str(), hooks = ?self.hooks, "no generation result");
        }

        Ok(PlaygroundReport {
            lint_results: primary.lint_results,
            context_packet: primary.context_packet,
            fixture: summarize(fixture, &excerpt),
            ai_result: primary.ai_result,
            ai_available,
            ai_message: (!ai_available).then(|| NO_PROVIDER_MESSAGE.to_string()),
            compare,
        })
    }

    async fn evaluate(
        &self,
        task: &PlaygroundTask,
        fixture: &Fixture,
        excerpt: &str,
        document: &GuidelinesDocument,
        extra_instructions: Option<&str>,
    ) -> Result<Evaluation> {
        let lint_results = self.checker.check(excerpt, Some(document));

        let options = PacketOptions {
            task: task.packet_task(),
            max_chars: self.max_chars,
            post_id: fixture.id,
            ..PacketOptions::default()
        };
        let context_packet = build_packet(Some(document), &options)?;

        let ai_result = if self.hooks.has_provider() {
            let prompt = build_generation_prompt(
                &self.prompts,
                task.as_str(),
                excerpt,
                &context_packet.packet_text,
                extra_instructions,
            )?;
            let request = GenerationRequest {
                task: task.as_str().to_string(),
                excerpt: excerpt.to_string(),
                document: document.clone(),
                packet: context_packet.clone(),
                extra_instructions: extra_instructions.map(str::to_string),
                prompt,
            };
            self.hooks.generate(&request).await
        } else {
            None
        };

        Ok(Evaluation {
            lint_results,
            context_packet,
            ai_result,
        })
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(HookChain::new())
    }
}
