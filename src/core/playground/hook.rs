use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::types::{GenerationOutcome, GenerationRequest, GenerationResult};

/// External AI generation provider. The core never calls a model itself.
pub trait GenerationHook: Send + Sync {
    fn name(&self) -> &str;

    fn generate<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<GenerationOutcome>> + Send + 'a>>;
}

/// Ordered set of hooks. The first hook that handles a request wins.
#[derive(Clone, Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn GenerationHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Arc<dyn GenerationHook>) {
        self.hooks.push(hook);
    }

    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn GenerationHook>) -> Self {
        self.register(hook);
        self
    }

    pub fn has_provider(&self) -> bool {
        !self.hooks.is_empty()
    }

    /// Ask each hook in turn. A failing hook is logged and skipped.
    pub async fn generate(&self, request: &GenerationRequest) -> Option<GenerationResult> {
        for hook in &self.hooks {
            match hook.generate(request).await {
                Ok(GenerationOutcome::Handled(result)) => {
                    tracing::debug!(hook = hook.name(), task = %request.task, "generation handled");
                    return Some(result);
                }
                Ok(GenerationOutcome::NotHandled) => {}
                Err(e) => {
                    tracing::warn!(hook = hook.name(), error = %e, "generation hook failed");
                }
            }
        }
        None
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.hooks.iter().map(|hook| hook.name()).collect();
        f.debug_struct("HookChain").field("hooks", &names).finish()
    }
}
