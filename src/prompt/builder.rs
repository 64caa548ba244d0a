use serde::Serialize;
use tera::Context;

use super::engine::TeraEngine;
use crate::error::Result;

const SYSTEM_TEMPLATE: &str = "\
You are an editorial assistant for this website. Follow the site's content guidelines below exactly.
{% if packet_text %}
{{ packet_text }}{% endif %}";

const REWRITE_INTRO_TEMPLATE: &str = "\
Rewrite the following introduction so it follows the guidelines. Keep the meaning and roughly the same length.

{{ excerpt }}";

const GENERATE_HEADLINES_TEMPLATE: &str = "\
Suggest five headlines for the following post. Put each headline on its own line.

{{ excerpt }}";

const WRITE_CTA_TEMPLATE: &str = "\
Write a short call to action to close the following post.

{{ excerpt }}";

const REWRITE_TEMPLATE: &str = "\
Rewrite the following content so it follows the guidelines.

{{ excerpt }}";

const EXTRA_INSTRUCTIONS_SUFFIX: &str = "\
{% if extra_instructions %}

Additional instructions: {{ extra_instructions }}{% endif %}";

const SYSTEM_NAME: &str = "system";
const DEFAULT_TASK_NAME: &str = "rewrite";

/// Built-in user templates keyed by playground task name.
static TASK_TEMPLATES: &[(&str, &str)] = &[
    ("rewrite_intro", REWRITE_INTRO_TEMPLATE),
    ("generate_headlines", GENERATE_HEADLINES_TEMPLATE),
    ("write_cta", WRITE_CTA_TEMPLATE),
    (DEFAULT_TASK_NAME, REWRITE_TEMPLATE),
];

/// Ready-to-send prompt pair for prompt-driven generation hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationPrompt {
    pub system: String,
    pub user: String,
}

/// Register the built-in templates that are not already present, so
/// templates loaded with [`TeraEngine::from_glob`] take precedence.
pub fn ensure_defaults(engine: &mut TeraEngine) -> Result<()> {
    if !engine.has_template(SYSTEM_NAME) {
        engine.add_template(SYSTEM_NAME, SYSTEM_TEMPLATE)?;
    }
    for (name, body) in TASK_TEMPLATES {
        if !engine.has_template(name) {
            engine.add_template(name, &format!("{body}{EXTRA_INSTRUCTIONS_SUFFIX}"))?;
        }
    }
    Ok(())
}

/// Engine holding only the built-in templates.
pub fn default_engine() -> Result<TeraEngine> {
    let mut engine = TeraEngine::new();
    ensure_defaults(&mut engine)?;
    Ok(engine)
}

/// Render the prompt for a playground task. Unknown tasks use the generic
/// rewrite template. `engine` must already carry the defaults, see
/// [`ensure_defaults`].
pub fn build_generation_prompt(
    engine: &TeraEngine,
    task: &str,
    excerpt: &str,
    packet_text: &str,
    extra_instructions: Option<&str>,
) -> Result<GenerationPrompt> {
    let mut ctx = Context::new();
    ctx.insert("task", task);
    ctx.insert("excerpt", excerpt);
    ctx.insert("packet_text", packet_text);
    ctx.insert("extra_instructions", extra_instructions.unwrap_or_default().trim());

    let template = if engine.has_template(task) && task != SYSTEM_NAME {
        task
    } else {
        DEFAULT_TASK_NAME
    };

    Ok(GenerationPrompt {
        system: engine.render(SYSTEM_NAME, &ctx)?,
        user: engine.render(template, &ctx)?,
    })
}
