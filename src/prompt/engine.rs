use tera::Tera;

use crate::error::{PromptError, Result};

/// Tera-backed template engine for generation prompts.
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Create from a glob pattern pointing at template files, so sites can
    /// override the built-in prompts.
    pub fn from_glob(glob: &str) -> Result<Self> {
        let tera = Tera::new(glob).map_err(|e| PromptError::Render(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Create with no templates registered.
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|registered| registered == name)
    }

    /// Register a template from a string, replacing any previous one.
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<()> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| PromptError::Render(format!("{name}: {e}")))?;
        Ok(())
    }

    pub fn render(&self, template_name: &str, context: &tera::Context) -> Result<String> {
        if !self.has_template(template_name) {
            return Err(PromptError::NotFound(template_name.to_string()).into());
        }
        self.tera
            .render(template_name, context)
            .map_err(|e| PromptError::Render(format!("{template_name}: {e}")).into())
    }
}

impl Default for TeraEngine {
    fn default() -> Self {
        Self::new()
    }
}
