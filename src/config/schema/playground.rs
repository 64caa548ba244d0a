use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Appended to every generation prompt when a run supplies none.
    #[serde(default)]
    pub extra_instructions: Option<String>,
}
