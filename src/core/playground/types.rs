use serde::{Deserialize, Serialize};

use crate::core::guidelines::GuidelinesDocument;
use crate::core::lint::LintReport;
use crate::core::packet::{ContextPacket, Task};
use crate::core::store::DocumentVariant;
use crate::prompt::GenerationPrompt;

/// Shown when no hook handled a generation request.
pub const NO_PROVIDER_MESSAGE: &str =
    "No AI provider connected. Showing lint checks and context preview only.";

/// Playground task names as sent by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlaygroundTask {
    RewriteIntro,
    GenerateHeadlines,
    WriteCta,
    Other(String),
}

/// How much of a fixture post is sent for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcerptBudget {
    /// First N characters.
    Chars(usize),
    /// Post title, a blank line, then the first N words.
    TitleAndWords(usize),
    /// First N words.
    Words(usize),
}

impl PlaygroundTask {
    pub fn as_str(&self) -> &str {
        match self {
            Self::RewriteIntro => "rewrite_intro",
            Self::GenerateHeadlines => "generate_headlines",
            Self::WriteCta => "write_cta",
            Self::Other(name) => name,
        }
    }

    /// Packet task used for this playground task.
    pub fn packet_task(&self) -> Task {
        match self {
            Self::GenerateHeadlines => Task::Headline,
            Self::WriteCta => Task::Cta,
            Self::RewriteIntro | Self::Other(_) => Task::Writing,
        }
    }

    pub fn excerpt_budget(&self) -> ExcerptBudget {
        match self {
            Self::RewriteIntro => ExcerptBudget::Chars(500),
            Self::GenerateHeadlines => ExcerptBudget::TitleAndWords(150),
            Self::WriteCta => ExcerptBudget::Words(300),
            Self::Other(_) => ExcerptBudget::Words(200),
        }
    }
}

impl From<String> for PlaygroundTask {
    fn from(value: String) -> Self {
        match value.trim() {
            "rewrite_intro" => Self::RewriteIntro,
            "generate_headlines" => Self::GenerateHeadlines,
            "write_cta" => Self::WriteCta,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for PlaygroundTask {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<PlaygroundTask> for String {
    fn from(value: PlaygroundTask) -> Self {
        match value {
            PlaygroundTask::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

/// Sample post the playground runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: String,
    /// Post content; may contain markup.
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundRequest {
    /// Task name. Blank or unknown names run as a generic rewrite.
    #[serde(default)]
    pub task: String,
    pub fixture: Option<Fixture>,
    /// Guidelines under test. `None` means the default document.
    pub document: Option<GuidelinesDocument>,
    /// Which copy `document` is. Comparison only runs for drafts.
    #[serde(default)]
    pub source: DocumentVariant,
    #[serde(default)]
    pub extra_instructions: Option<String>,
    #[serde(default)]
    pub compare: bool,
    /// Published guidelines to compare against.
    #[serde(default)]
    pub active_document: Option<GuidelinesDocument>,
}

/// What a generation hook receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub task: String,
    pub excerpt: String,
    pub document: GuidelinesDocument,
    pub packet: ContextPacket,
    pub extra_instructions: Option<String>,
    pub prompt: GenerationPrompt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub output: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

/// Answer from a single hook.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Handled(GenerationResult),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureSummary {
    pub title: String,
    pub excerpt: String,
}

/// Lint and packet computed against the active guidelines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub lint_results: LintReport,
    pub context_packet: ContextPacket,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_result: Option<GenerationResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaygroundReport {
    pub lint_results: LintReport,
    pub context_packet: ContextPacket,
    pub fixture: FixtureSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_result: Option<GenerationResult>,
    pub ai_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare: Option<ComparisonReport>,
}
