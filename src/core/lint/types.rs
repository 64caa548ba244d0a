use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Copy-rule checks that are only switched on by wording in the don'ts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckCategory {
    Urgency,
    Superlatives,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CopyRuleKind {
    NoUrgency,
    NoSuperlatives,
}

/// A finding that makes the content fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LintIssue {
    VocabularyAvoid {
        /// Lowercased avoid term.
        term: String,
        count: usize,
        message: String,
        note: String,
    },
    Readability {
        message: String,
        actual: f64,
        target: u32,
    },
    CopyRule {
        rule: CopyRuleKind,
        message: String,
        pattern: String,
    },
}

impl LintIssue {
    /// Stable identifier, e.g. `vocabulary_avoid` or `copy_rule/no_urgency`.
    pub fn code(&self) -> String {
        match self {
            Self::VocabularyAvoid { .. } => "vocabulary_avoid".to_string(),
            Self::Readability { .. } => "readability".to_string(),
            Self::CopyRule { rule, .. } => format!("copy_rule/{rule}"),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::VocabularyAvoid { message, .. }
            | Self::Readability { message, .. }
            | Self::CopyRule { message, .. } => message,
        }
    }
}

/// Advisory output. Never affects pass/fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LintSuggestion {
    VocabularyPrefer {
        term: String,
        message: String,
        note: String,
    },
    LongSentences {
        message: String,
        count: usize,
    },
}

/// Text statistics. Serializes as `{}` when the content was not analysed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LintStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_words_per_sentence: Option<f64>,
}

impl LintStats {
    pub fn is_empty(&self) -> bool {
        self.word_count.is_none()
            && self.sentence_count.is_none()
            && self.avg_words_per_sentence.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LintReport {
    pub issues: Vec<LintIssue>,
    pub suggestions: Vec<LintSuggestion>,
    pub stats: LintStats,
}

impl LintReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}
