use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::core::guidelines::GuidelinesDocument;

/// Default number of history entries a store retains.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Read-only snapshot recorded each time a draft is published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub author_id: u64,
    pub date_gmt: DateTime<Utc>,
    pub guidelines: GuidelinesDocument,
}

/// Identifiers reported alongside a context packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub document_id: u64,
    /// Latest history entry id, if anything was ever published.
    pub revision_id: Option<u64>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Which copy of the guidelines a caller wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentVariant {
    /// The draft when one exists, otherwise the active document.
    Draft,
    #[default]
    Active,
}

/// Behaviour shared by the store adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Recorded as the author of history entries.
    pub author_id: u64,
    pub history_limit: usize,
    /// Namespaces tried when repairing legacy block keys.
    pub known_namespaces: Vec<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            author_id: 0,
            history_limit: DEFAULT_HISTORY_LIMIT,
            known_namespaces: vec!["core".to_string()],
        }
    }
}
