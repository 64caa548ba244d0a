use serde::{Deserialize, Serialize};

use crate::core::store::{DEFAULT_HISTORY_LIMIT, StoreSettings};

/// Upper bound accepted for `store.history_limit`.
pub const MAX_HISTORY_LIMIT: usize = 100;

fn default_store_path() -> String {
    "~/.content-guidelines/guidelines.json".into()
}

fn default_known_namespaces() -> Vec<String> {
    vec!["core".into()]
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding the active document, draft and history.
    #[serde(default = "default_store_path")]
    pub path: String,
    /// Namespaces used to repair unqualified legacy block keys.
    #[serde(default = "default_known_namespaces")]
    pub known_namespaces: Vec<String>,
    /// Recorded as the author of published revisions.
    #[serde(default)]
    pub author_id: u64,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            known_namespaces: default_known_namespaces(),
            author_id: 0,
            history_limit: default_history_limit(),
        }
    }
}

impl StoreConfig {
    pub fn settings(&self) -> StoreSettings {
        StoreSettings {
            author_id: self.author_id,
            history_limit: self.history_limit,
            known_namespaces: self.known_namespaces.clone(),
        }
    }
}
