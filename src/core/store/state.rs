use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::legacy::repair_document;
use super::types::{DocumentMeta, HistoryEntry, StoreSettings};
use crate::core::guidelines::{GuidelinesDocument, sanitized};
use crate::error::{Result, StoreError};

fn default_document_id() -> u64 {
    1
}

fn default_next_history_id() -> u64 {
    1
}

/// Lifecycle state shared by the store adapters.
///
/// The file adapter persists this struct as JSON; the in-memory adapter
/// keeps it behind a mutex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default = "default_document_id")]
    pub document_id: u64,
    #[serde(default)]
    pub active: Option<GuidelinesDocument>,
    #[serde(default)]
    pub draft: Option<GuidelinesDocument>,
    /// Newest first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default = "default_next_history_id")]
    pub next_history_id: u64,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<Utc>>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            document_id: default_document_id(),
            active: None,
            draft: None,
            history: Vec::new(),
            next_history_id: default_next_history_id(),
            updated_at: None,
        }
    }
}

impl StoreState {
    /// Rewrite legacy block keys in every stored document.
    pub fn repair_legacy_keys(&mut self, known_namespaces: &[String]) {
        if let Some(active) = &self.active {
            self.active = Some(repair_document(active, known_namespaces));
        }
        if let Some(draft) = &self.draft {
            self.draft = Some(repair_document(draft, known_namespaces));
        }
        for entry in &mut self.history {
            entry.guidelines = repair_document(&entry.guidelines, known_namespaces);
        }
    }

    pub fn save_draft(&mut self, document: &GuidelinesDocument) -> Result<()> {
        self.draft = Some(sanitized(document)?);
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Promote the draft and record a history snapshot. Returns the new
    /// history entry id.
    pub fn publish_draft(&mut self, settings: &StoreSettings) -> Result<u64> {
        let draft = self.draft.take().ok_or(StoreError::NoDraft)?;
        let now = Utc::now();
        let id = self.next_history_id;
        self.next_history_id += 1;
        self.history.insert(
            0,
            HistoryEntry {
                id,
                author_id: settings.author_id,
                date_gmt: now,
                guidelines: draft.clone(),
            },
        );
        self.history.truncate(settings.history_limit.max(1));
        self.active = Some(draft);
        self.updated_at = Some(now);
        Ok(id)
    }

    /// Returns whether a draft existed.
    pub fn discard_draft(&mut self) -> bool {
        let existed = self.draft.take().is_some();
        if existed {
            self.updated_at = Some(Utc::now());
        }
        existed
    }

    pub fn history(&self, document_id: u64) -> Vec<HistoryEntry> {
        if document_id == self.document_id {
            self.history.clone()
        } else {
            Vec::new()
        }
    }

    pub fn restore_history_entry(&mut self, id: u64) -> Result<GuidelinesDocument> {
        let snapshot = self
            .history
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.guidelines.clone())
            .ok_or(StoreError::HistoryEntryNotFound { id })?;
        self.draft = Some(snapshot.clone());
        self.updated_at = Some(Utc::now());
        Ok(snapshot)
    }

    pub fn metadata(&self) -> DocumentMeta {
        DocumentMeta {
            document_id: self.document_id,
            revision_id: self.history.first().map(|entry| entry.id),
            updated_at: self.updated_at,
        }
    }
}
