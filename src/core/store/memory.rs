use std::sync::{Mutex, MutexGuard};

use super::state::StoreState;
use super::traits::DocumentStore;
use super::types::{DocumentMeta, HistoryEntry, StoreSettings};
use crate::core::guidelines::GuidelinesDocument;
use crate::error::{Result, StoreError};

/// Process-local store, mainly for tests and embedding.
pub struct InMemoryDocumentStore {
    state: Mutex<StoreState>,
    settings: StoreSettings,
}

impl InMemoryDocumentStore {
    pub fn new(settings: StoreSettings) -> Self {
        Self::with_state(StoreState::default(), settings)
    }

    /// Seed the store from previously saved state. Legacy block keys are
    /// repaired on the way in.
    pub fn with_state(mut state: StoreState, settings: StoreSettings) -> Self {
        state.repair_legacy_keys(&settings.known_namespaces);
        Self {
            state: Mutex::new(state),
            settings,
        }
    }

    /// Seed with an active document only.
    pub fn with_active(active: GuidelinesDocument, settings: StoreSettings) -> Self {
        Self::with_state(
            StoreState {
                active: Some(active),
                ..StoreState::default()
            },
            settings,
        )
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()).into())
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new(StoreSettings::default())
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn active(&self) -> Result<Option<GuidelinesDocument>> {
        Ok(self.lock()?.active.clone())
    }

    fn draft(&self) -> Result<Option<GuidelinesDocument>> {
        Ok(self.lock()?.draft.clone())
    }

    fn save_draft(&self, document: &GuidelinesDocument) -> Result<()> {
        self.lock()?.save_draft(document)
    }

    fn publish_draft(&self) -> Result<GuidelinesDocument> {
        let mut state = self.lock()?;
        let id = state.publish_draft(&self.settings)?;
        tracing::info!(history_id = id, "published guidelines draft");
        Ok(state.active.clone().unwrap_or_default())
    }

    fn discard_draft(&self) -> Result<bool> {
        Ok(self.lock()?.discard_draft())
    }

    fn history(&self, document_id: u64) -> Result<Vec<HistoryEntry>> {
        Ok(self.lock()?.history(document_id))
    }

    fn restore_history_entry(&self, id: u64) -> Result<GuidelinesDocument> {
        let restored = self.lock()?.restore_history_entry(id)?;
        tracing::info!(history_id = id, "restored history entry as draft");
        Ok(restored)
    }

    fn metadata(&self) -> Result<DocumentMeta> {
        Ok(self.lock()?.metadata())
    }
}
