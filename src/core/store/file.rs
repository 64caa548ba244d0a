use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::state::StoreState;
use super::traits::DocumentStore;
use super::types::{DocumentMeta, HistoryEntry, StoreSettings};
use crate::core::guidelines::GuidelinesDocument;
use crate::error::{Result, StoreError};

/// Store backed by a single JSON file.
///
/// Every operation reloads the file, so edits made by another process
/// between calls are picked up. Writes go through a temp file and rename.
pub struct JsonFileStore {
    path: PathBuf,
    settings: StoreSettings,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, settings: StoreSettings) -> Self {
        Self {
            path: path.into(),
            settings,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreState> {
        if !self.path.exists() {
            return Ok(StoreState::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(StoreError::Io)?;
        if raw.trim().is_empty() {
            return Ok(StoreState::default());
        }
        let mut state: StoreState = serde_json::from_str(&raw).map_err(|e| {
            StoreError::Serialization(format!("{}: {e}", self.path.display()))
        })?;
        state.repair_legacy_keys(&self.settings.known_namespaces);
        Ok(state)
    }

    fn persist(&self, state: &StoreState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        write_atomic(&self.path, &content)
    }

    fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> Result<T> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        let state = self.load()?;
        Ok(f(&state))
    }

    fn update<T>(&self, f: impl FnOnce(&mut StoreState) -> Result<T>) -> Result<T> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        let mut state = self.load()?;
        let out = f(&mut state)?;
        self.persist(&state)?;
        Ok(out)
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(StoreError::Io)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(StoreError::Io)?;

    if let Err(rename_error) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(StoreError::Io(rename_error).into());
    }

    Ok(())
}

impl DocumentStore for JsonFileStore {
    fn active(&self) -> Result<Option<GuidelinesDocument>> {
        self.read(|state| state.active.clone())
    }

    fn draft(&self) -> Result<Option<GuidelinesDocument>> {
        self.read(|state| state.draft.clone())
    }

    fn save_draft(&self, document: &GuidelinesDocument) -> Result<()> {
        self.update(|state| state.save_draft(document))?;
        tracing::debug!(path = %self.path.display(), "saved guidelines draft");
        Ok(())
    }

    fn publish_draft(&self) -> Result<GuidelinesDocument> {
        let settings = &self.settings;
        let (id, active) = self.update(|state| {
            let id = state.publish_draft(settings)?;
            Ok((id, state.active.clone().unwrap_or_default()))
        })?;
        tracing::info!(history_id = id, path = %self.path.display(), "published guidelines draft");
        Ok(active)
    }

    fn discard_draft(&self) -> Result<bool> {
        self.update(|state| Ok(state.discard_draft()))
    }

    fn history(&self, document_id: u64) -> Result<Vec<HistoryEntry>> {
        self.read(|state| state.history(document_id))
    }

    fn restore_history_entry(&self, id: u64) -> Result<GuidelinesDocument> {
        let restored = self.update(|state| state.restore_history_entry(id))?;
        tracing::info!(history_id = id, "restored history entry as draft");
        Ok(restored)
    }

    fn metadata(&self) -> Result<DocumentMeta> {
        self.read(StoreState::metadata)
    }
}
