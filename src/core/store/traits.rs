use super::types::{DocumentMeta, DocumentVariant, HistoryEntry};
use crate::core::guidelines::GuidelinesDocument;
use crate::error::Result;

/// Persistence collaborator for the guidelines lifecycle.
///
/// Absence is not an error: `active()` and `draft()` return `None` when
/// nothing was saved yet.
pub trait DocumentStore: Send + Sync {
    fn active(&self) -> Result<Option<GuidelinesDocument>>;
    fn draft(&self) -> Result<Option<GuidelinesDocument>>;
    /// Sanitizes and stores `document` as the draft.
    fn save_draft(&self, document: &GuidelinesDocument) -> Result<()>;
    /// Promotes the draft to active and records a history entry.
    fn publish_draft(&self) -> Result<GuidelinesDocument>;
    fn discard_draft(&self) -> Result<bool>;
    /// Entries for `document_id`, newest first.
    fn history(&self, document_id: u64) -> Result<Vec<HistoryEntry>>;
    /// Makes the snapshot of history entry `id` the draft.
    fn restore_history_entry(&self, id: u64) -> Result<GuidelinesDocument>;
    fn metadata(&self) -> Result<DocumentMeta>;
}

/// Load the requested variant. `Draft` falls back to active when there is no
/// draft.
pub fn resolve_document(
    store: &dyn DocumentStore,
    variant: DocumentVariant,
) -> Result<Option<GuidelinesDocument>> {
    match variant {
        DocumentVariant::Draft => match store.draft()? {
            Some(draft) => Ok(Some(draft)),
            None => store.active(),
        },
        DocumentVariant::Active => store.active(),
    }
}

/// Document a new draft starts from: the existing draft, then active, then
/// the default document.
pub fn working_copy(store: &dyn DocumentStore) -> Result<GuidelinesDocument> {
    Ok(resolve_document(store, DocumentVariant::Draft)?.unwrap_or_default())
}
