use content_guidelines::core::guidelines::{BlockGuidelines, GuidelinesDocument};
use content_guidelines::core::store::{
    DocumentStore, DocumentVariant, InMemoryDocumentStore, JsonFileStore, StoreSettings,
    resolve_document, working_copy,
};
use content_guidelines::error::{GuidelinesError, StoreError};
use tempfile::TempDir;

use crate::support::sample_document;

fn notes(text: &str) -> GuidelinesDocument {
    GuidelinesDocument {
        notes: text.to_string(),
        ..GuidelinesDocument::default()
    }
}

fn file_store(tmp: &TempDir) -> JsonFileStore {
    JsonFileStore::new(tmp.path().join("guidelines.json"), StoreSettings::default())
}

/// Lifecycle checks shared by every adapter.
fn exercise_lifecycle(store: &dyn DocumentStore) {
    assert!(store.active().unwrap().is_none());
    assert!(store.draft().unwrap().is_none());
    assert!(matches!(
        store.publish_draft().unwrap_err(),
        GuidelinesError::Store(StoreError::NoDraft)
    ));

    store.save_draft(&notes("first")).unwrap();
    assert_eq!(
        resolve_document(store, DocumentVariant::Draft).unwrap(),
        Some(notes("first"))
    );
    assert!(resolve_document(store, DocumentVariant::Active).unwrap().is_none());

    let published = store.publish_draft().unwrap();
    assert_eq!(published.notes, "first");
    assert!(store.draft().unwrap().is_none());
    assert_eq!(
        resolve_document(store, DocumentVariant::Draft).unwrap(),
        Some(notes("first"))
    );

    store.save_draft(&notes("second")).unwrap();
    store.publish_draft().unwrap();

    let meta = store.metadata().unwrap();
    let history = store.history(meta.document_id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].guidelines.notes, "second");
    assert_eq!(meta.revision_id, Some(history[0].id));
    assert!(store.history(meta.document_id + 1).unwrap().is_empty());

    let restored = store.restore_history_entry(history[1].id).unwrap();
    assert_eq!(restored.notes, "first");
    assert_eq!(store.draft().unwrap(), Some(notes("first")));
    assert_eq!(store.active().unwrap(), Some(notes("second")));

    assert!(store.discard_draft().unwrap());
    assert!(!store.discard_draft().unwrap());

    assert!(matches!(
        store.restore_history_entry(999).unwrap_err(),
        GuidelinesError::Store(StoreError::HistoryEntryNotFound { id: 999 })
    ));
}

#[test]
fn memory_store_lifecycle() {
    exercise_lifecycle(&InMemoryDocumentStore::default());
}

#[test]
fn file_store_lifecycle() {
    let tmp = TempDir::new().unwrap();
    exercise_lifecycle(&file_store(&tmp));
}

#[test]
fn file_store_state_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    {
        let store = file_store(&tmp);
        store.save_draft(&sample_document()).unwrap();
        store.publish_draft().unwrap();
        store.save_draft(&notes("pending")).unwrap();
    }

    let reopened = file_store(&tmp);
    assert_eq!(reopened.active().unwrap(), Some(sample_document()));
    assert_eq!(reopened.draft().unwrap(), Some(notes("pending")));
    assert_eq!(reopened.metadata().unwrap().revision_id, Some(1));
}

#[test]
fn drafts_are_sanitized_on_save() {
    let store = InMemoryDocumentStore::default();
    let mut doc = notes("  <b>Bold</b>   claims\n only ");
    doc.blocks.insert("core/list".into(), BlockGuidelines::default());
    store.save_draft(&doc).unwrap();

    let draft = store.draft().unwrap().unwrap();
    assert_eq!(draft.notes, "Bold claims only");
    assert!(draft.blocks.is_empty());
}

#[test]
fn history_is_capped() {
    let store = InMemoryDocumentStore::new(StoreSettings {
        history_limit: 3,
        ..StoreSettings::default()
    });
    for n in 0..5 {
        store.save_draft(&notes(&format!("rev {n}"))).unwrap();
        store.publish_draft().unwrap();
    }
    let meta = store.metadata().unwrap();
    let history = store.history(meta.document_id).unwrap();
    let ids: Vec<u64> = history.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![5, 4, 3]);
}

#[test]
fn published_entries_record_author() {
    let store = InMemoryDocumentStore::new(StoreSettings {
        author_id: 42,
        ..StoreSettings::default()
    });
    store.save_draft(&notes("x")).unwrap();
    store.publish_draft().unwrap();
    let history = store.history(store.metadata().unwrap().document_id).unwrap();
    assert_eq!(history[0].author_id, 42);
}

#[test]
fn legacy_block_keys_are_repaired_on_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("guidelines.json");
    let raw = serde_json::json!({
        "active": {
            "blocks": {
                "corequote": { "notes": "Attribute quotes" },
                "core/heading": { "notes": "Sentence case" },
                "coreheading": { "notes": "Stale copy" },
                "mystery": { "notes": "Unknown origin" }
            }
        }
    });
    std::fs::write(&path, raw.to_string()).unwrap();

    let store = JsonFileStore::new(&path, StoreSettings::default());
    let active = store.active().unwrap().unwrap();
    let keys: Vec<&str> = active.blocks.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["core/heading", "core/quote", "mystery"]);
    assert_eq!(active.blocks["core/heading"].notes, "Sentence case");
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("guidelines.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::new(&path, StoreSettings::default());
    assert!(matches!(
        store.active().unwrap_err(),
        GuidelinesError::Store(StoreError::Serialization(_))
    ));
}

#[test]
fn working_copy_prefers_draft_then_active() {
    let store = InMemoryDocumentStore::default();
    assert_eq!(working_copy(&store).unwrap(), GuidelinesDocument::default());

    store.save_draft(&notes("active")).unwrap();
    store.publish_draft().unwrap();
    assert_eq!(working_copy(&store).unwrap().notes, "active");

    store.save_draft(&notes("draft")).unwrap();
    assert_eq!(working_copy(&store).unwrap().notes, "draft");
}
