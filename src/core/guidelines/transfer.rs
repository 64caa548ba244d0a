use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::edit::{merge_patch, normalize_legacy_keys, sanitized};
use super::types::GuidelinesDocument;
use crate::error::{DocumentError, Result};

/// Format tag written into export envelopes.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Portable export of a guidelines document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEnvelope {
    pub guidelines: GuidelinesDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
}

/// Wrap `document` for export. Metadata is only stamped when `site_url` is
/// given.
pub fn export(document: &GuidelinesDocument, site_url: Option<&str>) -> ExportEnvelope {
    let mut envelope = ExportEnvelope {
        guidelines: document.clone(),
        version: None,
        exported_at: None,
        site_url: None,
    };
    if let Some(site_url) = site_url {
        envelope.version = Some(EXPORT_FORMAT_VERSION.to_string());
        envelope.exported_at = Some(Utc::now());
        envelope.site_url = Some(site_url.to_string());
    }
    envelope
}

/// Turn an import payload into the document to save as draft.
///
/// `payload` is either an export envelope or a bare document object. With
/// `merge`, the payload is merged into `existing`; otherwise it replaces it.
/// The result is sanitized.
pub fn import(existing: &GuidelinesDocument, payload: &Value, merge: bool) -> Result<GuidelinesDocument> {
    let guidelines = payload.get("guidelines").unwrap_or(payload);
    if !guidelines.is_object() {
        return Err(DocumentError::InvalidImport("guidelines must be a JSON object".into()).into());
    }

    let imported = if merge {
        merge_patch(existing, guidelines)?
    } else {
        serde_json::from_value(normalize_legacy_keys(guidelines))
            .map_err(|e| DocumentError::InvalidImport(e.to_string()))?
    };
    sanitized(&imported)
}
