use serde_json::{Map, Value};

use super::types::{BlockGuidelines, GuidelinesDocument};
use crate::error::{DocumentError, Result};
use crate::utils::text::sanitize_text;

/// True when `name` has the `namespace/name` form with both parts present.
pub fn is_qualified_block_name(name: &str) -> bool {
    name.split_once('/')
        .is_some_and(|(namespace, local)| !namespace.is_empty() && !local.is_empty())
}

/// Return a copy of `document` with `block_name` set to `block`.
///
/// An empty `block` removes the entry so the map only holds configured
/// blocks.
pub fn with_block_guidelines(
    document: &GuidelinesDocument,
    block_name: &str,
    block: BlockGuidelines,
) -> Result<GuidelinesDocument> {
    if !is_qualified_block_name(block_name) {
        return Err(DocumentError::InvalidBlockName(block_name.to_string()).into());
    }
    let mut updated = document.clone();
    if block.has_content() {
        updated.blocks.insert(block_name.to_string(), block);
    } else {
        updated.blocks.remove(block_name);
    }
    Ok(updated)
}

/// Deep-merge `patch` into `base`: lists append, objects merge key by key,
/// anything else overwrites.
pub fn merge_values(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_values(existing, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (Value::Array(base_items), Value::Array(patch_items)) => {
            base_items.extend(patch_items.iter().cloned());
        }
        (slot, patch_value) => *slot = patch_value.clone(),
    }
}

/// Key older documents use for the image section.
const LEGACY_IMAGES_KEY: &str = "image_style";

/// Copy of a document object with the legacy image key folded into
/// `images`. When both keys are present the legacy value is merged first.
pub fn normalize_legacy_keys(document: &Value) -> Value {
    let mut normalized = document.clone();
    if let Value::Object(map) = &mut normalized {
        if let Some(mut legacy) = map.remove(LEGACY_IMAGES_KEY) {
            if let Some(images) = map.remove("images") {
                merge_values(&mut legacy, &images);
            }
            map.insert("images".to_string(), legacy);
        }
    }
    normalized
}

/// Merge a partial document (as JSON) into `existing` and return the result.
pub fn merge_patch(existing: &GuidelinesDocument, patch: &Value) -> Result<GuidelinesDocument> {
    if !patch.is_object() {
        return Err(DocumentError::InvalidImport("expected a JSON object".into()).into());
    }
    let mut merged = serde_json::to_value(existing)
        .map_err(|e| DocumentError::Malformed(e.to_string()))?;
    merge_values(&mut merged, &normalize_legacy_keys(patch));
    serde_json::from_value(merged).map_err(|e| DocumentError::Malformed(e.to_string()).into())
}

fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(sanitize_text(&text)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, sanitize_value(value)))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

/// Copy of `document` with every string field reduced to plain single-line
/// text. Block keys are left as they are.
pub fn sanitized(document: &GuidelinesDocument) -> Result<GuidelinesDocument> {
    let raw = serde_json::to_value(document).map_err(|e| DocumentError::Malformed(e.to_string()))?;
    let mut document: GuidelinesDocument = serde_json::from_value(sanitize_value(raw)).map_err(|e| DocumentError::Malformed(e.to_string()))?;
    document.blocks.retain(|_, block| block.has_content());
    Ok(document)
}
