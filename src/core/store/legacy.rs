//! Repair of block keys that lost their `/` separator.
//!
//! Older saves ran block keys through a key sanitizer that dropped the slash,
//! so `core/quote` came back as `corequote`. Keys are only repaired when they
//! start with a known namespace; anything else is kept verbatim and logged,
//! since guessing where the namespace ends could merge unrelated blocks.

use std::collections::BTreeMap;

use crate::core::guidelines::{BlockGuidelines, GuidelinesDocument, is_qualified_block_name};

/// Best-effort repair of a single stripped key.
pub fn repair_block_key(key: &str, known_namespaces: &[String]) -> Option<String> {
    if key.contains('/') {
        return None;
    }
    known_namespaces
        .iter()
        .filter(|namespace| !namespace.is_empty())
        .find_map(|namespace| {
            key.strip_prefix(namespace.as_str())
                .filter(|local| !local.is_empty())
                .map(|local| format!("{namespace}/{local}"))
        })
}

/// Copy of `blocks` with repairable keys rewritten.
///
/// When a repaired key collides with an existing qualified key, the
/// qualified entry wins.
pub fn repair_blocks(
    blocks: &BTreeMap<String, BlockGuidelines>,
    known_namespaces: &[String],
) -> BTreeMap<String, BlockGuidelines> {
    let mut repaired: BTreeMap<String, BlockGuidelines> = blocks
        .iter()
        .filter(|(key, _)| is_qualified_block_name(key))
        .map(|(key, block)| (key.clone(), block.clone()))
        .collect();

    for (key, block) in blocks.iter().filter(|(key, _)| !is_qualified_block_name(key)) {
        match repair_block_key(key, known_namespaces) {
            Some(fixed) if repaired.contains_key(&fixed) => {
                tracing::warn!(legacy_key = %key, key = %fixed, "dropping legacy block key shadowed by existing entry");
            }
            Some(fixed) => {
                tracing::debug!(legacy_key = %key, key = %fixed, "repaired legacy block key");
                repaired.insert(fixed, block.clone());
            }
            None => {
                tracing::warn!(legacy_key = %key, "block key has no namespace and no known prefix; leaving as-is");
                repaired.insert(key.clone(), block.clone());
            }
        }
    }
    repaired
}

/// Copy of `document` with its block keys repaired.
pub fn repair_document(document: &GuidelinesDocument, known_namespaces: &[String]) -> GuidelinesDocument {
    GuidelinesDocument {
        blocks: repair_blocks(&document.blocks, known_namespaces),
        ..document.clone()
    }
}
