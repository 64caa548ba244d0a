// Guidelines document model and edits.

pub mod edit;
pub(crate) mod serde_helpers;
pub mod transfer;
pub mod types;

pub use edit::{
    is_qualified_block_name, merge_patch, normalize_legacy_keys, sanitized, with_block_guidelines,
};
pub use transfer::{ExportEnvelope, export, import};
pub use types::*;
