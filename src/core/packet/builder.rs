use super::render::render_text;
use super::select::{merge_block, select_sections};
use super::types::{ContextPacket, PacketOptions};
use crate::core::guidelines::GuidelinesDocument;
use crate::core::store::{DocumentMeta, DocumentStore, DocumentVariant, resolve_document};
use crate::error::Result;
use crate::utils::text::truncate_to_budget;

/// Build the context packet for `document`.
///
/// Options are validated before anything else. With no document the packet
/// is empty: blank text, empty structure, no metadata.
pub fn build_packet(
    document: Option<&GuidelinesDocument>,
    options: &PacketOptions,
) -> Result<ContextPacket> {
    build_packet_with_meta(document, None, options)
}

/// [`build_packet`] with store identifiers filled in.
pub fn build_packet_with_meta(
    document: Option<&GuidelinesDocument>,
    meta: Option<&DocumentMeta>,
    options: &PacketOptions,
) -> Result<ContextPacket> {
    options.validate()?;

    let Some(document) = document else {
        return Ok(ContextPacket {
            post_id: options.post_id,
            locale: options.locale.clone(),
            ..ContextPacket::default()
        });
    };

    let block_name = options.block();
    let mut sections = select_sections(document, options.task);
    if let Some(block_name) = block_name {
        sections = merge_block(sections, document, block_name);
    }

    let text = render_text(&sections, block_name);
    let rendered_chars = text.chars().count();
    let packet_text = truncate_to_budget(&text, options.max_chars);
    if rendered_chars > options.max_chars {
        tracing::debug!(
            rendered_chars,
            max_chars = options.max_chars,
            "truncated context packet"
        );
    }

    Ok(ContextPacket {
        packet_text,
        packet_structured: sections,
        guidelines_id: meta.map(|meta| meta.document_id),
        revision_id: meta.and_then(|meta| meta.revision_id),
        updated_at: meta.and_then(|meta| meta.updated_at),
        post_id: options.post_id,
        locale: options.locale.clone(),
    })
}

/// Build a packet from the store's draft (falling back to active) or active
/// document.
pub fn build_packet_from_store(
    store: &dyn DocumentStore,
    variant: DocumentVariant,
    options: &PacketOptions,
) -> Result<ContextPacket> {
    options.validate()?;
    let Some(document) = resolve_document(store, variant)? else {
        return build_packet(None, options);
    };
    let meta = store.metadata()?;
    build_packet_with_meta(Some(&document), Some(&meta), options)
}
