use content_guidelines::core::guidelines::GuidelinesDocument;
use content_guidelines::core::packet::{
    PacketOptions, Task, build_block_guidelines, build_packet, build_packet_from_store,
    build_post_packet,
};
use content_guidelines::core::store::{DocumentStore, DocumentVariant, InMemoryDocumentStore};
use content_guidelines::error::{GuidelinesError, PacketError};
use strum::IntoEnumIterator;

use crate::support::{post_content, sample_document};

fn structured_keys(document: &GuidelinesDocument, task: Task) -> Vec<String> {
    let packet = build_packet(Some(document), &PacketOptions::for_task(task)).unwrap();
    let value = serde_json::to_value(&packet.packet_structured).unwrap();
    value.as_object().unwrap().keys().cloned().collect()
}

#[test]
fn structured_keys_follow_task_sections() {
    let mut doc = sample_document();
    doc.voice_tone = Default::default();

    for task in Task::iter() {
        let mut expected: Vec<String> = task
            .sections()
            .iter()
            .filter(|section| !doc.section_is_empty(**section))
            .map(|section| {
                let key: &str = section.as_ref();
                key.to_string()
            })
            .collect();
        expected.sort();
        let mut keys = structured_keys(&doc, task);
        keys.sort();
        assert_eq!(keys, expected, "task {task}");
    }
}

#[test]
fn sections_render_in_task_order() {
    let packet = build_packet(Some(&sample_document()), &PacketOptions::for_task(Task::Writing))
        .unwrap();
    let text = &packet.packet_text;
    let brand = text.find("About this site:").unwrap();
    let voice = text.find("### Voice & Tone").unwrap();
    let rules = text.find("### Copy Rules").unwrap();
    let notes = text.find("### Additional Notes").unwrap();
    assert!(brand < voice && voice < rules && rules < notes);
}

#[test]
fn long_packets_are_cut_to_exact_budget() {
    let mut doc = sample_document();
    doc.notes = "Lorem ipsum dolor sit amet. ".repeat(40);

    let packet = build_packet(
        Some(&doc),
        &PacketOptions::for_task(Task::Writing).with_max_chars(200),
    )
    .unwrap();
    assert_eq!(packet.packet_text.chars().count(), 200);
    assert!(packet.packet_text.ends_with("..."));
}

#[test]
fn short_packets_are_untouched() {
    let packet = build_packet(
        Some(&sample_document()),
        &PacketOptions::for_task(Task::Image).with_max_chars(10_000),
    )
    .unwrap();
    assert!(!packet.packet_text.ends_with("..."));
    assert!(packet.packet_text.starts_with("## SITE CONTENT GUIDELINES"));
}

#[test]
fn block_rules_append_after_site_rules() {
    let doc = sample_document();

    let with_block = build_packet(
        Some(&doc),
        &PacketOptions::for_task(Task::Writing).with_block("core/quote"),
    )
    .unwrap();
    let rules = with_block.packet_structured.copy_rules.unwrap();
    assert_eq!(rules.dos, vec!["Lead with the dish", "Attribute every quote"]);
    assert!(with_block.packet_text.contains("(Context: core/quote block)"));
    assert!(with_block.packet_text.contains("Keep quotes under 40 words"));

    let without_block = build_packet(Some(&doc), &PacketOptions::for_task(Task::Writing)).unwrap();
    assert_eq!(
        without_block.packet_structured.copy_rules.unwrap().dos,
        vec!["Lead with the dish"]
    );
}

#[test]
fn unconfigured_block_leaves_packet_alone() {
    let doc = sample_document();
    let plain = build_packet(Some(&doc), &PacketOptions::for_task(Task::Cta)).unwrap();
    let scoped = build_packet(
        Some(&doc),
        &PacketOptions::for_task(Task::Cta).with_block("core/heading"),
    )
    .unwrap();
    assert_eq!(plain.packet_structured, scoped.packet_structured);
}

#[test]
fn missing_and_default_documents_agree() {
    let options = PacketOptions::for_task(Task::Writing);
    let missing = build_packet(None, &options).unwrap();
    let default = build_packet(Some(&GuidelinesDocument::default()), &options).unwrap();
    assert!(missing.packet_structured.is_empty());
    assert_eq!(missing.packet_structured, default.packet_structured);
}

#[test]
fn max_chars_out_of_range_is_rejected() {
    for max_chars in [99, 10_001] {
        let err = build_packet(
            Some(&sample_document()),
            &PacketOptions::default().with_max_chars(max_chars),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GuidelinesError::Packet(PacketError::MaxCharsOutOfRange { .. })
        ));
    }
}

#[test]
fn store_packets_carry_revision_metadata() {
    let store = InMemoryDocumentStore::default();
    store.save_draft(&sample_document()).unwrap();
    store.publish_draft().unwrap();

    let packet = build_packet_from_store(
        &store,
        DocumentVariant::Active,
        &PacketOptions::default(),
    )
    .unwrap();
    let meta = store.metadata().unwrap();
    assert_eq!(packet.guidelines_id, Some(meta.document_id));
    assert_eq!(packet.revision_id, meta.revision_id);
    assert!(packet.updated_at.is_some());
}

#[test]
fn empty_store_gives_neutral_packet() {
    let store = InMemoryDocumentStore::default();
    let packet =
        build_packet_from_store(&store, DocumentVariant::Draft, &PacketOptions::default()).unwrap();
    assert_eq!(packet.packet_text, "");
    assert!(packet.guidelines_id.is_none());
}

#[test]
fn post_packet_lists_blocks_and_their_rules() {
    let mut content = post_content(&["Intro"]);
    content.push_str("\n<!-- wp:quote -->\n<blockquote>Taste first.</blockquote>\n<!-- /wp:quote -->");

    let packet = build_post_packet(
        Some(&sample_document()),
        &content,
        &PacketOptions::for_task(Task::Writing),
    )
    .unwrap();
    assert_eq!(packet.blocks_in_post, vec!["core/paragraph", "core/quote"]);
    assert_eq!(packet.block_guidelines.len(), 1);
    assert_eq!(packet.block_guidelines[0].block_name, "core/quote");
    assert!(packet.packet_text.contains("### Block-Specific Rules"));
    assert!(packet.packet_text.contains("Attribute every quote"));
}

#[test]
fn block_batch_skips_unconfigured_blocks() {
    let names = vec!["core/quote".to_string(), "core/paragraph".to_string()];
    let batch = build_block_guidelines(&sample_document(), &names);
    assert!(batch.blocks["core/quote"].is_some());
    assert!(batch.blocks["core/paragraph"].is_none());
    assert!(batch.packet_text.contains("**core/quote:**"));
    assert!(!batch.packet_text.contains("core/paragraph"));
    assert!(batch.packet_text.contains("### Site Rules"));
}
