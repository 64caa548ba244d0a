use super::task::Task;
use super::types::PacketSections;
use crate::core::guidelines::{CopyRules, GuidelinesDocument, Section};

/// Copy the non-empty sections `task` asks for.
pub fn select_sections(document: &GuidelinesDocument, task: Task) -> PacketSections {
    let mut selected = PacketSections::default();
    for &section in task.sections() {
        if document.section_is_empty(section) {
            continue;
        }
        match section {
            Section::BrandContext => selected.brand_context = Some(document.brand_context.clone()),
            Section::VoiceTone => selected.voice_tone = Some(document.voice_tone.clone()),
            Section::CopyRules => selected.copy_rules = Some(document.copy_rules.clone()),
            Section::Vocabulary => selected.vocabulary = Some(document.vocabulary.clone()),
            Section::Images => selected.images = Some(document.images.clone()),
            Section::Notes => selected.notes = Some(document.notes.clone()),
            Section::Heuristics | Section::References | Section::Blocks => {}
        }
    }
    tracing::debug!(%task, "selected packet sections");
    selected
}

/// Layer the rules for `block_name` on top of the selected sections.
///
/// Block dos and don'ts are appended after the site-level ones. A block
/// with no content, or not configured at all, leaves the sections as they
/// are.
pub fn merge_block(
    mut sections: PacketSections,
    document: &GuidelinesDocument,
    block_name: &str,
) -> PacketSections {
    let Some(block) = document.block(block_name) else {
        return sections;
    };

    if !block.copy_rules.is_empty() {
        let copy_rules = sections.copy_rules.get_or_insert_with(CopyRules::default);
        copy_rules.dos.extend(block.copy_rules.dos.iter().cloned());
        copy_rules.donts.extend(block.copy_rules.donts.iter().cloned());
    }
    if !block.notes.is_empty() {
        sections.block_notes = Some(block.notes.clone());
    }
    sections.block_name = Some(block_name.to_string());
    sections
}
