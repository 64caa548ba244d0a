//! Text rendering of a selected packet.
//!
//! Each section renders as a `###` block followed by a blank line. Empty
//! sub-fields are skipped, and enum values go through the label tables below
//! (unknown values render verbatim).

use super::types::PacketSections;
use crate::core::guidelines::{
    BrandContext, CopyRules, ImageGuidelines, TermNote, VoiceTone, Vocabulary,
};

pub const PACKET_HEADER: &str = "## SITE CONTENT GUIDELINES";

static GOAL_LABELS: &[(&str, &str)] = &[
    ("subscribe", "Get email subscribers"),
    ("sell", "Sell products/services"),
    ("inform", "Inform and educate"),
    ("community", "Build community"),
    ("other", "Other"),
];

static POV_LABELS: &[(&str, &str)] = &[
    ("we_you", "Write as \"we\" speaking to \"you\""),
    ("i_you", "Write as \"I\" speaking to \"you\""),
    ("third_person", "Write in third person"),
];

static READABILITY_LABELS: &[(&str, &str)] = &[
    ("simple", "Simple (elementary level)"),
    ("general", "General audience"),
    ("expert", "Expert/technical"),
];

static FORMATTING_LABELS: &[(&str, &str)] = &[
    ("h2s", "Use H2 headings"),
    ("bullets", "Use bullet points"),
    ("short_paragraphs", "Keep paragraphs short"),
    ("single_cta", "Single CTA at end"),
];

static ACRONYM_LABELS: &[(&str, &str)] = &[
    ("expand_first", "Spell out on first use"),
    ("always_expand", "Always spell out"),
    ("acronym_only", "Use the acronym alone"),
];

static TEXT_POLICY_LABELS: &[(&str, &str)] = &[
    ("never", "Never include text in images"),
    ("only_if_requested", "Only include text if explicitly requested"),
    ("ok", "Text in images is acceptable"),
];

/// Display label for a stored enum value.
pub fn label<'a>(table: &'static [(&'static str, &'static str)], value: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map_or(value, |(_, label)| *label)
}

fn push_list(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(title.to_string());
    lines.extend(items.iter().map(|item| format!("- {item}")));
}

fn push_field(lines: &mut Vec<String>, prefix: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{prefix}{value}"));
    }
}

fn push_terms(lines: &mut Vec<String>, title: &str, terms: &[TermNote]) {
    if terms.is_empty() {
        return;
    }
    lines.push(title.to_string());
    for entry in terms {
        if entry.note.is_empty() {
            lines.push(format!("- \"{}\"", entry.term));
        } else {
            lines.push(format!("- \"{}\" ({})", entry.term, entry.note));
        }
    }
}

fn render_brand_context(lines: &mut Vec<String>, brand: &BrandContext) {
    push_field(lines, "About this site: ", &brand.site_description);
    push_field(lines, "Target audience: ", &brand.audience);
    if let Some(goal) = &brand.primary_goal {
        push_field(lines, "Primary goal: ", label(GOAL_LABELS, goal.as_str()));
    }
    if !brand.topics.is_empty() {
        lines.push(format!("Topics: {}", brand.topics.join(", ")));
    }
    lines.push(String::new());
}

fn render_voice_tone(lines: &mut Vec<String>, voice: &VoiceTone) {
    lines.push("### Voice & Tone".to_string());
    push_field(lines, "Voice: ", &voice.description);
    if !voice.tone_traits.is_empty() {
        lines.push(format!("Tone: {}", voice.tone_traits.join(", ")));
    }
    push_field(lines, "Tone notes: ", &voice.tone_notes);
    if let Some(pov) = &voice.pov {
        push_field(lines, "Point of view: ", label(POV_LABELS, pov.as_str()));
    }
    if let Some(readability) = &voice.readability {
        push_field(
            lines,
            "Readability: ",
            label(READABILITY_LABELS, readability.as_str()),
        );
    }
    push_field(lines, "Example of on-brand copy: ", &voice.example_good);
    push_field(lines, "Example to avoid: ", &voice.example_avoid);
    lines.push(String::new());
}

fn render_copy_rules(lines: &mut Vec<String>, rules: &CopyRules) {
    lines.push("### Copy Rules".to_string());
    push_list(lines, "DO:", &rules.dos);
    push_list(lines, "DON'T:", &rules.donts);
    if !rules.formatting.is_empty() {
        let items: Vec<&str> = rules
            .formatting
            .iter()
            .map(|rule| label(FORMATTING_LABELS, rule.as_str()))
            .collect();
        lines.push(format!("Formatting: {}", items.join(", ")));
    }
    lines.push(String::new());
}

fn render_vocabulary(lines: &mut Vec<String>, vocabulary: &Vocabulary) {
    lines.push("### Vocabulary".to_string());
    push_terms(lines, "PREFER these terms:", &vocabulary.prefer);
    push_terms(lines, "AVOID these terms:", &vocabulary.avoid);
    if !vocabulary.acronyms.is_empty() {
        lines.push(format!("Acronyms: {}", vocabulary.acronyms.join(", ")));
    }
    if let Some(usage) = &vocabulary.acronym_usage {
        push_field(lines, "Acronym usage: ", label(ACRONYM_LABELS, usage.as_str()));
    }
    if !vocabulary.custom_dictionary.is_empty() {
        lines.push(format!(
            "Accepted spellings: {}",
            vocabulary.custom_dictionary.join(", ")
        ));
    }
    push_list(lines, "Corrections:", &vocabulary.voice_corrections);
    lines.push(String::new());
}

fn render_images(lines: &mut Vec<String>, images: &ImageGuidelines) {
    lines.push("### Image Style".to_string());
    push_list(lines, "Image style:", &images.dos);
    push_list(lines, "Avoid in images:", &images.donts);
    if let Some(policy) = &images.text_policy {
        push_field(
            lines,
            "Text in images: ",
            label(TEXT_POLICY_LABELS, policy.as_str()),
        );
    }
    lines.push(String::new());
}

/// Full packet text before truncation.
pub fn render_text(sections: &PacketSections, block_name: Option<&str>) -> String {
    let mut lines = vec![PACKET_HEADER.to_string()];
    if let Some(block_name) = block_name {
        lines.push(format!("(Context: {block_name} block)"));
    }
    lines.push(String::new());

    if let Some(brand) = &sections.brand_context {
        render_brand_context(&mut lines, brand);
    }
    if let Some(voice) = &sections.voice_tone {
        render_voice_tone(&mut lines, voice);
    }
    if let Some(rules) = &sections.copy_rules {
        render_copy_rules(&mut lines, rules);
    }
    if let Some(vocabulary) = &sections.vocabulary {
        render_vocabulary(&mut lines, vocabulary);
    }
    if let Some(images) = &sections.images {
        render_images(&mut lines, images);
    }
    if let Some(notes) = sections.notes.as_deref().filter(|notes| !notes.is_empty()) {
        lines.push("### Additional Notes".to_string());
        lines.push(notes.to_string());
        lines.push(String::new());
    }
    if let Some(block_notes) = sections.block_notes.as_deref().filter(|notes| !notes.is_empty()) {
        let heading = sections.block_name.as_deref().unwrap_or("Block");
        lines.push(format!("### {heading} Notes"));
        lines.push(block_notes.to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Copy rules as a DO/DON'T list, used by the block batch and post packets.
pub fn render_rule_list(lines: &mut Vec<String>, dos: &[String], donts: &[String]) {
    push_list(lines, "DO:", dos);
    push_list(lines, "DON'T:", donts);
}
