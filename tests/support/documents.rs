#![allow(dead_code)]

use content_guidelines::core::guidelines::{
    BlockCopyRules, BlockGuidelines, GuidelinesDocument, PrimaryGoal, Readability, TermNote,
};

/// A document with every packet-relevant section filled in.
pub fn sample_document() -> GuidelinesDocument {
    let mut doc = GuidelinesDocument::default();
    doc.brand_context.site_description = "Seasonal recipes for busy weeknights".into();
    doc.brand_context.audience = "Home cooks".into();
    doc.brand_context.primary_goal = Some(PrimaryGoal::Inform);
    doc.voice_tone.tone_traits = vec!["warm".into(), "practical".into()];
    doc.voice_tone.readability = Some(Readability::General);
    doc.copy_rules.dos = vec!["Lead with the dish".into()];
    doc.copy_rules.donts = vec!["Avoid creating urgency".into()];
    doc.vocabulary.avoid = vec![TermNote::new("class", "Sounds stuffy")];
    doc.vocabulary.prefer = vec![TermNote::new("weeknight", "Our core promise")];
    doc.images.dos = vec!["Natural light".into()];
    doc.notes = "Metric units first.".into();
    doc.blocks.insert(
        "core/quote".into(),
        BlockGuidelines {
            copy_rules: BlockCopyRules {
                dos: vec!["Attribute every quote".into()],
                donts: Vec::new(),
            },
            notes: "Keep quotes under 40 words".into(),
        },
    );
    doc
}

/// Post content wrapped in block markers.
pub fn post_content(paragraphs: &[&str]) -> String {
    paragraphs
        .iter()
        .map(|text| format!("<!-- wp:paragraph -->\n<p>{text}</p>\n<!-- /wp:paragraph -->"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
