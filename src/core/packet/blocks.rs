use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::builder::build_packet;
use super::render::render_rule_list;
use super::types::{PacketOptions, PacketSections};
use crate::core::guidelines::{BlockGuidelines, CopyRules, GuidelinesDocument};
use crate::error::Result;

/// Opening block delimiters: `<!-- wp:name` or `<!-- wp:namespace/name`.
/// Closing delimiters (`<!-- /wp:name -->`) do not match.
static BLOCK_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s+wp:([a-z][a-z0-9_-]*(?:/[a-z][a-z0-9_-]*)?)").unwrap()
});

const DEFAULT_BLOCK_NAMESPACE: &str = "core";

/// Block names used in serialized post content, first-seen order, without
/// duplicates. Names without a namespace belong to `core`.
pub fn extract_block_names(post_content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for captures in BLOCK_OPENER.captures_iter(post_content) {
        let raw = &captures[1];
        let name = if raw.contains('/') {
            raw.to_string()
        } else {
            format!("{DEFAULT_BLOCK_NAMESPACE}/{raw}")
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn push_block_entry(lines: &mut Vec<String>, block_name: &str, rules: &BlockGuidelines) {
    lines.push(String::new());
    lines.push(format!("**{block_name}:**"));
    render_rule_list(lines, &rules.copy_rules.dos, &rules.copy_rules.donts);
    if !rules.notes.is_empty() {
        lines.push(format!("Note: {}", rules.notes));
    }
}

/// Site copy rules plus the rules for a set of block types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockGuidelinesPacket {
    pub site_rules: CopyRules,
    /// Every requested block; `None` when the block has no rules.
    pub blocks: BTreeMap<String, Option<BlockGuidelines>>,
    pub packet_text: String,
}

pub fn build_block_guidelines(
    document: &GuidelinesDocument,
    block_names: &[String],
) -> BlockGuidelinesPacket {
    let site_rules = document.copy_rules.clone();
    let mut lines = vec!["## CONTENT GUIDELINES".to_string()];

    if !site_rules.dos.is_empty() || !site_rules.donts.is_empty() {
        lines.push(String::new());
        lines.push("### Site Rules".to_string());
        render_rule_list(&mut lines, &site_rules.dos, &site_rules.donts);
    }

    let mut blocks = BTreeMap::new();
    let mut wrote_heading = false;
    for block_name in block_names {
        let rules = document.block(block_name).cloned();
        if let Some(rules) = &rules {
            if !wrote_heading {
                lines.push(String::new());
                lines.push("### Block-Specific Rules".to_string());
                wrote_heading = true;
            }
            push_block_entry(&mut lines, block_name, rules);
        }
        blocks.insert(block_name.clone(), rules);
    }

    BlockGuidelinesPacket {
        site_rules,
        blocks,
        packet_text: lines.join("\n"),
    }
}

/// Rules for one block found in a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedBlockRules {
    pub block_name: String,
    #[serde(flatten)]
    pub rules: BlockGuidelines,
}

/// Context packet for a whole post, with rules for the blocks it uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostPacket {
    pub packet_text: String,
    pub packet_structured: PacketSections,
    pub blocks_in_post: Vec<String>,
    /// Only blocks with configured rules, in first-seen order.
    pub block_guidelines: Vec<NamedBlockRules>,
}

/// Base packet for `options.task` followed by a block rules section.
///
/// The block section is appended after truncation of the base text, so
/// `options.max_chars` bounds the base packet only.
pub fn build_post_packet(
    document: Option<&GuidelinesDocument>,
    post_content: &str,
    options: &PacketOptions,
) -> Result<PostPacket> {
    let blocks_in_post = extract_block_names(post_content);
    let base = build_packet(document, options)?;

    let block_guidelines: Vec<NamedBlockRules> = document
        .map(|document| {
            blocks_in_post
                .iter()
                .filter_map(|name| {
                    document.block(name).map(|rules| NamedBlockRules {
                        block_name: name.clone(),
                        rules: rules.clone(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let mut packet_text = base.packet_text;
    if !block_guidelines.is_empty() {
        let mut lines = vec![String::new(), "### Block-Specific Rules".to_string()];
        for entry in &block_guidelines {
            push_block_entry(&mut lines, &entry.block_name, &entry.rules);
        }
        packet_text.push_str(&lines.join("\n"));
        packet_text.push('\n');
    }

    Ok(PostPacket {
        packet_text,
        packet_structured: base.packet_structured,
        blocks_in_post,
        block_guidelines,
    })
}
