use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::Task;
use crate::core::guidelines::{BrandContext, CopyRules, ImageGuidelines, VoiceTone, Vocabulary};
use crate::error::{PacketError, Result};

pub const DEFAULT_MAX_CHARS: usize = 2000;
pub const MIN_MAX_CHARS: usize = 100;
pub const MAX_MAX_CHARS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketOptions {
    pub task: Task,
    pub max_chars: usize,
    pub block_name: Option<String>,
    /// Passed through to the packet, not interpreted.
    pub post_id: Option<u64>,
    /// Passed through to the packet, not interpreted.
    pub locale: Option<String>,
}

impl Default for PacketOptions {
    fn default() -> Self {
        Self {
            task: Task::default(),
            max_chars: DEFAULT_MAX_CHARS,
            block_name: None,
            post_id: None,
            locale: None,
        }
    }
}

impl PacketOptions {
    pub fn for_task(task: Task) -> Self {
        Self {
            task,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_block(mut self, block_name: impl Into<String>) -> Self {
        self.block_name = Some(block_name.into());
        self
    }

    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_MAX_CHARS..=MAX_MAX_CHARS).contains(&self.max_chars) {
            return Err(PacketError::MaxCharsOutOfRange {
                value: self.max_chars,
                min: MIN_MAX_CHARS,
                max: MAX_MAX_CHARS,
            }
            .into());
        }
        Ok(())
    }

    /// Requested block name, ignoring blank strings.
    pub fn block(&self) -> Option<&str> {
        self.block_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Task-relevant subset of a document, after block merge.
///
/// Sections the task did not select, or that were empty, are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PacketSections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_context: Option<BrandContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<VoiceTone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_rules: Option<CopyRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vocabulary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageGuidelines>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_notes: Option<String>,
    /// Set when block rules were merged in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_name: Option<String>,
}

impl PacketSections {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextPacket {
    pub packet_text: String,
    pub packet_structured: PacketSections,
    pub guidelines_id: Option<u64>,
    pub revision_id: Option<u64>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}
