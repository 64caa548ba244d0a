use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::core::guidelines::Section;

/// Kind of generation a packet is prepared for.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Task {
    #[default]
    Writing,
    Headline,
    Cta,
    Image,
    Coach,
}

static WRITING_SECTIONS: &[Section] = &[
    Section::BrandContext,
    Section::VoiceTone,
    Section::CopyRules,
    Section::Vocabulary,
    Section::Notes,
];
static HEADLINE_SECTIONS: &[Section] = &[Section::VoiceTone, Section::CopyRules, Section::Vocabulary];
static CTA_SECTIONS: &[Section] = &[Section::BrandContext, Section::CopyRules, Section::Vocabulary];
static IMAGE_SECTIONS: &[Section] = &[Section::BrandContext, Section::Images];
static COACH_SECTIONS: &[Section] = &[Section::VoiceTone, Section::CopyRules, Section::Vocabulary];

impl Task {
    /// Unknown task names fall back to `Writing`.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::from_str(raw.trim()).unwrap_or_default()
    }

    /// Sections a packet for this task draws from, in render order.
    pub fn sections(self) -> &'static [Section] {
        match self {
            Self::Writing => WRITING_SECTIONS,
            Self::Headline => HEADLINE_SECTIONS,
            Self::Cta => CTA_SECTIONS,
            Self::Image => IMAGE_SECTIONS,
            Self::Coach => COACH_SECTIONS,
        }
    }
}
