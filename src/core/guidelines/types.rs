use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::serde_helpers::{empty_as_none, lenient_number};

/// Schema version written into fresh documents.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

// Closed vocabularies stored as plain strings. Values outside the known set
// are kept in `Custom` so a newer editor's data survives a round trip.
macro_rules! guideline_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Custom(String),
        }

        impl $name {
            /// Stored string form.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Custom(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Custom(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Custom(value) => value,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

guideline_enum!(
    /// What the site's content is mostly trying to achieve.
    PrimaryGoal {
        Subscribe => "subscribe",
        Sell => "sell",
        Inform => "inform",
        Community => "community",
        Other => "other",
    }
);

guideline_enum!(
    PointOfView {
        WeYou => "we_you",
        IYou => "i_you",
        ThirdPerson => "third_person",
    }
);

guideline_enum!(
    /// Target readability; drives the lint sentence-length ceiling.
    Readability {
        Simple => "simple",
        General => "general",
        Expert => "expert",
    }
);

guideline_enum!(
    FormattingRule {
        H2s => "h2s",
        Bullets => "bullets",
        ShortParagraphs => "short_paragraphs",
        SingleCta => "single_cta",
    }
);

guideline_enum!(
    AcronymUsage {
        ExpandFirst => "expand_first",
        AlwaysExpand => "always_expand",
        AcronymOnly => "acronym_only",
    }
);

guideline_enum!(
    /// `Described` means the level is spelled out in `reading_level_custom`.
    ReadingLevel {
        Simple => "simple",
        Standard => "standard",
        Advanced => "advanced",
        Described => "custom",
    }
);

guideline_enum!(
    TextPolicy {
        Never => "never",
        OnlyIfRequested => "only_if_requested",
        Allowed => "ok",
    }
);

// ── Sections ─────────────────────────────────────────────────────

/// Top-level sections of a guidelines document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    BrandContext,
    VoiceTone,
    CopyRules,
    Vocabulary,
    Heuristics,
    References,
    Images,
    Notes,
    Blocks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandContext {
    pub site_description: String,
    pub audience: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<PrimaryGoal>,
    pub topics: Vec<String>,
}

impl BrandContext {
    pub fn is_empty(&self) -> bool {
        self.site_description.is_empty()
            && self.audience.is_empty()
            && self.primary_goal.is_none()
            && self.topics.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceTone {
    pub description: String,
    pub tone_traits: Vec<String>,
    pub tone_notes: String,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub pov: Option<PointOfView>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub readability: Option<Readability>,
    pub example_good: String,
    pub example_avoid: String,
}

impl VoiceTone {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
            && self.tone_traits.is_empty()
            && self.tone_notes.is_empty()
            && self.pov.is_none()
            && self.readability.is_none()
            && self.example_good.is_empty()
            && self.example_avoid.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyRules {
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub formatting: Vec<FormattingRule>,
}

impl CopyRules {
    pub fn is_empty(&self) -> bool {
        self.dos.is_empty() && self.donts.is_empty() && self.formatting.is_empty()
    }
}

/// A vocabulary entry. Older documents store bare strings; those read as a
/// term without a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TermNoteRepr")]
pub struct TermNote {
    pub term: String,
    pub note: String,
}

impl TermNote {
    pub fn new(term: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            note: note.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TermNoteRepr {
    Bare(String),
    Full {
        #[serde(default)]
        term: String,
        #[serde(default)]
        note: String,
    },
}

impl From<TermNoteRepr> for TermNote {
    fn from(repr: TermNoteRepr) -> Self {
        match repr {
            TermNoteRepr::Bare(term) => Self {
                term,
                note: String::new(),
            },
            TermNoteRepr::Full { term, note } => Self { term, note },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub prefer: Vec<TermNote>,
    pub avoid: Vec<TermNote>,
    pub acronyms: Vec<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub acronym_usage: Option<AcronymUsage>,
    pub custom_dictionary: Vec<String>,
    pub voice_corrections: Vec<String>,
}

impl Vocabulary {
    pub fn is_empty(&self) -> bool {
        self.prefer.is_empty()
            && self.avoid.is_empty()
            && self.acronyms.is_empty()
            && self.acronym_usage.is_none()
            && self.custom_dictionary.is_empty()
            && self.voice_corrections.is_empty()
    }
}

/// Numeric writing targets. Every target is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub words_per_sentence: Option<u32>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub sentences_per_paragraph: Option<f64>,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub paragraphs_per_section: Option<u32>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub reading_level: Option<ReadingLevel>,
    pub reading_level_custom: String,
    #[serde(deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub max_syllables: Option<u32>,
}

impl Heuristics {
    pub fn is_empty(&self) -> bool {
        self.words_per_sentence.is_none()
            && self.sentences_per_paragraph.is_none()
            && self.paragraphs_per_section.is_none()
            && self.reading_level.is_none()
            && self.reading_level_custom.is_empty()
            && self.max_syllables.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub url: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct References {
    pub references: Vec<Reference>,
    pub notes: String,
}

impl References {
    pub fn is_empty(&self) -> bool {
        self.references.is_empty() && self.notes.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub url: String,
    pub alt: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageGuidelines {
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub text_policy: Option<TextPolicy>,
    pub reference_images: Vec<ReferenceImage>,
}

impl ImageGuidelines {
    pub fn is_empty(&self) -> bool {
        self.dos.is_empty()
            && self.donts.is_empty()
            && self.text_policy.is_none()
            && self.reference_images.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockCopyRules {
    pub dos: Vec<String>,
    pub donts: Vec<String>,
}

impl BlockCopyRules {
    pub fn is_empty(&self) -> bool {
        self.dos.is_empty() && self.donts.is_empty()
    }
}

/// Rules layered on top of the site rules for one block type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockGuidelines {
    pub copy_rules: BlockCopyRules,
    pub notes: String,
}

impl BlockGuidelines {
    pub fn has_content(&self) -> bool {
        !self.copy_rules.is_empty() || !self.notes.is_empty()
    }
}

// ── Document ─────────────────────────────────────────────────────

/// The full guidelines aggregate.
///
/// `GuidelinesDocument::default()` is the empty document every consumer
/// falls back to when nothing has been saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidelinesDocument {
    pub version: u32,
    pub brand_context: BrandContext,
    pub voice_tone: VoiceTone,
    pub copy_rules: CopyRules,
    pub vocabulary: Vocabulary,
    pub heuristics: Heuristics,
    pub references: References,
    #[serde(alias = "image_style")]
    pub images: ImageGuidelines,
    pub notes: String,
    /// Keyed by `namespace/name` block identifiers.
    pub blocks: BTreeMap<String, BlockGuidelines>,
}

impl Default for GuidelinesDocument {
    fn default() -> Self {
        Self {
            version: CURRENT_SCHEMA_VERSION,
            brand_context: BrandContext::default(),
            voice_tone: VoiceTone::default(),
            copy_rules: CopyRules::default(),
            vocabulary: Vocabulary::default(),
            heuristics: Heuristics::default(),
            references: References::default(),
            images: ImageGuidelines::default(),
            notes: String::new(),
            blocks: BTreeMap::new(),
        }
    }
}

impl GuidelinesDocument {
    pub fn section_is_empty(&self, section: Section) -> bool {
        match section {
            Section::BrandContext => self.brand_context.is_empty(),
            Section::VoiceTone => self.voice_tone.is_empty(),
            Section::CopyRules => self.copy_rules.is_empty(),
            Section::Vocabulary => self.vocabulary.is_empty(),
            Section::Heuristics => self.heuristics.is_empty(),
            Section::References => self.references.is_empty(),
            Section::Images => self.images.is_empty(),
            Section::Notes => self.notes.is_empty(),
            Section::Blocks => !self.blocks.values().any(BlockGuidelines::has_content),
        }
    }

    /// True when no section carries any guidance.
    pub fn is_blank(&self) -> bool {
        <Section as strum::IntoEnumIterator>::iter().all(|section| self.section_is_empty(section))
    }

    /// Block rules for `block_name`, only when they carry content.
    pub fn block(&self, block_name: &str) -> Option<&BlockGuidelines> {
        self.blocks
            .get(block_name)
            .filter(|block| block.has_content())
    }
}
