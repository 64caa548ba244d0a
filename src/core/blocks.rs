//! Block type registry and the block listing shown next to the guidelines.

use serde::{Deserialize, Serialize};

use crate::core::guidelines::GuidelinesDocument;

/// Prefix of deprecated widget blocks hidden from listings.
const LEGACY_BLOCK_PREFIX: &str = "core/legacy-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockType {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl BlockType {
    pub fn new(name: &str, title: &str, description: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        }
    }
}

/// Read-only view of the block types a site can use.
pub trait BlockRegistry: Send + Sync {
    fn get(&self, name: &str) -> Option<BlockType>;
    fn all(&self) -> Vec<BlockType>;
}

/// Fixed registry. The default instance carries the common core blocks.
#[derive(Debug, Clone)]
pub struct StaticBlockRegistry {
    blocks: Vec<BlockType>,
}

impl StaticBlockRegistry {
    pub fn new(blocks: Vec<BlockType>) -> Self {
        Self { blocks }
    }
}

impl Default for StaticBlockRegistry {
    fn default() -> Self {
        Self::new(vec![
            BlockType::new("core/paragraph", "Paragraph", "Start with the basic building block of all narrative.", "text"),
            BlockType::new("core/heading", "Heading", "Introduce new sections and organize content.", "text"),
            BlockType::new("core/button", "Button", "Prompt visitors to take action with a button-style link.", "design"),
            BlockType::new("core/image", "Image", "Insert an image to make a visual statement.", "media"),
            BlockType::new("core/list", "List", "An organized collection of items displayed in a specific order.", "text"),
            BlockType::new("core/quote", "Quote", "Give quoted text visual emphasis.", "text"),
        ])
    }
}

impl BlockRegistry for StaticBlockRegistry {
    fn get(&self, name: &str) -> Option<BlockType> {
        self.blocks.iter().find(|block| block.name == name).cloned()
    }

    fn all(&self) -> Vec<BlockType> {
        self.blocks.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFilter {
    /// Only blocks that have guidelines with content.
    #[serde(default)]
    pub configured_only: bool,
    /// Case-insensitive substring of the name or title.
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockListing {
    #[serde(flatten)]
    pub block: BlockType,
    pub has_guidelines: bool,
}

/// Registered blocks annotated with whether `document` has rules for them,
/// sorted by title.
pub fn list_blocks(
    registry: &dyn BlockRegistry,
    document: &GuidelinesDocument,
    filter: &BlockFilter,
) -> Vec<BlockListing> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    let mut listings: Vec<BlockListing> = registry
        .all()
        .into_iter()
        .filter(|block| !block.name.starts_with(LEGACY_BLOCK_PREFIX))
        .map(|block| BlockListing {
            has_guidelines: document.block(&block.name).is_some(),
            block,
        })
        .filter(|listing| !filter.configured_only || listing.has_guidelines)
        .filter(|listing| {
            search.as_deref().is_none_or(|term| {
                listing.block.name.to_lowercase().contains(term)
                    || listing.block.title.to_lowercase().contains(term)
            })
        })
        .collect();

    listings.sort_by_key(|listing| listing.block.title.to_lowercase());
    listings
}
