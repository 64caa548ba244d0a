// Task-scoped context packets for AI generation.

pub mod blocks;
pub mod builder;
pub mod render;
pub mod select;
pub mod task;
pub mod types;

pub use blocks::{
    BlockGuidelinesPacket, NamedBlockRules, PostPacket, build_block_guidelines, build_post_packet,
    extract_block_names,
};
pub use builder::{build_packet, build_packet_from_store, build_packet_with_meta};
pub use task::Task;
pub use types::*;
