mod builder;
mod engine;

pub use builder::{GenerationPrompt, build_generation_prompt, default_engine, ensure_defaults};
pub use engine::TeraEngine;
