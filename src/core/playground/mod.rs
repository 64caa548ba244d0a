// Guideline test runs over a fixture post, optionally comparing draft and
// active guidelines.

pub mod fixture;
pub mod hook;
pub mod orchestrator;
pub mod types;

pub use fixture::extract_excerpt;
pub use hook::{GenerationHook, HookChain};
pub use orchestrator::Playground;
pub use types::*;
