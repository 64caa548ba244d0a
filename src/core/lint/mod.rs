// Content lint against a guidelines document.

pub mod activation;
pub mod analysis;
pub mod checker;
pub mod rules;
pub mod types;

pub use activation::infer_activated_checks;
pub use checker::{LintChecker, check};
pub use rules::LintRule;
pub use types::*;
