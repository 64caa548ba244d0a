use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Draft lifecycle subcommands
#[derive(Subcommand, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DraftCommands {
    /// Save a JSON guidelines document as the draft
    Save {
        /// Path to the JSON document (use - for stdin)
        file: PathBuf,
        /// Merge into the current working copy instead of replacing it
        #[arg(long)]
        merge: bool,
    },
    /// Set or clear the rules for one block type in the draft
    SetBlock {
        /// Qualified block name, e.g. core/heading
        name: String,
        /// Path to the JSON block rules (use - for stdin); omit to clear
        file: Option<PathBuf>,
    },
    /// Promote the draft to active and record a history entry
    Publish,
    /// Drop the draft
    Discard,
}
