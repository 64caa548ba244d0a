use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod subcommands;

pub use subcommands::DraftCommands;

/// `content-guidelines` - site content guidelines for AI-assisted writing.
#[derive(Parser, Debug)]
#[command(name = "content-guidelines")]
#[command(version = "0.1.0")]
#[command(
    about = "Manage content guidelines, build context packets and lint copy.",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a guidelines document
    Show {
        /// draft or active (draft falls back to active)
        #[arg(long, default_value = "active")]
        variant: String,
    },

    /// Show document id, revision and last update time
    Meta,

    /// Build a context packet for a generation task
    Packet {
        /// writing, headline, cta, image or coach (default from config)
        #[arg(short, long)]
        task: Option<String>,

        /// Merge the rules for this block type
        #[arg(short, long)]
        block: Option<String>,

        /// Character budget for the packet text
        #[arg(long)]
        max_chars: Option<usize>,

        #[arg(long, default_value = "active")]
        variant: String,

        /// Passed through to the packet
        #[arg(long)]
        post_id: Option<u64>,

        /// Passed through to the packet
        #[arg(long)]
        locale: Option<String>,

        /// Print only the packet text
        #[arg(long)]
        text: bool,
    },

    /// Build a packet plus rules for every block used in a post
    PostPacket {
        /// Post content with block markers (use - for stdin)
        file: PathBuf,

        #[arg(short, long)]
        task: Option<String>,

        #[arg(long)]
        max_chars: Option<usize>,

        #[arg(long, default_value = "active")]
        variant: String,
    },

    /// List block types and whether they have guidelines
    Blocks {
        /// Only blocks that have guidelines
        #[arg(long)]
        configured_only: bool,

        /// Filter by name or title
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Check content against the guidelines
    Lint {
        /// Content to check (use - for stdin)
        file: PathBuf,

        #[arg(long, default_value = "active")]
        variant: String,
    },

    /// Run a guidelines test against a fixture post
    Playground {
        /// Post content (use - for stdin)
        file: PathBuf,

        /// rewrite_intro, generate_headlines or write_cta
        #[arg(short, long, default_value = "rewrite_intro")]
        task: String,

        /// Fixture title
        #[arg(long, default_value = "")]
        title: String,

        /// Which guidelines to test: draft or active
        #[arg(long, default_value = "draft")]
        source: String,

        /// Also run against the active guidelines
        #[arg(long)]
        compare: bool,

        /// Appended to the generation prompt
        #[arg(long)]
        extra: Option<String>,
    },

    /// Manage the draft
    Draft {
        #[command(subcommand)]
        draft_command: DraftCommands,
    },

    /// List published revisions, newest first
    History,

    /// Copy a history entry into the draft
    Restore {
        /// History entry id
        id: u64,
    },

    /// Export the active guidelines as JSON
    Export {
        /// Stamp the export with this site URL and version metadata
        #[arg(long)]
        site_url: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import guidelines JSON into the draft
    Import {
        /// Exported file or bare document (use - for stdin)
        file: PathBuf,

        /// Merge into the working copy instead of replacing it
        #[arg(long)]
        merge: bool,
    },
}
