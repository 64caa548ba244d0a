use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the guidelines core.
///
/// Absence of data (no document saved yet, no draft, no hook) is never an
/// error: callers get the default document or a neutral result instead. The
/// variants below cover invalid references and caller contract violations.
#[derive(Debug, Error)]
pub enum GuidelinesError {
    // ── Document model ──────────────────────────────────────────────────
    #[error("document: {0}")]
    Document(#[from] DocumentError),

    // ── Document store ──────────────────────────────────────────────────
    #[error("store: {0}")]
    Store(#[from] StoreError),

    // ── Context packet ──────────────────────────────────────────────────
    #[error("packet: {0}")]
    Packet(#[from] PacketError),

    // ── Playground ──────────────────────────────────────────────────────
    #[error("playground: {0}")]
    Playground(#[from] PlaygroundError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Document errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("block name {0:?} must be in namespace/name form")]
    InvalidBlockName(String),

    #[error("invalid import data: {0}")]
    InvalidImport(String),

    #[error("malformed guidelines document: {0}")]
    Malformed(String),
}

// ─── Store errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no draft changes to publish")]
    NoDraft,

    #[error("history entry {id} not found")]
    HistoryEntryNotFound { id: u64 },

    #[error("store lock poisoned: {0}")]
    Lock(String),

    #[error("serialization: {0}")]
    Serialization(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Packet errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PacketError {
    #[error("max_chars {value} outside allowed range [{min}, {max}]")]
    MaxCharsOutOfRange { value: usize, min: usize, max: usize },
}

// ─── Playground errors ───────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("fixture content is required")]
    MissingFixture,
}

// ─── Prompt / Template errors ────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template render failed: {0}")]
    Render(String),

    #[error("template not found: {0}")]
    NotFound(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, GuidelinesError>;
