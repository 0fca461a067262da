//! Error types for chaff.

/// Errors that can occur during packing and record serialization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid token budget (must be > 0).
    #[error("invalid token budget: {0} (must be > 0)")]
    InvalidBudget(usize),

    /// Token counting failed. Budget accounting depends on exact counts, so
    /// this is never swallowed.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Chunk record serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing JSONL output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for chaff operations.
pub type Result<T> = std::result::Result<T, Error>;
