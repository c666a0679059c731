use thiserror::Error;

/// Main error type for docdex operations
#[derive(Error, Debug)]
pub enum DocdexError {
    #[error("Cannot build an index from an empty corpus")]
    EmptyCorpus,

    #[error("Invalid result limit: {requested} (must be at least 1)")]
    InvalidLimit { requested: usize },

    #[error("Corrupt index: {0}")]
    CorruptIndex(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for docdex operations
pub type Result<T> = std::result::Result<T, DocdexError>;

impl DocdexError {
    /// Check if this error was caused by invalid caller input, as opposed to
    /// corrupted persisted state or an environment failure. None of these are
    /// retriable: they all indicate something the caller must fix.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            DocdexError::EmptyCorpus | DocdexError::InvalidLimit { .. }
        )
    }
}
