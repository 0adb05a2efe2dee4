use std::io;

/// Custom error type for dictionary construction and loading
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Capacity must be at least 1; every hash index is taken modulo capacity.
    #[error("dictionary capacity must be positive (got 0)")]
    InvalidCapacity,
    /// The word source could not be read (or failed mid-read). Words inserted
    /// before the failure stay in the table; callers must treat the
    /// dictionary as possibly incomplete.
    #[error("failed to read word source: {0}")]
    SourceRead(#[from] io::Error),
}
