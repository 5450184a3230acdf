//! Changelog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Changelog-related errors.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// The changelog file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The changelog file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for changelog operations.
pub type ChangelogResult<T> = Result<T, ChangelogError>;
