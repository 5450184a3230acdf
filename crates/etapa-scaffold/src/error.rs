//! Scaffolding error types.

use std::path::PathBuf;

use thiserror::Error;

/// Scaffolding errors.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project directory is already present.
    #[error("directory '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// A directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
