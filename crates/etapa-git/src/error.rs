//! Git error types.

use thiserror::Error;

/// Reasons the latest commit could not be read.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable is missing from `PATH`.
    #[error("git is not installed or not in PATH")]
    NotInstalled,

    /// git ran but exited with a failure status.
    #[error("git exited with {}: {stderr}", describe_exit(.code))]
    CommandFailed {
        /// Exit code, absent when terminated by a signal.
        code: Option<i32>,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// git output did not contain an id and a subject.
    #[error("could not parse commit from git output")]
    Unparseable,

    /// git output was not valid UTF-8.
    #[error("git output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Any other failure while running git.
    #[error("error accessing git: {0}")]
    Io(#[from] std::io::Error),
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
