//! Latest-commit reader.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use etapa_commit::CommitRecord;
use tracing::debug;

use crate::{GitError, GitResult};

/// Pretty format requesting id, subject and body as newline-joined fields.
const LOG_FORMAT: &str = "--pretty=format:%H%n%s%n%b";

/// Reads the most recent commit of a repository.
pub trait CommitReader {
    /// Returns the latest commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit cannot be read; nothing should be
    /// written by the caller in that case.
    fn latest_commit(&self) -> GitResult<CommitRecord>;
}

/// Reads commits by running the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Creates a reader running `git` in the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
            workdir: None,
        }
    }

    /// Runs git from the given directory instead of the current one.
    #[must_use]
    pub fn with_workdir(mut self, dir: impl AsRef<Path>) -> Self {
        self.workdir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Uses a different executable in place of `git`.
    #[must_use]
    pub fn with_program(mut self, program: impl AsRef<Path>) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitReader for GitCli {
    fn latest_commit(&self) -> GitResult<CommitRecord> {
        let mut command = Command::new(&self.program);
        command.args(["log", "-1", LOG_FORMAT]);
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        debug!(program = %self.program.display(), workdir = ?self.workdir, "running git log");

        let output = command.output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => GitError::NotInstalled,
            _ => GitError::Io(e),
        })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        parse_log_output(&stdout)
    }
}

/// Splits `git log` output into id, subject and body.
///
/// The output is trimmed, then split into at most three parts on newlines.
/// The body is trimmed and empty when absent.
///
/// # Errors
///
/// Returns [`GitError::Unparseable`] when fewer than two lines are present.
pub fn parse_log_output(stdout: &str) -> GitResult<CommitRecord> {
    let mut parts = stdout.trim().splitn(3, '\n');

    let (Some(id), Some(subject)) = (parts.next(), parts.next()) else {
        return Err(GitError::Unparseable);
    };
    let body = parts.next().map(str::trim).unwrap_or_default();

    Ok(CommitRecord::new(id, subject, body))
}
