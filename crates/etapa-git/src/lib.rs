//! Git access for Etapa.
//!
//! This crate reads the most recent commit of a repository:
//! - [`CommitReader`]: the one-operation seam used by the changelog command
//! - [`GitCli`]: the production reader, backed by the `git` executable

mod error;
mod reader;

pub use error::{GitError, GitResult};
pub use reader::{CommitReader, GitCli, parse_log_output};
