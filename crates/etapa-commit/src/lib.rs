//! Commit types for Etapa.
//!
//! This crate provides the commit types shared by the changelog pipeline:
//! - [`CommitRecord`]: The latest commit as read from Git
//! - [`ChangeType`]: The closed set of change classifications
//! - [`ParsedCommit`]: A commit after classification by the parser

mod change_type;
mod parsed;
mod record;

pub use change_type::ChangeType;
pub use parsed::{ParsedCommit, ParsedCommitBuilder};
pub use record::CommitRecord;
