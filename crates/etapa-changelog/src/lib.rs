//! Changelog maintenance for Etapa.
//!
//! This crate turns a [`ParsedCommit`](etapa_commit::ParsedCommit) into a
//! changelog line and files it under today's date section:
//! - [`EntryFormatter`]: renders one Markdown list item per commit
//! - [`ChangelogDocument`]: line model plus the [`Insertion`] decision
//! - [`ChangelogWriter`]: reads, updates and rewrites the changelog file

mod document;
mod entry;
mod error;
mod writer;

pub use document::{ChangelogDocument, Insertion, TITLE, section_header};
pub use entry::{EMOJI_TABLE, EntryFormatter, FALLBACK_EMOJI, emoji_for};
pub use error::{ChangelogError, ChangelogResult};
pub use writer::ChangelogWriter;
