//! Changelog file writer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::{ChangelogDocument, ChangelogError, ChangelogResult, Insertion, section_header};

/// Files changelog entries into a Markdown file under dated sections.
#[derive(Debug, Clone)]
pub struct ChangelogWriter {
    path: PathBuf,
}

impl ChangelogWriter {
    /// Creates a writer for the changelog at `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the changelog path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current document; a missing file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read(&self) -> ChangelogResult<ChangelogDocument> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(ChangelogDocument::parse(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "changelog does not exist yet");
                Ok(ChangelogDocument::new())
            }
            Err(source) => Err(ChangelogError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Returns the document as it would look after inserting `entry` for
    /// `date`, without touching the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read.
    pub fn preview(
        &self,
        entry: &str,
        date: NaiveDate,
    ) -> ChangelogResult<(ChangelogDocument, Insertion)> {
        let mut document = self.read()?;
        let insertion = document.insert_entry(&section_header(date), entry);
        debug!(?insertion, "planned changelog insertion");
        Ok((document, insertion))
    }

    /// Inserts `entry` under the section for `date` and rewrites the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn update(&self, entry: &str, date: NaiveDate) -> ChangelogResult<Insertion> {
        let (document, insertion) = self.preview(entry, date)?;

        fs::write(&self.path, document.render()).map_err(|source| ChangelogError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), ?insertion, "changelog updated");
        Ok(insertion)
    }
}
