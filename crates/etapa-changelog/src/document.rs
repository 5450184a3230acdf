//! Line model of a Markdown changelog and the insertion decision.

use chrono::NaiveDate;

/// Title line of a freshly created changelog.
pub const TITLE: &str = "# Changelog";

/// Prefix shared by all dated section headers.
const SECTION_PREFIX: &str = "## [";

/// Returns the section header for a date, e.g. `## [2024-01-15]`.
#[must_use]
pub fn section_header(date: NaiveDate) -> String {
    format!("{SECTION_PREFIX}{}]", date.format("%Y-%m-%d"))
}

/// Where a new entry goes, decided from the current document.
///
/// The variants are checked in declaration order and the first one that
/// applies wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The document is empty: write title, today's header and the entry.
    Fresh,

    /// Today's header exists: insert the entry at `at`, which is two lines
    /// below the header, clamped to the document length.
    UnderToday { at: usize },

    /// Another dated section exists: insert a new block for today right
    /// before the first one, at line `at`.
    BeforeSection { at: usize },

    /// No dated section at all: append a block for today at the end.
    Append,
}

/// A changelog as an ordered list of lines.
///
/// Line endings are normalized to `\n` on parse. Each line keeps its
/// trailing `\n`, so rendering is a plain concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    lines: Vec<String>,
}

impl ChangelogDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits text into lines, converting `\r\n` and lone `\r` to `\n`.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let content = content.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            lines: content.split_inclusive('\n').map(String::from).collect(),
        }
    }

    /// Returns the lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns true if the document has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines back into text.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Index of the first line equal to `header` once trimmed.
    fn find_header(&self, header: &str) -> Option<usize> {
        let header = header.trim();
        self.lines.iter().position(|line| line.trim() == header)
    }

    /// Index of the first dated section header below the title line.
    fn find_first_section(&self) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| line.starts_with(SECTION_PREFIX))
            .map(|(i, _)| i)
    }

    /// Decides where an entry for `header` goes.
    #[must_use]
    pub fn plan(&self, header: &str) -> Insertion {
        if self.is_empty() {
            return Insertion::Fresh;
        }
        if let Some(index) = self.find_header(header) {
            return Insertion::UnderToday {
                at: (index + 2).min(self.lines.len()),
            };
        }
        if let Some(index) = self.find_first_section() {
            return Insertion::BeforeSection { at: index };
        }
        Insertion::Append
    }

    /// Performs a planned insertion of `entry` under `header`.
    ///
    /// `entry` is expected to end with a newline.
    pub fn apply(&mut self, insertion: Insertion, header: &str, entry: &str) {
        let header_line = format!("{header}\n");
        match insertion {
            Insertion::Fresh => {
                self.lines = vec![
                    format!("{TITLE}\n"),
                    "\n".to_string(),
                    header_line,
                    "\n".to_string(),
                    entry.to_string(),
                ];
            }
            Insertion::UnderToday { at } => {
                self.lines.insert(at, entry.to_string());
            }
            Insertion::BeforeSection { at } => {
                let block = [
                    "\n".to_string(),
                    header_line,
                    "\n".to_string(),
                    entry.to_string(),
                    "\n".to_string(),
                ];
                self.lines.splice(at..at, block);
            }
            Insertion::Append => {
                self.lines
                    .extend(["\n".to_string(), header_line, "\n".to_string(), entry.to_string()]);
            }
        }
    }

    /// Plans and applies an insertion, returning the case taken.
    pub fn insert_entry(&mut self, header: &str, entry: &str) -> Insertion {
        let insertion = self.plan(header);
        self.apply(insertion, header, entry);
        insertion
    }
}
