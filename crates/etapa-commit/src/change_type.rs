//! Change classification.

use std::fmt;

/// The kind of change a commit introduces.
///
/// The first eleven variants correspond to the Conventional Commits keywords.
/// [`ChangeType::Other`] is the fallback for subjects that do not follow the
/// grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
    Other,
}

impl ChangeType {
    /// The recognized Conventional Commits keywords, in grammar order.
    pub const KEYWORDS: [ChangeType; 11] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Build,
        Self::Ci,
        Self::Chore,
        Self::Revert,
    ];

    /// Returns the lower-case keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Revert => "revert",
            Self::Other => "other",
        }
    }

    /// Looks up a Conventional Commits keyword, ignoring case.
    ///
    /// Returns `None` for anything outside the eleven keywords, including
    /// `other`.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::KEYWORDS
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
