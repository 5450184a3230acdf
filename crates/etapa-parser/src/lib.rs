//! Conventional Commits parser.
//!
//! Subjects may start with one emoji glyph, which is ignored:
//!
//! ```text
//! 🐛 fix(api): handle null response
//! feat: add login
//! ```
//!
//! Subjects that do not follow the grammar are classified as
//! [`ChangeType::Other`], so parsing never fails.

use std::sync::LazyLock;

use etapa_commit::{ChangeType, CommitRecord, ParsedCommit};
use regex::Regex;
use tracing::debug;

static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let keywords = ChangeType::KEYWORDS
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"^(?:[\x{{1F300}}-\x{{1FAFF}}\x{{2600}}-\x{{27FF}}\x{{231A}}-\x{{23AB}}]\s*)?(?P<type>(?i-u:{keywords}))(?:\((?P<scope>[^)]+)\))?:\s*(?P<desc>.+)$"
    ))
    .expect("invalid regex")
});

/// The outcome of classifying a subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The change type, [`ChangeType::Other`] when the grammar did not match.
    pub change_type: ChangeType,

    /// The scope, if one was given.
    pub scope: Option<String>,

    /// The trimmed description.
    pub description: String,
}

/// Conventional Commits parser.
pub struct ConventionalParser;

impl ConventionalParser {
    /// Creates a new conventional parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classifies a subject line.
    #[must_use]
    pub fn classify(&self, subject: &str) -> Classification {
        let matched = CONVENTIONAL_RE.captures(subject).and_then(|captures| {
            let change_type = ChangeType::from_keyword(captures.name("type")?.as_str())?;
            Some(Classification {
                change_type,
                scope: captures.name("scope").map(|m| m.as_str().to_string()),
                description: captures.name("desc")?.as_str().trim().to_string(),
            })
        });

        matched.unwrap_or_else(|| {
            debug!(subject, "subject is not a conventional commit");
            Classification {
                change_type: ChangeType::Other,
                scope: None,
                description: subject.trim().to_string(),
            }
        })
    }

    /// Parses a commit record.
    #[must_use]
    pub fn parse(&self, record: &CommitRecord) -> ParsedCommit {
        let Classification {
            change_type,
            scope,
            description,
        } = self.classify(&record.subject);

        ParsedCommit::builder(&record.id, change_type)
            .maybe_scope(scope)
            .description(description)
            .body(&record.body)
            .build()
    }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        Self::new()
    }
}
