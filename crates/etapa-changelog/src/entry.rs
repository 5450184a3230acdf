//! Changelog entry formatter.

use std::fmt::Write;

use etapa_commit::{ChangeType, ParsedCommit};

/// Emoji shown in front of each entry, by change type.
pub const EMOJI_TABLE: &[(ChangeType, &str)] = &[
    (ChangeType::Feat, "✨"),
    (ChangeType::Fix, "🐛"),
    (ChangeType::Docs, "📚"),
    (ChangeType::Style, "💄"),
    (ChangeType::Refactor, "♻️"),
    (ChangeType::Perf, "⚡"),
    (ChangeType::Test, "✅"),
    (ChangeType::Build, "📦"),
    (ChangeType::Ci, "👷"),
    (ChangeType::Chore, "🔧"),
    (ChangeType::Revert, "⏪"),
    (ChangeType::Other, "📝"),
];

/// Emoji used for a type missing from [`EMOJI_TABLE`].
pub const FALLBACK_EMOJI: &str = "❓";

/// Returns the emoji for a change type.
#[must_use]
pub fn emoji_for(change_type: ChangeType) -> &'static str {
    EMOJI_TABLE
        .iter()
        .find(|(t, _)| *t == change_type)
        .map_or(FALLBACK_EMOJI, |&(_, emoji)| emoji)
}

/// Renders parsed commits as changelog list items.
///
/// ```text
/// - ✨ **(auth)** add OAuth support (`abc1234`)
/// - 🐛 handle null [`def5678`](https://github.com/user/repo/commit/def5678...)
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntryFormatter {
    repository_url: Option<String>,
}

impl EntryFormatter {
    /// Creates a formatter producing plain commit references.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Links commit references to `{url}/commit/{id}`.
    ///
    /// Trailing slashes are dropped from the URL.
    #[must_use]
    pub fn with_repository_url(mut self, url: impl AsRef<str>) -> Self {
        self.repository_url = Some(url.as_ref().trim_end_matches('/').to_string());
        self
    }

    /// Returns the repository URL used for links.
    #[must_use]
    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    /// Formats a commit as one newline-terminated changelog line.
    #[must_use]
    pub fn format(&self, commit: &ParsedCommit) -> String {
        let mut line = format!("- {} ", emoji_for(commit.change_type));

        if let Some(scope) = &commit.scope {
            _ = write!(line, "**({scope})** ");
        }
        line.push_str(&commit.description);

        let short = commit.short_id();
        match &self.repository_url {
            Some(url) => {
                _ = writeln!(line, " [`{short}`]({url}/commit/{})", commit.id);
            }
            None => {
                _ = writeln!(line, " (`{short}`)");
            }
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "abc1234def5678abc1234def5678abc1234def56";

    fn commit(change_type: ChangeType, scope: Option<&str>, description: &str) -> ParsedCommit {
        ParsedCommit::builder(ID, change_type)
            .maybe_scope(scope.map(String::from))
            .description(description)
            .build()
    }

    #[test]
    fn test_plain_entry() {
        let formatter = EntryFormatter::new();
        let line = formatter.format(&commit(ChangeType::Feat, None, "add login"));
        assert_eq!(line, "- ✨ add login (`abc1234`)\n");
    }

    #[test]
    fn test_scoped_entry() {
        let formatter = EntryFormatter::new();
        let line = formatter.format(&commit(ChangeType::Fix, Some("api"), "handle null"));
        assert_eq!(line, "- 🐛 **(api)** handle null (`abc1234`)\n");
    }

    #[test]
    fn test_linked_entry() {
        let formatter = EntryFormatter::new().with_repository_url("https://github.com/user/repo");
        let line = formatter.format(&commit(ChangeType::Docs, None, "explain setup"));
        assert_eq!(
            line,
            format!("- 📚 explain setup [`abc1234`](https://github.com/user/repo/commit/{ID})\n")
        );
    }

    #[test]
    fn test_repository_url_trailing_slash() {
        let formatter = EntryFormatter::new().with_repository_url("https://gitlab.com/g/p//");
        assert_eq!(formatter.repository_url(), Some("https://gitlab.com/g/p"));
    }

    #[test]
    fn test_other_entry() {
        let formatter = EntryFormatter::new();
        let line = formatter.format(&commit(ChangeType::Other, None, "cleanup temp files"));
        assert_eq!(line, "- 📝 cleanup temp files (`abc1234`)\n");
    }

    #[test]
    fn test_short_id_shorter_than_7() {
        let formatter = EntryFormatter::new();
        let parsed = ParsedCommit::builder("abc", ChangeType::Chore)
            .description("bump deps")
            .build();
        assert_eq!(formatter.format(&parsed), "- 🔧 bump deps (`abc`)\n");
    }

    #[test]
    fn test_every_type_has_its_emoji() {
        let formatter = EntryFormatter::new();
        for &(change_type, emoji) in EMOJI_TABLE {
            let line = formatter.format(&commit(change_type, None, "x"));
            assert!(line.starts_with(&format!("- {emoji} ")), "{line}");
            assert!(!line.contains(FALLBACK_EMOJI));
        }
    }

    #[test]
    fn test_table_covers_all_types() {
        assert_eq!(EMOJI_TABLE.len(), 12);
        for change_type in ChangeType::KEYWORDS {
            assert_ne!(emoji_for(change_type), FALLBACK_EMOJI);
        }
        assert_eq!(emoji_for(ChangeType::Other), "📝");
    }
}
