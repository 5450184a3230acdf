//! Parsed commit type after classification.

use crate::ChangeType;
use crate::record::short_id;

/// A commit after classification by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    /// The full commit hash (SHA).
    pub id: String,

    /// The change classification.
    pub change_type: ChangeType,

    /// The optional scope.
    pub scope: Option<String>,

    /// The description (without type and scope prefix).
    pub description: String,

    /// The commit body, possibly empty.
    pub body: String,
}

impl ParsedCommit {
    /// Creates a new parsed commit builder.
    #[must_use]
    pub fn builder(id: impl Into<String>, change_type: ChangeType) -> ParsedCommitBuilder {
        ParsedCommitBuilder::new(id, change_type)
    }

    /// Returns the short id (first 7 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// Builder for [`ParsedCommit`].
#[derive(Debug)]
pub struct ParsedCommitBuilder {
    id: String,
    change_type: ChangeType,
    scope: Option<String>,
    description: String,
    body: String,
}

impl ParsedCommitBuilder {
    fn new(id: impl Into<String>, change_type: ChangeType) -> Self {
        Self {
            id: id.into(),
            change_type,
            scope: None,
            description: String::new(),
            body: String::new(),
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the scope from an optional value.
    #[must_use]
    pub fn maybe_scope(mut self, scope: Option<String>) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the [`ParsedCommit`].
    #[must_use]
    pub fn build(self) -> ParsedCommit {
        ParsedCommit {
            id: self.id,
            change_type: self.change_type,
            scope: self.scope,
            description: self.description,
            body: self.body,
        }
    }
}
