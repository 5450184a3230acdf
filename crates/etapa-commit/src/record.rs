//! Commit record as read from Git.

/// Length of the abbreviated commit id shown in changelog entries.
pub const SHORT_ID_LEN: usize = 7;

/// The latest commit as read from Git, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// The full commit hash (SHA).
    pub id: String,

    /// The first line of the commit message.
    pub subject: String,

    /// The rest of the commit message, possibly empty.
    pub body: String,
}

impl CommitRecord {
    /// Creates a new commit record.
    #[must_use]
    pub fn new(id: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Returns the short id (first 7 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// Returns the first 7 characters of a commit id.
///
/// Shorter ids are returned unchanged.
#[must_use]
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
