//! Commit log entry data model

use serde::Serialize;

use crate::hg::constants::placeholder;

/// One changeset from `hg log`, as handed to the dashboard
///
/// Serialized field names follow the dashboard's changeset payload
/// (`commitid`, `author`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LogEntry {
    /// `rev:shorthash`, e.g. `42:1a2b3c4d5e6f`
    pub short_commit_id: String,

    /// Full 40-char node hash
    #[serde(rename = "commitid")]
    pub commit_id: String,

    #[serde(rename = "author")]
    pub author_name: String,

    pub author_email: String,

    /// `YYYY-MM-DD HH:MM:SS`, or `-` for a malformed record
    pub date: String,

    /// Full description, newlines preserved
    pub message: String,
}

impl LogEntry {
    /// Placeholder produced for a record with too few fields
    pub fn malformed() -> Self {
        Self {
            date: placeholder::DATE.to_string(),
            commit_id: placeholder::COMMIT_ID.to_string(),
            message: placeholder::MESSAGE.to_string(),
            ..Default::default()
        }
    }

    /// Is this the malformed-record placeholder?
    pub fn is_malformed(&self) -> bool {
        *self == Self::malformed()
    }

    /// Local revision number (the part of `short_commit_id` before `:`)
    pub fn rev(&self) -> Option<&str> {
        self.short_commit_id
            .split_once(':')
            .map(|(rev, _)| rev)
            .filter(|rev| !rev.is_empty())
    }

    /// Short node hash (the part of `short_commit_id` after `:`)
    pub fn short_hash(&self) -> Option<&str> {
        self.short_commit_id
            .split_once(':')
            .map(|(_, hash)| hash)
            .filter(|hash| !hash.is_empty())
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
