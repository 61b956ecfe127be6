//! Revision marker

use std::fmt;

use super::LogEntry;

/// Identifier of a specific commit: node hash (full or prefix), local
/// revision number, or the `rev:shorthash` form stored by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Does this marker point at the changeset of `entry`?
    ///
    /// - `rev:shorthash` compares against `short_commit_id`
    /// - all digits compares against the revision number
    /// - hex compares as a prefix of the full node
    ///
    /// Bookmarks, tags and branch names are not resolved: an all-hex name
    /// such as `face` is taken as a node prefix.
    pub fn identifies(&self, entry: &LogEntry) -> bool {
        let marker = self.as_str();
        if marker.is_empty() || entry.is_malformed() {
            return false;
        }

        if marker.contains(':') {
            return marker == entry.short_commit_id;
        }

        if marker.bytes().all(|b| b.is_ascii_digit()) {
            return entry.rev() == Some(marker);
        }

        marker.bytes().all(|b| b.is_ascii_hexdigit())
            && entry.commit_id.starts_with(&marker.to_ascii_lowercase())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Revision {
    fn from(marker: &str) -> Self {
        Self::new(marker)
    }
}

impl From<String> for Revision {
    fn from(marker: String) -> Self {
        Self::new(marker)
    }
}
