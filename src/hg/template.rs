//! hg template definitions for stable output parsing
//!
//! These templates ensure consistent, parseable output from hg commands
//! regardless of user configuration.

/// Separator between fields of one log record
pub const FIELD_SEPARATOR: char = '\n';

/// Number of leading single-line fields in a log record (everything after is description)
pub const LOG_HEADER_FIELDS: usize = 5;

/// Templates for hg commands
pub struct Templates;

impl Templates {
    /// Template for `hg log` output
    ///
    /// Fields (one per line):
    /// 1. short id (`rev:node|short`)
    /// 2. full node hash
    /// 3. author user name
    /// 4. author email
    /// 5. date (`unixtime.fraction` followed by the tz offset in seconds)
    /// 6. description (may span several lines)
    ///
    /// Each record ends with a `=newlog=` line. The description is free text,
    /// so the sentinel is the only reliable record boundary.
    pub fn log() -> &'static str {
        concat!(
            "{rev}:{node|short}",
            "\\n",
            "{node}",
            "\\n",
            "{author|user}",
            "\\n",
            "{author|email}",
            "\\n",
            "{date}",
            "\\n",
            "{desc}",
            "\\n",
            "=newlog=",
            "\\n"
        )
    }

    /// Template for a single commit's date in RFC 3339 form
    pub fn commit_date() -> &'static str {
        "{date|rfc3339date}\\n"
    }
}
