//! Log output parser (hg log with the sentinel template)

use std::fmt::Display;

use chrono::{Local, TimeZone};

use super::super::constants::special::LOG_SENTINEL;
use super::super::template::{FIELD_SEPARATOR, LOG_HEADER_FIELDS};
use crate::model::LogEntry;

use super::Parser;

impl Parser {
    /// Parse `hg log` output into a list of LogEntries, dates in local time
    pub fn parse_log(output: &str) -> Vec<LogEntry> {
        Self::parse_log_in(output, &Local)
    }

    /// Parse `hg log` output, rendering dates in `tz`
    ///
    /// Records are terminated by a `=newlog=` line. A record with fewer than
    /// six lines, or with an unreadable date, becomes the placeholder entry.
    /// Empty output is not a record: it yields no entries rather than a
    /// single placeholder.
    pub fn parse_log_in<Tz>(output: &str, tz: &Tz) -> Vec<LogEntry>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let output = output.trim_end_matches(FIELD_SEPARATOR);
        if output.is_empty() {
            return Vec::new();
        }

        let terminator = format!("{LOG_SENTINEL}{FIELD_SEPARATOR}");
        output
            .split(terminator.as_str())
            .map(|record| {
                let mut lines: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
                // Drops the empty tail after the description newline, or the
                // bare sentinel on the last record
                lines.pop();
                Self::parse_log_record(&lines, tz)
            })
            .collect()
    }

    /// Assign a record's lines positionally
    ///
    /// Lines: short id, node, user, email, date, then the description.
    pub(super) fn parse_log_record<Tz>(lines: &[&str], tz: &Tz) -> LogEntry
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if lines.len() <= LOG_HEADER_FIELDS {
            return LogEntry::malformed();
        }

        let Some(date) = Self::parse_hg_date(lines[4], tz) else {
            tracing::warn!(date = lines[4], node = lines[1], "unreadable date in hg log record");
            return LogEntry::malformed();
        };

        LogEntry {
            short_commit_id: lines[0].to_string(),
            commit_id: lines[1].to_string(),
            author_name: lines[2].to_string(),
            author_email: lines[3].to_string(),
            date,
            message: lines[LOG_HEADER_FIELDS..].join("\n"),
        }
    }
}
