//! Plain-text rendering of log entries for the terminal

use crate::model::LogEntry;

/// One line per entry: `short id  date  author <email>  summary`
pub fn render_entries(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_entry(entry: &LogEntry) -> String {
    if entry.is_malformed() {
        return format!("{}  {}  {}", entry.commit_id, entry.date, entry.message);
    }

    let author = if entry.author_email.is_empty() {
        entry.author_name.clone()
    } else {
        format!("{} <{}>", entry.author_name, entry.author_email)
    };

    format!(
        "{}  {}  {}  {}",
        entry.short_commit_id,
        entry.date,
        author,
        entry.summary()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_render_entries() {
        let entries = vec![
            LogEntry {
                short_commit_id: "41:1a2b3c4d5e6f".to_string(),
                commit_id: "1a2b3c4d5e6f77889900aabbccddeeff00112233".to_string(),
                author_name: "alice".to_string(),
                author_email: "alice@example.com".to_string(),
                date: "2024-01-29 07:30:00".to_string(),
                message: "Speed up the JIT warmup\n\nLonger explanation.".to_string(),
            },
            LogEntry::malformed(),
            LogEntry {
                short_commit_id: "0:000000000001".to_string(),
                commit_id: "0000000000010000000000000000000000000000".to_string(),
                author_name: "carol".to_string(),
                author_email: String::new(),
                date: "1970-01-01 00:00:00".to_string(),
                message: "Initial import".to_string(),
            },
        ];

        assert_snapshot!(render_entries(&entries), @r"
        41:1a2b3c4d5e6f  2024-01-29 07:30:00  alice <alice@example.com>  Speed up the JIT warmup
        -  -  error parsing log
        0:000000000001  1970-01-01 00:00:00  carol  Initial import
        ");
    }

    #[test]
    fn test_render_no_entries() {
        assert_eq!(render_entries(&[]), "");
    }
}
