//! Commit log record data model

/// One parsed commit from the delimited `git log` output.
///
/// All fields are kept as text: the date is an opaque locale-formatted
/// string and the three counters are numeric text, empty when the commit
/// produced no shortstat summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogRecord {
    /// Short commit hash
    pub commit_id: String,

    /// Author name
    pub author: String,

    /// Author date, locale-formatted (never parsed or validated here)
    pub date: String,

    /// Commit subject line; may itself contain quotes or commas
    pub comment: String,

    /// Number of changed files as text, empty if unavailable
    pub changed_files: String,

    /// Number of inserted lines as text, empty if unavailable
    pub lines_added: String,

    /// Number of deleted lines as text, empty if unavailable.
    /// Only ever populated together with the other two counters.
    pub lines_deleted: String,
}

impl LogRecord {
    /// True if the shortstat counters were present for this commit
    pub fn has_stats(&self) -> bool {
        !self.changed_files.is_empty()
    }
}
