//! Log output parser (git log)
//!
//! Decodes the sanitized, delimiter-separated log stream into
//! [`LogRecord`]s. This is the only place that understands the sentinel
//! token protocol; everything upstream and downstream treats the text as
//! opaque.

use super::constants::tokens::{FIELD_DELIMITER, SEGMENT_SEPARATOR};
use crate::model::LogRecord;

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Parse sanitized `git log` output into an ordered list of records.
    ///
    /// Splits on the segment separator, then each segment on the field
    /// delimiter. Segments yielding fewer than four properties (including
    /// the empty artifact before the first separator) are dropped
    /// silently; this lenient-drop policy is part of the contract, not an
    /// error path. Output order is segment order, which is the log's
    /// reverse-chronological commit order.
    pub fn parse_log(sanitized: &str) -> Vec<LogRecord> {
        sanitized
            .split(SEGMENT_SEPARATOR)
            .filter_map(Self::parse_segment)
            .collect()
    }

    /// Parse one commit segment, or None if it is malformed.
    fn parse_segment(segment: &str) -> Option<LogRecord> {
        let properties: Vec<&str> = segment.split(FIELD_DELIMITER).collect();
        if properties.len() < 4 {
            return None;
        }

        let mut record = LogRecord {
            commit_id: properties[0].to_string(),
            author: properties[1].to_string(),
            date: properties[2].to_string(),
            comment: properties[3].to_string(),
            ..Default::default()
        };

        if let Some(stats) = properties.get(4)
            && !stats.is_empty()
        {
            Self::parse_stats(stats, &mut record);
        }

        Some(record)
    }

    /// Populate the stats triple from the optional trailing property.
    ///
    /// The property still carries quote artifacts from the format string
    /// (`" ` before the shortstat numbers, a bare `"` closing the
    /// subject). After stripping those, the sanitized stats reduce to
    /// comma-space separated numbers. Commits that touched files but
    /// produced no shortstat keep all three fields empty; a lone value is
    /// ignored rather than reported.
    fn parse_stats(block: &str, record: &mut LogRecord) {
        let cleaned = block.replace("\" ", "").replace('"', "");
        let changes: Vec<&str> = cleaned.split(", ").collect();

        if changes.len() > 1 {
            record.changed_files = changes[0].to_string();
            record.lines_added = changes[1].to_string();
        }
        if changes.len() > 2 {
            record.lines_deleted = changes[2].to_string();
        }
    }
}
