//! git-specific constants
//!
//! Centralized definitions for the git command name, flags, and the
//! delimiter tokens embedded in the log format string.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
}

/// git command flags
pub mod flags {
    /// Lower bound of the commit time window (inclusive)
    pub const SINCE: &str = "--since";
    /// Upper bound of the commit time window (inclusive)
    pub const UNTIL: &str = "--until";
    /// Format author dates in the local timezone
    pub const DATE_LOCAL: &str = "--date=local";
    /// Specify the pretty-format template
    pub const PRETTY: &str = "--pretty";
    /// Emit a one-line files/insertions/deletions summary per commit
    pub const SHORTSTAT: &str = "--shortstat";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Delimiter tokens embedded in the log format string.
///
/// These are sentinel strings chosen to be vanishingly unlikely in real
/// commit metadata. There is no escaping: a commit message containing one
/// of them verbatim corrupts that segment. Accepted limitation.
pub mod tokens {
    /// Delimits one commit's whole record from the next
    pub const SEGMENT_SEPARATOR: &str = "__GIT__SEPARATOR__";
    /// Delimits ordered fields within one record
    pub const FIELD_DELIMITER: &str = "__GIT__DELIMITER__";
    /// Marker emitted before the commit hash (`%x40` in the format string),
    /// stripped again during sanitization
    pub const COMMIT_ID_MARKER: char = '@';
}

/// Textual noise git attaches to the shortstat numbers.
///
/// Both pluralization variants for each of the three counters. None of
/// these overlap, so removal order does not matter.
pub mod noise {
    pub const STAT_SUFFIXES: [&str; 6] = [
        " files changed",
        " file changed",
        " insertions(+)",
        " insertion(+)",
        " deletions(-)",
        " deletion(-)",
    ];
}
