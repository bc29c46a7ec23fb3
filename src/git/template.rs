//! git pretty-format definitions for stable output parsing
//!
//! The format string makes `git log` itself emit pre-delimited output, so
//! the parser only ever splits on the sentinel tokens.

/// Pretty-format templates for git commands
pub struct Templates;

impl Templates {
    /// Format string for `git log --pretty`
    ///
    /// Fields (separated by the field delimiter token):
    /// 1. short commit hash (`%h`), prefixed with an `@` marker (`%x40`)
    /// 2. author name (`%an`)
    /// 3. author date (`%ad`, local timezone via `--date=local`)
    /// 4. subject (`%s`), wrapped in quotes (`%x22`)
    ///
    /// The record opens with the segment separator and closes with a
    /// trailing field delimiter so the `--shortstat` line that git appends
    /// on its own line becomes the record's optional fifth field once
    /// newlines are sanitized away.
    pub fn log() -> &'static str {
        concat!(
            "__GIT__SEPARATOR__",
            "%x40%h",
            "__GIT__DELIMITER__",
            "%an",
            "__GIT__DELIMITER__",
            "%ad",
            "__GIT__DELIMITER__",
            "%x22%s%x22",
            "__GIT__DELIMITER__",
        )
    }
}
