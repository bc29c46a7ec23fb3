//! Raw log output sanitization
//!
//! `git log --shortstat` puts each commit's stats summary on its own line
//! and decorates the numbers with English suffixes. Sanitization flattens
//! the output into one line per run and strips that noise, so segmentation
//! only ever deals with the delimiter tokens and bare numbers.

use super::constants::{noise, tokens};

/// Strip known noise from raw `git log` output.
///
/// Removes, as literal substrings:
/// - newline characters (joining each commit's metadata line with its
///   optional shortstat line)
/// - the commit-id marker character
/// - the shortstat suffix phrases (both pluralization variants each)
///
/// Anything that does not match passes through unchanged. No validation
/// is performed.
pub fn sanitize(raw: &str) -> String {
    let mut out = raw.replace('\n', "");
    out = out.replace(tokens::COMMIT_ID_MARKER, "");
    for suffix in noise::STAT_SUFFIXES {
        out = out.replace(suffix, "");
    }
    out
}
