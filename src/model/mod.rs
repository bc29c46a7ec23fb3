//! Data models for git-log-exporter
//!
//! I/O-independent data structures representing parsed commit history.

mod log_record;

pub use log_record::LogRecord;
