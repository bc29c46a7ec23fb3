//! git command execution layer
//!
//! This module handles executing `git log` and decoding its
//! delimiter-separated output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod sanitizer;
mod template;

pub use executor::GitExecutor;
pub use parser::Parser;
pub use sanitizer::sanitize;
pub use template::Templates;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when executing git commands.
///
/// All of these are fatal: the export run aborts on the first one.
/// Malformed log output is never an error — the parser drops bad
/// segments silently.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a repository directory: {0}")]
    RepositoryNotFound(PathBuf),

    #[error("git command failed (exit code {exit_code})")]
    CommandFailed { exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}
