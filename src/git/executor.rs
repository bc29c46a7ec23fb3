//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::GitError;
use super::constants::{self, commands, flags};
use super::template::Templates;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments.
    ///
    /// stderr is discarded; only stdout is captured. The exit status is
    /// checked and a nonzero exit maps to [`GitError::CommandFailed`].
    pub fn run<I, S>(&self, args: I) -> Result<String, GitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        // Run inside the repository if a path was given
        if let Some(ref path) = self.repo_path {
            cmd.current_dir(path);
        }

        cmd.args(args);
        cmd.stderr(Stdio::null());

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            return Err(GitError::CommandFailed { exit_code });
        }

        // git can pad the end of the stream with NUL bytes on some
        // platforms; strip them along with trailing whitespace.
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok(stdout.trim().trim_end_matches('\0').to_string())
    }

    /// Run `git log` over an inclusive date window with the delimited
    /// pretty-format and per-commit shortstat summaries.
    pub fn log_raw(&self, since: &str, until: &str) -> Result<String, GitError> {
        self.run(Self::log_args(since, until))
    }

    /// Build the argument list for [`log_raw`](Self::log_raw).
    ///
    /// The format template is wrapped in literal double quotes. git emits
    /// them verbatim around every commit line, and the parser later
    /// strips them as the quote artifacts framing the shortstat numbers.
    fn log_args(since: &str, until: &str) -> Vec<String> {
        vec![
            commands::LOG.to_string(),
            format!("{}={}", flags::SINCE, since),
            format!("{}={}", flags::UNTIL, until),
            flags::DATE_LOCAL.to_string(),
            format!("{}=\"{}\"", flags::PRETTY, Templates::log()),
            flags::SHORTSTAT.to_string(),
        ]
    }
}
