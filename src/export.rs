//! Export orchestration
//!
//! Walks the configured repositories one at a time: resolve the checkout
//! directory, run `git log`, sanitize and parse the output, write the
//! report. Any git-side failure aborts the whole run; a report write
//! failure only costs that repository's report.

use std::path::PathBuf;

use crate::config::ExportConfig;
use crate::git::{GitError, GitExecutor, Parser, sanitize};
use crate::model::LogRecord;
use crate::report;

/// Sequential exporter over a fixed repository list
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create an exporter for the given configuration
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Process every configured repository in order.
    ///
    /// Returns the first [`GitError`] encountered; remaining repositories
    /// are not processed after a fatal error. Report write failures are
    /// logged per repository and do not stop the run.
    pub fn run(&self) -> Result<(), GitError> {
        let begin = self.config.begin_date.to_string();
        let end = self.config.end_date.to_string();

        for repo in &self.config.repos {
            let records = self.collect(repo, &begin, &end)?;

            let file_name = report::report_file_name(repo, &begin, &end);
            let path = self.config.out_base.join(file_name);
            match report::write_report(&path, &records) {
                Ok(()) => log::info!(
                    "Exported {} commits for {} to {}",
                    records.len(),
                    repo,
                    path.display()
                ),
                Err(e) => log::warn!("Failed to export report. Repo: {repo}, error: {e}"),
            }
        }

        Ok(())
    }

    /// Collect the ordered records for one repository.
    fn collect(&self, repo: &str, begin: &str, end: &str) -> Result<Vec<LogRecord>, GitError> {
        let dir = self.resolve_repo_dir(repo)?;
        let executor = GitExecutor::with_repo_path(dir);
        let raw = executor.log_raw(begin, end)?;
        Ok(Parser::parse_log(&sanitize(&raw)))
    }

    /// Resolve a repository name to its checkout directory.
    fn resolve_repo_dir(&self, repo: &str) -> Result<PathBuf, GitError> {
        let dir = self.config.repo_base.join(repo).canonicalize()?;
        if !dir.is_dir() {
            return Err(GitError::RepositoryNotFound(dir));
        }
        Ok(dir)
    }
}
