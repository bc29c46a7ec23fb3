//! CLI surface and export configuration
//!
//! The parsing core never touches the environment; everything it needs
//! (repository list, date window, base paths) is collected here and
//! injected into the exporter.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "git-log-exporter", version, about)]
pub struct Cli {
    /// Repository directory name under the repository base (repeatable)
    #[arg(long = "repo", value_name = "NAME", required = true)]
    pub repos: Vec<String>,

    /// Start of the commit window (inclusive), e.g. 2023-02-01
    #[arg(long, value_name = "DATE")]
    pub since: NaiveDate,

    /// End of the commit window (inclusive), e.g. 2023-02-28
    #[arg(long, value_name = "DATE")]
    pub until: NaiveDate,

    /// Base directory containing one checkout per repository
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo_base: PathBuf,

    /// Directory the reports are written into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_base: PathBuf,

    /// Branch name (reserved for external tooling; the log window is
    /// taken from the current checkout)
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

impl Cli {
    /// Turn parsed arguments into the exporter configuration.
    pub fn into_config(self) -> ExportConfig {
        ExportConfig {
            repos: self.repos,
            begin_date: self.since,
            end_date: self.until,
            repo_base: self.repo_base,
            out_base: self.out_base,
            branch: self.branch,
        }
    }
}

/// Static configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Repository directory names under `repo_base`
    pub repos: Vec<String>,

    /// Inclusive lower bound of the commit window
    pub begin_date: NaiveDate,

    /// Inclusive upper bound of the commit window
    pub end_date: NaiveDate,

    /// Base directory containing the repository checkouts
    pub repo_base: PathBuf,

    /// Base directory the reports are written into
    pub out_base: PathBuf,

    /// Declared branch name; not consumed by the export flow
    pub branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_full_invocation() {
        let cli = Cli::try_parse_from([
            "git-log-exporter",
            "--repo",
            "loan-api",
            "--repo",
            "loan-data",
            "--since",
            "2023-02-01",
            "--until",
            "2023-02-28",
            "--repo-base",
            "/srv/repos",
            "--out-base",
            "/srv/reports",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.repos, vec!["loan-api", "loan-data"]);
        assert_eq!(cli.since, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!(cli.until, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
        assert_eq!(cli.repo_base, PathBuf::from("/srv/repos"));
    }

    #[test]
    fn test_cli_requires_repo() {
        let result = Cli::try_parse_from([
            "git-log-exporter",
            "--since",
            "2023-02-01",
            "--until",
            "2023-02-28",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_malformed_date() {
        let result = Cli::try_parse_from([
            "git-log-exporter",
            "--repo",
            "loan-api",
            "--since",
            "02/01/2023",
            "--until",
            "2023-02-28",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_config_defaults() {
        let cli = Cli::try_parse_from([
            "git-log-exporter",
            "--repo",
            "loan-api",
            "--since",
            "2023-02-01",
            "--until",
            "2023-02-28",
        ])
        .expect("arguments should parse");

        let config = cli.into_config();
        assert_eq!(config.repo_base, PathBuf::from("."));
        assert_eq!(config.out_base, PathBuf::from("."));
        assert!(config.branch.is_none());
        assert_eq!(config.begin_date.to_string(), "2023-02-01");
    }
}
