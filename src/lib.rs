//! git-log-exporter - Per-repository commit history reports
//!
//! A CLI tool that runs `git log` over a date range for a fixed set of
//! repositories and writes one CSV report per repository.
//!
//! This library provides:
//! - [`config`]: CLI surface and export configuration
//! - [`export`]: Per-repository export orchestration
//! - [`git`]: git command execution and log output parsing
//! - [`model`]: Domain models
//! - [`report`]: CSV report writing

pub mod config;
pub mod export;
pub mod git;
pub mod model;
pub mod report;
