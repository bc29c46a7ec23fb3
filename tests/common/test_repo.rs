//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository for testing export operations.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    ///
    /// Commit identity is configured locally so commits work regardless
    /// of the global git configuration.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let repo = Self { dir };
        repo.git(&["init"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo
    }

    /// Create a new git repository inside `parent` under `name`.
    ///
    /// Used by exporter tests that expect a base directory containing one
    /// checkout per repository name.
    pub fn init_at(parent: &Path, name: &str) -> PathBuf {
        let path = parent.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create repo directory");

        Self::git_in(&path, &["init"]);
        Self::git_in(&path, &["config", "user.name", "Test User"]);
        Self::git_in(&path, &["config", "user.email", "test@example.com"]);
        path
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        Self::git_in(&self.path(), args)
    }

    /// Execute a git command in an arbitrary directory.
    pub fn git_in(dir: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Stage everything and commit with the given message.
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "."]);
        self.git(&["commit", "-m", message]);
    }

    /// Write a file and commit it in one step.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        self.write_file(name, content);
        self.commit_all(message);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
