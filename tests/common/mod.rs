//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_overlay();
//! fixture.command().arg("validate").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// JSON configuration snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Valid https configuration with two repositories, safe run.
    pub const TWO_REPOS_SAFE_RUN: &str = r#"{
  "github": { "user": "bob", "mode": "https" },
  "options": { "safeRun": true },
  "repositories": ["r1", "r2"]
}"#;

    /// Invalid github mode.
    pub const INVALID_MODE: &str = r#"{
  "github": { "mode": "ftp" },
  "repositories": ["r1"]
}"#;

    /// No repositories.
    pub const NO_REPOSITORIES: &str = r#"{ "github": { "mode": "ssh" } }"#;

    /// Not JSON at all.
    pub const INVALID_JSON: &str = "repositories: [r1]";
}

/// A temporary working area with an optional overlay folder and config file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add an overlay folder at `overlay/.github` with one workflow.
    pub fn with_overlay(self) -> Self {
        self.temp_dir
            .child("overlay/.github/workflows/ci.yml")
            .write_str("name: CI\non: [push]\n")
            .expect("Failed to write overlay workflow");
        self
    }

    /// Write `migrator.json` with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("migrator.json")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("migrator.json")
    }

    pub fn overlay_path(&self) -> PathBuf {
        self.path().join("overlay/.github")
    }

    pub fn work_path(&self) -> PathBuf {
        self.path().join("work")
    }

    /// A command for the binary running in this fixture's directory, with a
    /// clean logging environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("github-workflow-migrator");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("GITHUB_WORKFLOW_MIGRATOR_CONFIG");
        cmd
    }

    /// A `migrate` command whose clones are guaranteed to fail: the custom
    /// URL points at a directory that does not exist.
    pub fn failing_migrate(&self, repositories: &str) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("migrate")
            .arg("--repositories")
            .arg(repositories)
            .arg("--custom-url")
            .arg(self.path().join("missing-remote/{{repo}}.git"))
            .arg("--folder")
            .arg(self.work_path())
            .arg("--source-path")
            .arg(self.overlay_path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
