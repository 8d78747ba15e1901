//! # GitHub Workflow Migrator Library
//!
//! This library implements a one-off maintenance task over many repositories:
//! clone each repository, overlay a shared `.github` folder, optionally run
//! install and test commands, and optionally commit and push the result. It
//! backs the `github-workflow-migrator` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use github_workflow_migrator::config::{self, MigrationPlan};
//!
//! let config = config::parse(r#"{
//!     "github": { "user": "alice", "mode": "https" },
//!     "repositories": ["api", "web"],
//!     "folder": "./work"
//! }"#).unwrap();
//!
//! let plan = MigrationPlan::new(Some(&config)).unwrap();
//! assert_eq!(plan.clone_url("api"), "https://github.com/alice/api.git");
//! assert_eq!(plan.repo_dir("web"), std::path::Path::new("./work/web"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the JSON/CLI configuration model and the
//!   startup validation producing a `MigrationPlan`.
//! - **Templates (`template`)**: clone-URL templates with `{{username}}` and
//!   `{{repo}}` placeholders.
//! - **Processes (`process`, `git`)**: external commands described as
//!   `Invocation`s and run through the `ProcessRunner` trait.
//! - **Overlay (`overlay`)**: the recursive `.github` copy behind the
//!   `FileOperations` trait.
//! - **Reporting (`report`)**: the `Reporter` handle the runner logs through.
//! - **Runner (`runner`)**: the per-repository step sequence and its failure
//!   boundary.
//!
//! ## Execution Flow
//!
//! 1. Validate the configuration once; any problem aborts before a single
//!    repository is touched.
//! 2. For each repository, in order: clone, overlay, install, test, stage,
//!    commit, push. Optional steps are skipped according to the plan.
//! 3. A failing step ends that repository only; the next one is processed
//!    regardless.
//! 4. The outcomes are collected in a `RunSummary`.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod output;
pub mod overlay;
pub mod process;
pub mod report;
pub mod runner;
pub mod template;
