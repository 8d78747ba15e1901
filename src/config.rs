//! # Configuration Model and Validation
//!
//! This module defines the [`Configuration`] value the migrator runs from and
//! the startup validation that turns it into a [`MigrationPlan`].
//!
//! ## Shape
//!
//! A configuration arrives either from a JSON file (camelCase keys, every
//! field optional) or from command-line flags merged into the same shape:
//!
//! ```json
//! {
//!   "github": { "user": "alice", "mode": "ssh" },
//!   "options": { "install": false, "test": false, "safeRun": false, "verbose": true },
//!   "repositories": ["repo-a", "repo-b"],
//!   "customUrl": "https://git.example.com/{{username}}/{{repo}}.git",
//!   "folder": ".",
//!   "sourcePath": "./.github",
//!   "commands": { "install": "npm install", "test": "npm test" },
//!   "commitMessage": "ci: Added Github Folder"
//! }
//! ```
//!
//! ## Validation
//!
//! [`MigrationPlan::new`] performs every fatal check once, before any
//! repository is processed:
//!
//! 1. A configuration must be present.
//! 2. `github.mode` must be `ssh` or `https`.
//! 3. `repositories` must be non-empty.
//!
//! It also resolves the clone-URL template and the overlay source, so the
//! plan is all the runner needs and is never mutated afterwards.

use crate::defaults;
use crate::error::{Error, Result};
use crate::template::CloneUrlTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Transport used by the built-in clone-URL templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GithubMode {
    Ssh,
    Https,
}

impl FromStr for GithubMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ssh" => Ok(GithubMode::Ssh),
            "https" => Ok(GithubMode::Https),
            other => Err(Error::Configuration {
                message: format!("Invalid mode '{}'", other),
                hint: Some("Please use either ssh or https".to_string()),
            }),
        }
    }
}

impl fmt::Display for GithubMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GithubMode::Ssh => write!(f, "ssh"),
            GithubMode::Https => write!(f, "https"),
        }
    }
}

/// GitHub account settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    /// Username (or `user:token` for https) substituted into clone URLs.
    pub user: Option<String>,
    /// Either `ssh` or `https`. Kept as text so an invalid value is reported
    /// by validation rather than by the JSON parser.
    pub mode: String,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            user: None,
            mode: GithubMode::Ssh.to_string(),
        }
    }
}

/// Step toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunOptions {
    pub install: bool,
    pub test: bool,
    /// Skip stage, commit and push.
    pub safe_run: bool,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            install: false,
            test: false,
            safe_run: false,
            verbose: true,
        }
    }
}

/// Shell commands for the optional steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commands {
    pub install: String,
    pub test: String,
}

impl Default for Commands {
    fn default() -> Self {
        Self {
            install: defaults::INSTALL_COMMAND.to_string(),
            test: defaults::TEST_COMMAND.to_string(),
        }
    }
}

/// The complete migrator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    pub github: GithubSettings,
    pub options: RunOptions,
    /// Repository names, processed in this order.
    pub repositories: Vec<String>,
    /// Template overriding the built-in clone URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    pub folder: PathBuf,
    /// Overlay folder; the bundled `.github` folder when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
    pub commands: Commands,
    pub commit_message: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            github: GithubSettings::default(),
            options: RunOptions::default(),
            repositories: Vec::new(),
            custom_url: None,
            folder: PathBuf::from(defaults::FOLDER),
            source_path: None,
            commands: Commands::default(),
            commit_message: defaults::COMMIT_MESSAGE.to_string(),
        }
    }
}

/// Parse a configuration from a JSON string.
pub fn parse(json: &str) -> Result<Configuration> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a configuration from a JSON file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Split a comma-separated repository list, dropping blank entries.
pub fn split_repositories(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|repo| !repo.is_empty())
        .map(str::to_string)
        .collect()
}

/// A validated configuration, ready to run.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    pub mode: GithubMode,
    pub url_template: CloneUrlTemplate,
    pub repositories: Vec<String>,
    pub folder: PathBuf,
    pub overlay_source: PathBuf,
    /// `true` when `overlay_source` is the bundled default.
    pub default_overlay: bool,
    pub install_command: Option<String>,
    pub test_command: Option<String>,
    pub safe_run: bool,
    pub verbose: bool,
    pub commit_message: String,
}

impl MigrationPlan {
    /// Validate `config` and resolve everything that stays fixed for the run.
    pub fn new(config: Option<&Configuration>) -> Result<Self> {
        let config = config.ok_or_else(|| Error::Configuration {
            message: "No config file or CLI options found".to_string(),
            hint: Some("Pass --config <path> or --repositories <list>".to_string()),
        })?;

        let mode: GithubMode = config.github.mode.parse()?;

        if config.repositories.is_empty() {
            return Err(Error::Configuration {
                message: "No repositories found".to_string(),
                hint: Some(
                    "Add at least one repository to the config file or pass --repositories"
                        .to_string(),
                ),
            });
        }

        let user = match config.github.user.as_deref() {
            Some(user) => user,
            None => {
                log::warn!("No GitHub user configured, {{{{username}}}} will be left empty");
                ""
            }
        };
        let url_template =
            CloneUrlTemplate::resolve(config.custom_url.as_deref(), mode, user)?;
        if !url_template.has_repo_token() {
            log::warn!(
                "Clone URL '{}' has no {{{{repo}}}} placeholder, every repository will clone the same URL",
                url_template.as_str()
            );
        }

        let (overlay_source, default_overlay) = match &config.source_path {
            Some(path) => (path.clone(), false),
            None => (defaults::default_overlay_source(), true),
        };

        Ok(Self {
            mode,
            url_template,
            repositories: config.repositories.clone(),
            folder: config.folder.clone(),
            overlay_source,
            default_overlay,
            install_command: config
                .options
                .install
                .then(|| config.commands.install.clone()),
            test_command: config.options.test.then(|| config.commands.test.clone()),
            safe_run: config.options.safe_run,
            verbose: config.options.verbose,
            commit_message: config.commit_message.clone(),
        })
    }

    /// Directory a repository is cloned into.
    pub fn repo_dir(&self, repo: &str) -> PathBuf {
        self.folder.join(repo)
    }

    /// Clone URL for a repository.
    pub fn clone_url(&self, repo: &str) -> String {
        self.url_template.url_for(repo)
    }
}
