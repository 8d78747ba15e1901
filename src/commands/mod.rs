//! # CLI Command Implementations
//!
//! Each subcommand of `github-workflow-migrator` lives in its own file with
//! an `Args` struct (derived with `clap`) and an `execute` function calling
//! into the `github_workflow_migrator` library.
//!
//! `migrate` and `validate` share [`ConfigArgs`], the flags that build a
//! `Configuration` when no config file is given.

pub mod completions;
pub mod init;
pub mod migrate;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use github_workflow_migrator::config::{self, Commands, Configuration, GithubSettings, RunOptions};
use github_workflow_migrator::defaults;

/// Configuration sources shared by `migrate` and `validate`
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to a JSON config file. If provided, all other options are ignored
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "GITHUB_WORKFLOW_MIGRATOR_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// GitHub user (user:password or token for https)
    #[arg(short = 'u', long, value_name = "USER")]
    pub github_user: Option<String>,

    /// GitHub mode (ssh or https)
    #[arg(short = 'm', long, value_name = "MODE", default_value = "ssh")]
    pub github_mode: String,

    /// Run the install command in each repository
    #[arg(short, long)]
    pub install: bool,

    /// Run the test command in each repository
    #[arg(short, long)]
    pub test: bool,

    /// Skip git add, commit and push (safe run)
    #[arg(long, visible_alias = "safe-run", alias = "dry-run")]
    pub no_commit: bool,

    /// Only report failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Comma-separated list of repositories to process
    #[arg(short, long, value_name = "LIST")]
    pub repositories: Option<String>,

    /// Custom clone URL. Use {{username}} and {{repo}} as placeholders
    #[arg(long, value_name = "URL")]
    pub custom_url: Option<String>,

    /// Folder the repositories are cloned into
    #[arg(short, long, value_name = "PATH", default_value = defaults::FOLDER)]
    pub folder: PathBuf,

    /// The .github folder to copy into each repository
    #[arg(short, long, value_name = "PATH")]
    pub source_path: Option<PathBuf>,

    /// Command used for the install step
    #[arg(long, value_name = "CMD", default_value = defaults::INSTALL_COMMAND)]
    pub install_command: String,

    /// Command used for the test step
    #[arg(long, value_name = "CMD", default_value = defaults::TEST_COMMAND)]
    pub test_command: String,

    /// Commit message used when publishing
    #[arg(long, value_name = "MSG", default_value = defaults::COMMIT_MESSAGE)]
    pub commit_message: String,
}

impl ConfigArgs {
    /// Build the configuration from the config file or the flags.
    ///
    /// Returns `None` when neither a config file nor a repository list was
    /// given.
    pub fn resolve(&self) -> Result<Option<Configuration>> {
        if let Some(path) = &self.config {
            let config = config::from_file(path)
                .with_context(|| format!("Cannot load config file {}", path.display()))?;
            return Ok(Some(config));
        }

        let Some(repositories) = &self.repositories else {
            return Ok(None);
        };

        Ok(Some(Configuration {
            github: GithubSettings {
                user: self.github_user.clone(),
                mode: self.github_mode.clone(),
            },
            options: RunOptions {
                install: self.install,
                test: self.test,
                safe_run: self.no_commit,
                verbose: !self.quiet,
            },
            repositories: config::split_repositories(repositories),
            custom_url: self.custom_url.clone(),
            folder: self.folder.clone(),
            source_path: self.source_path.clone(),
            commands: Commands {
                install: self.install_command.clone(),
                test: self.test_command.clone(),
            },
            commit_message: self.commit_message.clone(),
        }))
    }
}
