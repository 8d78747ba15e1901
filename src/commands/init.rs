//! # Init Command Implementation
//!
//! Writes a starter JSON configuration file. The generated file lists every
//! supported key with its default value plus placeholder repositories, so it
//! can be edited and passed straight to `migrate --config`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use github_workflow_migrator::config::{Configuration, GithubSettings};
use github_workflow_migrator::defaults;
use github_workflow_migrator::output::{Marker, OutputConfig};

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(short, long, value_name = "PATH", default_value = defaults::CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the `init` command.
pub fn execute(args: InitArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    write_example(&args.output, args.force)?;
    println!(
        "{} Wrote {}",
        Marker::Ok.render(&out),
        args.output.display()
    );
    Ok(())
}

fn write_example(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, example_config()?)?;
    Ok(())
}

/// The example configuration as pretty-printed JSON.
pub fn example_config() -> Result<String> {
    let config = Configuration {
        github: GithubSettings {
            user: Some("your-github-user".to_string()),
            mode: "ssh".to_string(),
        },
        repositories: vec!["first-repo".to_string(), "second-repo".to_string()],
        source_path: Some(PathBuf::from(defaults::OVERLAY_DIR_NAME)),
        ..Configuration::default()
    };
    let mut json = serde_json::to_string_pretty(&config)?;
    json.push('\n');
    Ok(json)
}
