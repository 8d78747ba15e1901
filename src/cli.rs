//! CLI argument parsing and command dispatch

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// GitHub Workflow Migrator - Overlay a shared .github folder onto many repositories
#[derive(Parser, Debug)]
#[command(name = "github-workflow-migrator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: log::LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone each repository, overlay the .github folder, and optionally publish it
    Migrate(commands::migrate::MigrateArgs),

    /// Validate the configuration and show the resolved plan without running it
    Validate(commands::validate::ValidateArgs),

    /// Write a starter configuration file
    Init(commands::init::InitArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level)?;

        match self.command {
            Commands::Migrate(args) => commands::migrate::execute(args),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Init(args) => commands::init::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Install `env_logger` writing plain lines to stdout. `RUST_LOG`, when set,
/// takes precedence over `--log-level`.
fn init_logging(level: log::LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{:<5} {}", record.level(), record.args()))
        .try_init()?;
    Ok(())
}
