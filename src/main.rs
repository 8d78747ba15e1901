//! # GitHub Workflow Migrator CLI
//!
//! This is the binary entry point for the `github-workflow-migrator`
//! command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the selected command and turning fatal errors into a non-zero
//!   exit status.
//!
//! The migration logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
