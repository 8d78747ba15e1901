//! Migrate command implementation
//!
//! Validates the configuration, then clones every repository, overlays the
//! `.github` folder and runs the optional install/test/publish steps. Only
//! configuration problems make the command fail; per-repository failures are
//! logged and summarized.

use anyhow::Result;
use clap::Args;

use github_workflow_migrator::runner;

use super::ConfigArgs;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub settings: ConfigArgs,
}

/// Execute the migrate command
pub fn execute(args: MigrateArgs) -> Result<()> {
    let config = args.settings.resolve()?;
    let summary = runner::run(config.as_ref())?;

    if !summary.is_success() {
        log::debug!(
            "{} of {} repositories failed",
            summary.failed().count(),
            summary.outcomes().len()
        );
    }

    Ok(())
}
