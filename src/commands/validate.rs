//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand. It resolves the
//! configuration exactly like `migrate`, runs the same startup checks, and
//! prints the resolved plan: the clone URL and target directory of every
//! repository, the overlay source, and which optional steps would run.
//!
//! This command is read-only: it never clones, copies, or runs any command.

use anyhow::Result;
use clap::Args;

use github_workflow_migrator::config::MigrationPlan;
use github_workflow_migrator::defaults;
use github_workflow_migrator::output::{Marker, OutputConfig};

use super::ConfigArgs;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub settings: ConfigArgs,
}

/// Execute the `validate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.settings.resolve()?;

    let plan = match MigrationPlan::new(config.as_ref()) {
        Ok(plan) => plan,
        Err(e) => {
            println!("{} Configuration is invalid", Marker::Error.render(&out));
            return Err(e.into());
        }
    };

    println!("{} Configuration is valid", Marker::Ok.render(&out));
    println!();
    print!("{}", describe_plan(&plan, &out));
    Ok(())
}

/// Render a plan as human-readable text.
pub fn describe_plan(plan: &MigrationPlan, out: &OutputConfig) -> String {
    let info = Marker::Info.render(out);
    let mut text = String::new();

    text.push_str(&format!("{} Mode: {}\n", info, plan.mode));
    text.push_str(&format!(
        "{} Overlay source: {}{}\n",
        info,
        plan.overlay_source.display(),
        if plan.default_overlay {
            " (default)"
        } else {
            ""
        }
    ));
    if !plan.overlay_source.is_dir() {
        text.push_str(&format!(
            "{} Overlay source does not exist\n",
            Marker::Error.render(out)
        ));
    }

    let step = |enabled: bool, label: String| {
        let marker = if enabled { Marker::Ok } else { Marker::Skip };
        format!("{} {}\n", marker.render(out), label)
    };
    text.push_str(&step(
        plan.install_command.is_some(),
        format!(
            "Install: {}",
            plan.install_command.as_deref().unwrap_or("disabled")
        ),
    ));
    text.push_str(&step(
        plan.test_command.is_some(),
        format!("Test: {}", plan.test_command.as_deref().unwrap_or("disabled")),
    ));
    text.push_str(&step(
        !plan.safe_run,
        if plan.safe_run {
            "Publish: disabled (safe run)".to_string()
        } else {
            format!("Publish: git commit -m \"{}\" && git push", plan.commit_message)
        },
    ));

    text.push_str(&format!(
        "\nRepositories ({}):\n",
        plan.repositories.len()
    ));
    for repo in &plan.repositories {
        text.push_str(&format!(
            "  {} -> {} ({})\n",
            plan.clone_url(repo),
            plan.repo_dir(repo).display(),
            defaults::OVERLAY_DIR_NAME
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use github_workflow_migrator::config::{Configuration, GithubSettings};

    fn plan(safe_run: bool) -> MigrationPlan {
        let mut config = Configuration {
            github: GithubSettings {
                user: Some("bob".to_string()),
                mode: "https".to_string(),
            },
            repositories: vec!["r1".to_string(), "r2".to_string()],
            folder: "./work".into(),
            source_path: Some("/nonexistent/overlay".into()),
            ..Configuration::default()
        };
        config.options.install = true;
        config.options.safe_run = safe_run;
        MigrationPlan::new(Some(&config)).unwrap()
    }

    #[test]
    fn test_describe_plan_lists_repositories() {
        let text = describe_plan(&plan(true), &OutputConfig::plain());
        assert!(text.contains("Mode: https"));
        assert!(text.contains("https://github.com/bob/r1.git -> ./work/r1"));
        assert!(text.contains("https://github.com/bob/r2.git -> ./work/r2"));
        assert!(text.contains("Repositories (2):"));
    }

    #[test]
    fn test_describe_plan_steps() {
        let text = describe_plan(&plan(true), &OutputConfig::plain());
        assert!(text.contains("[OK] Install: npm install"));
        assert!(text.contains("[SKIP] Test: disabled"));
        assert!(text.contains("[SKIP] Publish: disabled (safe run)"));

        let text = describe_plan(&plan(false), &OutputConfig::plain());
        assert!(text.contains("[OK] Publish: git commit -m \"ci: Added Github Folder\""));
    }

    #[test]
    fn test_describe_plan_flags_missing_overlay() {
        let text = describe_plan(&plan(true), &OutputConfig::plain());
        assert!(text.contains("[ERR] Overlay source does not exist"));
    }
}
