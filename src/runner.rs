//! # Migration Runner
//!
//! The [`Migrator`] walks the repository list of a [`MigrationPlan`] one
//! repository at a time and runs the same step sequence for each:
//!
//! 1. **Clone** the repository into `<folder>/<repo>`.
//! 2. **Overlay** the shared `.github` folder into `<folder>/<repo>/.github`.
//! 3. **Install** (optional) with the configured shell command.
//! 4. **Test** (optional) with the configured shell command.
//! 5. **Publish** unless this is a safe run: stage, commit, push.
//!
//! Install, test and the publish commands run inside `<folder>/<repo>`.
//!
//! The first failing step ends that repository's sequence. The failure is
//! reported and recorded in the [`RunSummary`], and the runner moves on to the
//! next repository. Nothing already cloned or copied is rolled back.

use std::fmt;
use std::path::Path;

use crate::config::{Configuration, MigrationPlan};
use crate::error::{Error, Result};
use crate::git;
use crate::overlay::{DefaultFileOperations, FileOperations};
use crate::process::{Invocation, ProcessRunner, SystemProcessRunner};
use crate::report::{self, Reporter};

/// One step of a repository's migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clone,
    Overlay,
    Install,
    Test,
    Stage,
    Commit,
    Push,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Clone => "clone",
            Step::Overlay => "overlay",
            Step::Install => "install",
            Step::Test => "test",
            Step::Stage => "stage",
            Step::Commit => "commit",
            Step::Push => "push",
        };
        write!(f, "{}", name)
    }
}

/// Terminal state of one repository.
#[derive(Debug)]
pub enum RepositoryStatus {
    Done,
    Failed { step: Step, error: Error },
}

/// The result of migrating one repository.
#[derive(Debug)]
pub struct RepositoryOutcome {
    pub repository: String,
    pub status: RepositoryStatus,
}

impl RepositoryOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self.status, RepositoryStatus::Done)
    }
}

/// Outcomes of a whole run, in processing order.
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<RepositoryOutcome>,
}

impl RunSummary {
    pub fn outcomes(&self) -> &[RepositoryOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &RepositoryOutcome> {
        self.outcomes.iter().filter(|o| o.is_done())
    }

    pub fn failed(&self) -> impl Iterator<Item = &RepositoryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_done())
    }

    /// `true` when every repository reached `Done`.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(RepositoryOutcome::is_done)
    }
}

struct StepFailure {
    step: Step,
    error: Error,
}

/// Runs a [`MigrationPlan`].
pub struct Migrator {
    plan: MigrationPlan,
    processes: Box<dyn ProcessRunner>,
    files: Box<dyn FileOperations>,
    reporter: Box<dyn Reporter>,
}

impl Migrator {
    /// A migrator spawning real processes, reporting according to the plan's
    /// verbosity.
    pub fn new(plan: MigrationPlan) -> Self {
        let reporter = report::for_verbosity(plan.verbose);
        Self::with_operations(
            plan,
            Box::new(SystemProcessRunner),
            Box::new(DefaultFileOperations),
            reporter,
        )
    }

    /// A migrator with custom process, filesystem and reporting
    /// implementations.
    pub fn with_operations(
        plan: MigrationPlan,
        processes: Box<dyn ProcessRunner>,
        files: Box<dyn FileOperations>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            plan,
            processes,
            files,
            reporter,
        }
    }

    pub fn plan(&self) -> &MigrationPlan {
        &self.plan
    }

    /// Migrate every repository of the plan.
    ///
    /// Never fails as a whole; per-repository failures end up in the summary.
    pub fn run(&self) -> RunSummary {
        let plan = &self.plan;

        if plan.default_overlay {
            self.reporter.info(&format!(
                "No source path configured, using the local {} folder",
                plan.overlay_source.display()
            ));
        }
        if !plan.overlay_source.is_dir() {
            self.reporter.warn(&format!(
                "Overlay folder {} does not exist, every overlay step will fail",
                plan.overlay_source.display()
            ));
        }
        if plan.safe_run {
            self.reporter
                .info("Safe run enabled. No changes will be pushed to the repositories");
        }

        let mut summary = RunSummary::default();
        for repo in &plan.repositories {
            let status = match self.migrate_repository(repo) {
                Ok(()) => RepositoryStatus::Done,
                Err(StepFailure { step, error }) => {
                    self.reporter.failure(repo, step, &error);
                    RepositoryStatus::Failed { step, error }
                }
            };
            summary.outcomes.push(RepositoryOutcome {
                repository: repo.clone(),
                status,
            });
        }

        if plan.safe_run {
            self.reporter.info(
                "Safe run complete. Run again without safe run to commit and push the changes",
            );
        }
        self.report_summary(&summary);

        summary
    }

    fn migrate_repository(&self, repo: &str) -> std::result::Result<(), StepFailure> {
        let plan = &self.plan;
        let repo_dir = plan.repo_dir(repo);

        let url = plan.clone_url(repo);
        self.run_step(Step::Clone, &git::clone(&url, &repo_dir), Path::new("."))
            .map_err(|failure| StepFailure {
                step: failure.step,
                error: git::with_clone_hint(failure.error),
            })?;

        let overlay_dir = repo_dir.join(crate::defaults::OVERLAY_DIR_NAME);
        self.reporter.info(&format!(
            "{} >> copy {} -> {}",
            plan.folder.display(),
            plan.overlay_source.display(),
            overlay_dir.display()
        ));
        self.files
            .copy_overlay(&plan.overlay_source, &overlay_dir)
            .map_err(|error| StepFailure {
                step: Step::Overlay,
                error,
            })?;

        if let Some(command) = &plan.install_command {
            self.run_step(Step::Install, &Invocation::shell(command), &repo_dir)?;
        }
        if let Some(command) = &plan.test_command {
            self.run_step(Step::Test, &Invocation::shell(command), &repo_dir)?;
        }

        if !plan.safe_run {
            self.run_step(Step::Stage, &git::add_all(), &repo_dir)?;
            self.run_step(Step::Commit, &git::commit(&plan.commit_message), &repo_dir)?;
            self.run_step(Step::Push, &git::push(), &repo_dir)?;
        }

        Ok(())
    }

    fn run_step(
        &self,
        step: Step,
        invocation: &Invocation,
        dir: &Path,
    ) -> std::result::Result<(), StepFailure> {
        self.reporter
            .info(&format!("{} >> {}", dir.display(), invocation));
        let output = self
            .processes
            .run(invocation, dir)
            .map_err(|error| StepFailure { step, error })?;
        if !output.stdout.trim().is_empty() {
            log::debug!("{} output:\n{}", step, output.stdout.trim_end());
        }
        Ok(())
    }

    fn report_summary(&self, summary: &RunSummary) {
        let total = summary.outcomes().len();
        let failed: Vec<_> = summary.failed().collect();
        self.reporter.info(&format!(
            "Processed {} repositories: {} succeeded, {} failed",
            total,
            total - failed.len(),
            failed.len()
        ));
        for outcome in failed {
            if let RepositoryStatus::Failed { step, .. } = &outcome.status {
                self.reporter
                    .info(&format!("  {} failed at the {} step", outcome.repository, step));
            }
        }
    }
}

/// Validate `config` and migrate every repository with the system defaults.
///
/// Only configuration errors are returned; repository failures are part of
/// the summary.
pub fn run(config: Option<&Configuration>) -> Result<RunSummary> {
    let plan = MigrationPlan::new(config)?;
    Ok(Migrator::new(plan).run())
}
