//! # Progress Reporting
//!
//! The runner reports progress through a [`Reporter`] handle chosen when the
//! runner is built, instead of silencing a global logger. Two implementations
//! ship with the crate:
//!
//! - [`LogReporter`] sends everything to the `log` facade.
//! - [`QuietReporter`] drops informational messages but still logs warnings
//!   and failures.

use crate::error::Error;
use crate::runner::Step;

/// Sink for the runner's progress messages.
pub trait Reporter {
    /// An informational message, e.g. the command a step is about to run.
    fn info(&self, message: &str);

    /// Something is likely to go wrong but the run continues.
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }

    /// A repository stopped at `step` because of `error`.
    fn failure(&self, repository: &str, step: Step, error: &Error);
}

/// Reports everything through the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn failure(&self, repository: &str, step: Step, error: &Error) {
        log::error!("{}: {} step failed: {}", repository, step, error);
    }
}

/// Reports failures only.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn info(&self, _message: &str) {}

    fn failure(&self, repository: &str, step: Step, error: &Error) {
        LogReporter.failure(repository, step, error);
    }
}

/// Pick the reporter for a run.
pub fn for_verbosity(verbose: bool) -> Box<dyn Reporter> {
    if verbose {
        Box::new(LogReporter)
    } else {
        Box::new(QuietReporter)
    }
}
