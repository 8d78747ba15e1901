//! # External Process Execution
//!
//! Every step of a migration except the overlay copy is an external process.
//! This module describes such a process as an [`Invocation`] and runs it
//! through the [`ProcessRunner`] trait.
//!
//! The trait is the seam used by tests: the runner is handed a fake that
//! records invocations instead of spawning `git` or `npm`. The application
//! uses [`SystemProcessRunner`], which wraps `std::process::Command`.
//!
//! Runs are blocking and have no timeout. A process waiting on a credential
//! prompt stalls the whole run.

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;
use std::process::Command;

/// A single external command: a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Raw command line when built from a shell string.
    shell_line: Option<String>,
}

impl Invocation {
    /// A program run directly, without a shell.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            shell_line: None,
        }
    }

    /// A command line interpreted by the platform shell.
    pub fn shell(line: impl Into<String>) -> Self {
        let line = line.into();
        let (program, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };
        Self {
            program: program.to_string(),
            args: vec![flag.to_string(), line.clone()],
            shell_line: Some(line),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = &self.shell_line {
            return write!(f, "{}", line);
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured output of a successful invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
}

/// Trait for running external processes - allows mocking in tests
pub trait ProcessRunner {
    /// Run `invocation` with `dir` as working directory and wait for it.
    ///
    /// A non-zero exit status and a failure to spawn are both errors.
    fn run(&self, invocation: &Invocation, dir: &Path) -> Result<ProcessOutput>;
}

/// The default `ProcessRunner`, spawning real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation, dir: &Path) -> Result<ProcessOutput> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(dir)
            .output()
            .map_err(|e| Error::Spawn {
                command: invocation.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::Command {
                command: invocation.to_string(),
                dir: dir.display().to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                hint: None,
            });
        }

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
