//! # Error Handling
//!
//! This module defines the error type shared by every part of the migrator.
//! It uses `thiserror` to derive descriptive messages for each failure mode.
//!
//! Errors fall into two classes:
//!
//! - **Configuration errors** are fatal. They are raised once, before any
//!   repository is touched, and abort the whole run.
//! - **Step errors** (`Command`, `Spawn`, `Overlay`, and wrapped I/O errors)
//!   come from a single external-process invocation or the overlay copy. The
//!   runner contains them at the repository boundary, logs them, and moves on
//!   to the next repository.
//!
//! The `Result` alias is used throughout the library.

use thiserror::Error;

/// Main error type for migrator operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration is missing or violates a startup invariant.
    ///
    /// Carries an optional hint describing how to fix it.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Configuration {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An external command ran but exited with a non-zero status.
    #[error("Command `{command}` failed in {dir} ({}): {stderr}{}", code.map(|c| format!("exit code {}", c)).unwrap_or_else(|| "terminated by signal".to_string()), hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Command {
        command: String,
        dir: String,
        /// Exit code, `None` when the process was killed by a signal
        code: Option<i32>,
        stderr: String,
        /// Optional hint for how to resolve the failure
        hint: Option<String>,
    },

    /// An external command could not be started at all.
    #[error("Failed to start `{command}`: {message}")]
    Spawn { command: String, message: String },

    /// Copying the overlay folder into a repository failed.
    #[error("Overlay copy error: {src} -> {dst}: {message}")]
    Overlay {
        src: String,
        dst: String,
        message: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Returns `true` for the fatal, pre-run class of errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
