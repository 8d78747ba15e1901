//! # Terminal Output
//!
//! Helpers for the human-facing output of the CLI commands (`validate`,
//! `init`). Run progress itself goes through the `log` facade; this module
//! only decides how status markers look.
//!
//! Color and emoji are used when:
//! - `--color=always` is given, or
//! - `--color=auto` (the default) and the terminal supports colors, `NO_COLOR`
//!   is unset, `CLICOLOR` is not `0`, and `TERM` is not `dumb`.
//!   `CLICOLOR_FORCE=1` turns them on even without a TTY.

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Build from the value of the `--color` flag: "always", "never" or "auto".
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => detect_color_support(),
        };
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

fn detect_color_support() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

/// Status markers printed in front of CLI output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Ok,
    Error,
    Info,
    Skip,
}

impl Marker {
    /// Render the marker for the given output configuration.
    pub fn render(self, config: &OutputConfig) -> String {
        if !config.use_color {
            return match self {
                Marker::Ok => "[OK]",
                Marker::Error => "[ERR]",
                Marker::Info => "[INFO]",
                Marker::Skip => "[SKIP]",
            }
            .to_string();
        }
        match self {
            Marker::Ok => style("✅").green().to_string(),
            Marker::Error => style("❌").red().to_string(),
            Marker::Info => style("📋").to_string(),
            Marker::Skip => style("⏭").dim().to_string(),
        }
    }
}
