//! Default values for migrator configuration.
//!
//! This module provides centralized default values used by the configuration
//! model and the CLI, ensuring both agree.

use std::path::PathBuf;

/// Shell command run for the install step.
pub const INSTALL_COMMAND: &str = "npm install";

/// Shell command run for the test step.
pub const TEST_COMMAND: &str = "npm test";

/// Commit message used by the publish steps.
pub const COMMIT_MESSAGE: &str = "ci: Added Github Folder";

/// Base directory repositories are cloned under.
pub const FOLDER: &str = ".";

/// Name of the overlay folder, both at the source and inside each repository.
pub const OVERLAY_DIR_NAME: &str = ".github";

/// File name written by `init` when no output path is given.
pub const CONFIG_FILE_NAME: &str = "github-workflow-migrator.json";

/// Returns the overlay folder used when no source path is configured.
///
/// This is the `.github` folder bundled next to the running executable. Falls
/// back to `./.github` if the executable location cannot be determined.
pub fn default_overlay_source() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(OVERLAY_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(".").join(OVERLAY_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_overlay_source_ends_with_github() {
        let source = default_overlay_source();
        assert!(source.ends_with(".github"));
    }

    #[test]
    fn test_default_overlay_source_is_next_to_executable() {
        let exe_dir = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_path_buf();
        assert_eq!(default_overlay_source(), exe_dir.join(".github"));
    }
}
