use std::path::Path;

use crate::error::Error;
use crate::process::Invocation;

/// Clone `url` into `target_dir`.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
pub fn clone(url: &str, target_dir: &Path) -> Invocation {
    Invocation::new(
        "git",
        [
            "clone".to_string(),
            url.to_string(),
            target_dir.display().to_string(),
        ],
    )
}

/// Stage every change in the working tree.
pub fn add_all() -> Invocation {
    Invocation::new("git", ["add", "--all"])
}

pub fn commit(message: &str) -> Invocation {
    Invocation::new("git", ["commit", "-m", message])
}

pub fn push() -> Invocation {
    Invocation::new("git", ["push"])
}

/// Attach a hint to a failed clone when git reports an authentication problem.
pub fn with_clone_hint(error: Error) -> Error {
    match error {
        Error::Command {
            command,
            dir,
            code,
            stderr,
            hint: None,
        } if is_auth_failure(&stderr) => Error::Command {
            command,
            dir,
            code,
            stderr,
            hint: Some(
                "Make sure you have access to the repository. For private repos, ensure you have \
                 an SSH key added to ssh-agent (ssh mode) or git credentials / a personal access \
                 token configured (https mode)"
                    .to_string(),
            ),
        },
        other => other,
    }
}

fn is_auth_failure(stderr: &str) -> bool {
    stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_error(stderr: &str) -> Error {
        Error::Command {
            command: "git clone x y".to_string(),
            dir: ".".to_string(),
            code: Some(128),
            stderr: stderr.to_string(),
            hint: None,
        }
    }

    #[test]
    fn test_clone_invocation() {
        let inv = clone("git@github.com:alice/foo.git", &Path::new("./work").join("foo"));
        assert_eq!(inv.program, "git");
        assert_eq!(
            inv.args,
            vec!["clone", "git@github.com:alice/foo.git", "./work/foo"]
        );
    }

    #[test]
    fn test_publish_invocations() {
        assert_eq!(add_all().to_string(), "git add --all");
        assert_eq!(
            commit("ci: Added Github Folder").args,
            vec!["commit", "-m", "ci: Added Github Folder"]
        );
        assert_eq!(push().to_string(), "git push");
    }

    #[test]
    fn test_clone_hint_on_auth_failure() {
        let err = with_clone_hint(command_error(
            "git@github.com: Permission denied (publickey).\nfatal: Could not read from remote repository.",
        ));
        match err {
            Error::Command { hint, .. } => assert!(hint.unwrap().contains("ssh-agent")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_clone_hint_for_other_failures() {
        let err = with_clone_hint(command_error(
            "fatal: destination path 'foo' already exists and is not an empty directory.",
        ));
        match err {
            Error::Command { hint, .. } => assert!(hint.is_none()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_clone_hint_leaves_spawn_errors_alone() {
        let err = with_clone_hint(Error::Spawn {
            command: "git clone".to_string(),
            message: "No such file or directory".to_string(),
        });
        assert!(matches!(err, Error::Spawn { .. }));
    }
}
