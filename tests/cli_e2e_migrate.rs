//! End-to-end tests for the `migrate` command
//!
//! These tests invoke the actual CLI binary. Clones point at a remote that
//! does not exist, so they fail whether or not `git` is installed, which is
//! exactly what the per-repository failure boundary has to absorb.

mod common;
use common::prelude::*;

#[test]
fn test_migrate_help() {
    let mut cmd = cargo_bin_cmd!("github-workflow-migrator");

    cmd.arg("migrate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Clone each repository, overlay the .github folder",
        ))
        .stdout(predicate::str::contains("--repositories"))
        .stdout(predicate::str::contains("--custom-url"))
        .stdout(predicate::str::contains("--no-commit"));
}

#[test]
fn test_migrate_without_any_source_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No config file or CLI options found"));
}

#[test]
fn test_migrate_invalid_mode_fails_before_cloning() {
    let fixture = TestFixture::new();

    fixture
        .failing_migrate("r1")
        .arg("--github-mode")
        .arg("ftp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mode 'ftp'"))
        .stdout(predicate::str::contains("git clone").not());

    assert!(!fixture.work_path().exists());
}

#[test]
fn test_migrate_empty_repositories_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["migrate", "--repositories", " , "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No repositories found"));
}

#[test]
fn test_migrate_continues_after_clone_failure() {
    let fixture = TestFixture::new().with_overlay();

    fixture
        .failing_migrate("r1,r2")
        .arg("--safe-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("r1: clone step failed"))
        .stdout(predicate::str::contains("r2: clone step failed"))
        .stdout(predicate::str::contains(
            "Processed 2 repositories: 0 succeeded, 2 failed",
        ));
}

#[test]
fn test_migrate_logs_each_command() {
    let fixture = TestFixture::new().with_overlay();

    fixture
        .failing_migrate("r1")
        .arg("--safe-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(">> git clone"))
        .stdout(predicate::str::contains("missing-remote/r1.git"))
        .stdout(predicate::str::contains("Safe run enabled"))
        .stdout(predicate::str::contains("Run again without safe run"));
}

#[test]
fn test_migrate_quiet_only_reports_failures() {
    let fixture = TestFixture::new().with_overlay();

    fixture
        .failing_migrate("r1")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains(">> git clone").not())
        .stdout(predicate::str::contains("Processed").not())
        .stdout(predicate::str::contains("r1: clone step failed"));
}

#[test]
fn test_migrate_from_config_file() {
    let fixture = TestFixture::new().with_overlay().with_config(
        r#"{
  "github": { "user": "bob", "mode": "https" },
  "options": { "safeRun": true },
  "repositories": ["only-repo"],
  "customUrl": "nowhere/{{repo}}.git",
  "folder": "work",
  "sourcePath": "overlay/.github"
}"#,
    );

    fixture
        .command()
        .arg("migrate")
        .arg("--config")
        .arg(fixture.config_path())
        .arg("--repositories")
        .arg("ignored-flag-repo")
        .assert()
        .success()
        .stdout(predicate::str::contains("only-repo: clone step failed"))
        .stdout(predicate::str::contains("ignored-flag-repo").not());
}

#[test]
fn test_migrate_invalid_config_file() {
    let fixture = TestFixture::new().with_config(configs::INVALID_JSON);

    fixture
        .command()
        .arg("migrate")
        .arg("--config")
        .arg(fixture.config_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load config file"));
}

#[test]
fn test_migrate_warns_about_missing_overlay() {
    let fixture = TestFixture::new();

    fixture
        .failing_migrate("r1")
        .arg("--safe-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("every overlay step will fail"));
}
