//! CLI end-to-end tests that invoke the compiled `pods` binary.
//!
//! Every command runs with `CP_REPOS_DIR` pointing into the fixture so the
//! real user settings file is never read.

use assert_cmd::Command;
use pods_test_utils::TestProject;
use predicates::prelude::*;
use std::path::Path;

/// Build a `pods` command isolated to `project`, running in `dir`.
fn pods(project: &TestProject, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pods").unwrap();
    cmd.current_dir(dir)
        .env("CP_REPOS_DIR", project.repos_dir())
        .env("NO_COLOR", "1")
        .env_remove("CP_AGGRESSIVE_CACHE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_command_shows_hint() {
    let project = TestProject::new();

    pods(&project, &project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("pods --help"));
}

#[test]
fn test_config_json_reports_defaults() {
    let project = TestProject::new();
    project.write_podfile("pod 'JSONKit'\n");

    let output = pods(&project, &project.root())
        .args(["config", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["clean"], true);
    assert_eq!(report["verbose"], false);
    assert_eq!(report["aggressive_cache"], true);
    assert_eq!(report["repos_dir"], project.repos_dir().display().to_string());
    assert_eq!(
        report["manifest_path"],
        project.root().join("Podfile").display().to_string()
    );
}

#[test]
fn test_aggressive_cache_variable() {
    let project = TestProject::new();

    let output = pods(&project, &project.root())
        .env("CP_AGGRESSIVE_CACHE", "FALSE")
        .args(["config", "--json"])
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["aggressive_cache"], false);
}

#[test]
fn test_silent_flag_masks_verbose_setting() {
    let project = TestProject::new();
    project.write_settings("verbose: true\n");

    let output = pods(&project, &project.root())
        .args(["--silent", "config", "--json"])
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["verbose"], false);
    assert_eq!(report["silent"], true);
}

#[test]
fn test_verbose_setting_enables_debug_logging() {
    let project = TestProject::new();
    project.write_settings("verbose: true\n");

    pods(&project, &project.root())
        .arg("paths")
        .assert()
        .success()
        .stderr(predicate::str::contains("Verbose mode enabled"));
}

#[test]
fn test_silent_flag_keeps_debug_logging_off() {
    let project = TestProject::new();
    project.write_settings("verbose: true\n");

    pods(&project, &project.root())
        .args(["--silent", "paths"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Verbose mode enabled").not());
}

#[test]
fn test_config_warns_about_ignored_settings() {
    let project = TestProject::new();
    project.write_settings("colour: blue\n");

    pods(&project, &project.root())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("ignored settings: colour"));
}

#[test]
fn test_malformed_settings_fail() {
    let project = TestProject::new();
    project.write_settings("verbose: [true\n");

    pods(&project, &project.root())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings"));
}

#[test]
fn test_paths_from_subdirectory_prints_notice() {
    let project = TestProject::new();
    project.write_podfile("pod 'JSONKit'\n");
    let nested = project.mkdir("App/Sources");
    let root = project.root().display().to_string();

    pods(&project, &nested)
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[in {root}]")))
        .stdout(predicate::str::contains(format!("lockfile: {root}/Podfile.lock")))
        .stdout(predicate::str::contains(format!("sandbox: {root}/Pods")));
}

#[test]
fn test_paths_silent_suppresses_notice() {
    let project = TestProject::new();
    project.write_podfile("");
    let nested = project.mkdir("App");

    pods(&project, &nested)
        .args(["--silent", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[in ").not());
}

#[test]
fn test_lockfile_lists_pods() {
    let project = TestProject::new();
    project.write_podfile("pod 'JSONKit'\n");
    project.write_lockfile("PODS:\n  - JSONKit (1.4)\nCOCOAPODS: 0.16.0\n");

    pods(&project, &project.root())
        .arg("lockfile")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSONKit 1.4"))
        .stdout(predicate::str::contains("written by 0.16.0"));
}

#[test]
fn test_lockfile_missing() {
    let project = TestProject::new();
    project.write_podfile("pod 'JSONKit'\n");

    pods(&project, &project.root())
        .arg("lockfile")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lockfile"));
}
