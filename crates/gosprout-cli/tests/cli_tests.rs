//! End-to-end tests of the `gosprout` binary.
//!
//! `go` and `git` are replaced with `true`/`false` through the `tools.*`
//! configuration, so these only run on Unix.
#![cfg(unix)]

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

fn gosprout(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("gosprout");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("GOSPROUT_TOOLS__GO", "true")
        .env("GOSPROUT_TOOLS__GIT", "true")
        .env_remove("RUST_LOG")
        .env_remove("GOSPROUT_LOG")
        .env_remove("GOSPROUT_DEFAULTS__ON_WARNING")
        .env_remove("GOSPROUT_DEFAULTS__REMOTE_NAME");
    cmd
}

#[test]
fn contradictory_flags_fail_before_touching_anything() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .args(["demo", "--do-git", "--no-do-gitignore"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("conflicting options"))
        .stderr(predicate::str::contains("--no-do-gitignore"))
        .stderr(predicate::str::contains("Usage:"));

    assert!(!tmp.path().join("demo").exists());
}

#[test]
fn remote_name_with_interactive_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("demo")).unwrap();

    gosprout(tmp.path())
        .args(["demo", "--remote-name=origin"])
        // module url, main.go, Makefile, executable name, gitignore, remote url
        .write_stdin("example.com/demo\ny\ny\ndemo\ny\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to add a gitignore? (Y/N) "))
        .stdout(predicate::str::contains("remote add origin example.com/demo"))
        .stdout(predicate::str::contains("Do you want to make a git repository").not());

    let root = tmp.path().join("demo");
    let main = fs::read_to_string(root.join("main.go")).unwrap();
    assert!(main.contains("package main"));
    let makefile = fs::read_to_string(root.join("Makefile")).unwrap();
    assert!(makefile.contains("OUTPUT_EXE := demo\n"));
    let ignore = fs::read_to_string(root.join(".gitignore")).unwrap();
    assert!(ignore.contains("/demo\n/demo.exe\n"));
}

#[test]
fn stop_policy_leaves_dirty_directory_alone() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep me\n").unwrap();

    gosprout(tmp.path())
        .args(["demo", "--module-url", "example.com/demo", "--on-warning", "stop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Y/N)").not())
        .stdout(predicate::str::contains("$").not());

    let entries: Vec<_> = fs::read_dir(&root).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn no_color_convention_is_honoured() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .env("NO_COLOR", "1")
        .args(["demo", "--module-url", "example.com/demo", "--no-do-main-go"])
        .args(["--no-do-makefile", "--no-do-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not())
        .stderr(predicate::str::contains("--no-color").not());

    assert!(tmp.path().join("demo").is_dir());
}

#[test]
fn unknown_warning_policy_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .args(["--on-warning", "sometimes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sometimes"));
}

#[test]
fn end_of_input_cancels_quietly() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter project directory name: "))
        .stderr(predicate::str::contains("Error").not());

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn failing_module_init_exits_with_failure() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .env("GOSPROUT_TOOLS__GO", "false")
        .args(["demo", "--module-url", "example.com/demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("`false mod init example.com/demo` failed"));

    assert!(tmp.path().join("demo").is_dir());
}

#[test]
fn failing_git_init_is_reported_and_not_fatal() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .env("GOSPROUT_TOOLS__GIT", "false")
        .args([
            "demo",
            "--module-url",
            "example.com/demo",
            "--no-do-main-go",
            "--no-do-makefile",
            "--do-git",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: `false init` failed"))
        .stdout(predicate::str::contains("gitignore").not());
}

#[test]
fn executable_suffix_is_stripped() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .args([
            "demo",
            "--module-url",
            "example.com/demo",
            "--executable-name",
            "hello.exe",
            "--no-do-main-go",
            "--do-makefile",
            "--no-do-git",
        ])
        .assert()
        .success();

    let makefile = fs::read_to_string(tmp.path().join("demo/Makefile")).unwrap();
    assert!(makefile.contains("OUTPUT_EXE := hello\n"));
    assert!(!tmp.path().join("demo/main.go").exists());
}

#[test]
fn invalid_configuration_exits_with_config_code() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .env("GOSPROUT_DEFAULTS__ON_WARNING", "sometimes")
        .arg("demo")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!tmp.path().join("demo").exists());
}

#[test]
fn help_lists_paired_switches() {
    let tmp = TempDir::new().unwrap();

    gosprout(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--do-gitignore"))
        .stdout(predicate::str::contains("--no-do-gitignore"))
        .stdout(predicate::str::contains("--on-warning"));
}
