//! End-to-end tests for the `clone-cache` CLI.
//!
//! Exit code conventions:
//!
//! - Exit code 0: Success
//! - Exit code 1: General error (unreadable base directory, empty
//!   argument values)
//! - Exit code 2: Invalid command-line usage (handled by clap)
//!
//! Scenarios that need a `git` binary skip themselves when none is on
//! PATH.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn clone_cache() -> Command {
    Command::cargo_bin("clone-cache").unwrap()
}

fn git_available() -> bool {
    StdCommand::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git_in(dir: &Path, args: &[&str]) {
    let out = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(out.status.success(), "git {:?} failed", args);
}

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    clone_cache().arg("--help").assert().code(0);
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    clone_cache().arg("--version").assert().code(0);
}

/// Exit code 2 is returned when required arguments are missing.
#[test]
fn test_exit_code_usage_missing_args() {
    clone_cache()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--basedir"));

    clone_cache()
        .args(["--basedir", "/tmp"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--cache"));
}

/// Exit code 2 is returned for unknown flags (handled by clap).
#[test]
fn test_exit_code_usage_unknown_flag() {
    clone_cache()
        .arg("--unknown-flag-that-does-not-exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

/// Explicitly empty argument values are usage errors with no side
/// effects.
#[test]
fn test_empty_argument_values() {
    let temp = assert_fs::TempDir::new().unwrap();
    let cache = temp.child("cache");

    clone_cache()
        .args(["--basedir", "", "--cache"])
        .arg(cache.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("search directory"));

    cache.assert(predicate::path::missing());

    clone_cache()
        .args(["--basedir", "/tmp", "--cache", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cache directory"));
}

/// A nonexistent base directory aborts the run with exit code 1.
#[test]
fn test_missing_base_directory() {
    let temp = assert_fs::TempDir::new().unwrap();

    clone_cache()
        .args(["--basedir", "/nonexistent/base/for/e2e", "--cache"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Scan error"));
}

/// A base directory without repositories succeeds and prints nothing.
#[test]
fn test_no_repositories() {
    let base = assert_fs::TempDir::new().unwrap();
    base.child("plain/src").create_dir_all().unwrap();
    let cache = assert_fs::TempDir::new().unwrap();

    clone_cache()
        .arg("--basedir")
        .arg(base.path())
        .arg("--cache")
        .arg(cache.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

/// Full scenario: `foo` has a remote and gets a ConfigBlock, `bar` has
/// none and does not; both metadata trees land in the cache.
#[test]
fn test_end_to_end_two_repositories() {
    if !git_available() {
        return;
    }
    let base = assert_fs::TempDir::new().unwrap();
    let cache = assert_fs::TempDir::new().unwrap();

    let foo = base.child("foo");
    foo.create_dir_all().unwrap();
    git_in(foo.path(), &["init", "--quiet"]);
    git_in(foo.path(), &["remote", "add", "origin", "git@host:org/foo.git"]);

    let bar = base.child("bar");
    bar.create_dir_all().unwrap();
    git_in(bar.path(), &["init", "--quiet"]);

    let assert = clone_cache()
        .arg("--basedir")
        .arg(base.path())
        .arg("--cache")
        .arg(cache.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("insteadOf = git@host:org/foo.git"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("/foo/\"]"));
    assert!(!stdout.contains("/bar/"));

    cache.child("foo/.git/HEAD").assert(predicate::path::exists());
    cache.child("bar/.git/HEAD").assert(predicate::path::exists());
}

/// Fetch and push listings of the same remote collapse to one
/// insteadOf line.
#[test]
fn test_remote_urls_deduplicated() {
    if !git_available() {
        return;
    }
    let base = assert_fs::TempDir::new().unwrap();
    let cache = assert_fs::TempDir::new().unwrap();

    let repo = base.child("proj");
    repo.create_dir_all().unwrap();
    git_in(repo.path(), &["init", "--quiet"]);
    git_in(
        repo.path(),
        &["remote", "add", "origin", "git@host:org/proj.git"],
    );

    let assert = clone_cache()
        .arg("--basedir")
        .arg(base.path())
        .arg("--cache")
        .arg(cache.path())
        .assert()
        .code(0);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("insteadOf = git@host:org/proj.git").count(), 1);
}
