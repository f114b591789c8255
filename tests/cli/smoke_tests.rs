use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn lowerlines() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lowerlines"))
}

#[test]
fn shows_help() {
    lowerlines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lowerlines"))
        .stdout(predicate::str::contains("--no-done"));
}

#[test]
fn processes_single_file() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("input.txt", "Hello World\n  Foo \n");

    lowerlines()
        .arg(&file)
        .assert()
        .success()
        .stdout(format!("Processing {}...\nhello world\nfoo\n", file.display()))
        .stderr("Done.\n");
}

#[test]
fn missing_file_exits_with_one() {
    let ws = TempWorkspace::new();

    lowerlines()
        .current_dir(ws.path())
        .arg("missing.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: missing.txt does not exist.\n");
}

#[test]
fn directory_is_reported_as_missing() {
    let ws = TempWorkspace::new();
    let dir = ws.path().join("sub");
    std::fs::create_dir(&dir).unwrap();

    lowerlines()
        .arg(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(format!("Error: {} does not exist.\n", dir.display()));
}

#[test]
fn missing_argument_is_a_usage_error() {
    lowerlines()
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_utf8_fails_after_valid_prefix() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("bad.txt", b"GOOD line\n\xc3\x28\nnever\n");

    lowerlines()
        .arg(&file)
        .assert()
        .code(1)
        .stdout(format!("Processing {}...\ngood line\n", file.display()))
        .stderr(predicate::str::starts_with("Error: failed to read"))
        .stderr(predicate::str::contains("Done.").not());
}

#[test]
fn no_done_flag_silences_stderr() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("input.txt", "ABC\n");

    lowerlines()
        .args(["--no-done"])
        .arg(&file)
        .assert()
        .success()
        .stdout(format!("Processing {}...\nabc\n", file.display()))
        .stderr(predicate::str::is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let ws = TempWorkspace::new();
    let file = ws.create_file("input.txt", "  MiXeD Case\t\n\nTail");

    let first = lowerlines().arg(&file).output().unwrap();
    let second = lowerlines().arg(&file).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        String::from_utf8(first.stdout).unwrap(),
        format!("Processing {}...\nmixed case\n\ntail\n", file.display())
    );
}
