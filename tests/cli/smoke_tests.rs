use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{ACME_REPORT, Workspace};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_topup_report"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--companies"));
}

#[test]
fn default_paths_are_relative_to_working_directory() {
    let ws = Workspace::new().with_acme();

    bin().current_dir(ws.path()).assert().success().stderr(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(ws.path().join("output.txt")).unwrap(), ACME_REPORT);
}

#[test]
fn missing_input_prints_diagnostic_and_still_succeeds() {
    let ws = Workspace::new();
    ws.write_json("users.json", &crate::common::acme_users());

    bin()
        .current_dir(ws.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[warn]").and(predicate::str::contains("companies.json")));

    assert!(!ws.path().join("output.txt").exists());
}

#[test]
fn stdout_flag_prints_report() {
    let ws = Workspace::new().with_acme();

    bin()
        .current_dir(ws.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(ACME_REPORT);

    assert!(!ws.path().join("output.txt").exists());
}

#[test]
fn explicit_paths_are_honoured() {
    let ws = Workspace::new();
    let companies = ws.write_json("acme-companies.json", &crate::common::acme_companies());
    let users = ws.write_json("acme-users.json", &crate::common::acme_users());
    let output = ws.path().join("report.txt");

    bin()
        .arg("--companies")
        .arg(&companies)
        .arg("--users")
        .arg(&users)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(output).unwrap(), ACME_REPORT);
}
