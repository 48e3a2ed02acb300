// tests/integration/end_to_end.rs
use serde_json::json;
use topup_report::bootstrap;
use topup_report_infra::FileReportSink;
use topup_report_usecase::RunOutcome;

use crate::common::{ACME_REPORT, RecordingNotifier, Workspace};

fn run(ws: &Workspace) -> (RunOutcome, Vec<String>) {
    let paths = ws.paths();
    let notifier = RecordingNotifier::default();
    let outcome = bootstrap::run_with(&paths, &FileReportSink::new(&paths.output), &notifier);
    (outcome, notifier.warnings.into_inner())
}

#[test]
fn acme_scenario_produces_expected_report() {
    let ws = Workspace::new().with_acme();

    let (outcome, warnings) = run(&ws);

    assert_eq!(outcome, RunOutcome::Written { companies: 1 });
    assert!(warnings.is_empty());
    assert_eq!(ws.output().unwrap(), ACME_REPORT);
}

#[test]
fn rerun_is_byte_identical() {
    let ws = Workspace::new().with_acme();

    run(&ws);
    let first = ws.output().unwrap();
    run(&ws);
    let second = ws.output().unwrap();

    assert_eq!(first, second);
}

#[test]
fn invalid_and_orphan_users_vanish_without_diagnostics() {
    let ws = Workspace::new();
    ws.write_json("companies.json", &crate::common::acme_companies());
    ws.write_json(
        "users.json",
        &json!([
            { "id": 1, "first_name": "A", "last_name": "Smith", "email": "a@x", "company_id": 1,
              "email_status": true, "active_status": true, "tokens": 5 },
            { "id": 2, "first_name": "B", "last_name": "Jones", "email": "b@x", "company_id": 1,
              "email_status": false, "active_status": true, "tokens": 20 },
            { "id": 3, "first_name": "N", "last_name": "Nomail", "company_id": 1,
              "email_status": false, "active_status": true, "tokens": 1 },
            { "id": 4, "first_name": "O", "last_name": "Orphan", "email": "o@x", "company_id": 77,
              "email_status": false, "active_status": true, "tokens": 1 }
        ]),
    );

    let (outcome, warnings) = run(&ws);

    assert!(outcome.is_written());
    assert!(warnings.is_empty());
    let report = ws.output().unwrap();
    assert_eq!(report, ACME_REPORT);
    assert!(!report.contains("Nomail"));
    assert!(!report.contains("Orphan"));
}

#[test]
fn missing_companies_file_warns_and_writes_nothing() {
    let ws = Workspace::new();
    ws.write_json("users.json", &crate::common::acme_users());

    let (outcome, warnings) = run(&ws);

    assert_eq!(outcome, RunOutcome::Skipped);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("companies.json"));
    assert!(ws.output().is_none());
}

#[test]
fn malformed_users_file_warns_and_writes_nothing() {
    let ws = Workspace::new();
    ws.write_json("companies.json", &crate::common::acme_companies());
    ws.write_raw("users.json", "[{\"id\": 1, oops");

    let (outcome, warnings) = run(&ws);

    assert_eq!(outcome, RunOutcome::Skipped);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("users.json"));
    assert!(ws.output().is_none());
}

#[test]
fn empty_users_array_short_circuits_silently() {
    let ws = Workspace::new();
    ws.write_json("companies.json", &crate::common::acme_companies());
    ws.write_json("users.json", &json!([]));

    let (outcome, warnings) = run(&ws);

    assert_eq!(outcome, RunOutcome::Skipped);
    assert!(warnings.is_empty());
    assert!(ws.output().is_none());
}

#[test]
fn unwritable_output_is_reported() {
    let ws = Workspace::new().with_acme();
    let mut paths = ws.paths();
    paths.output = ws.path().join("no-such-dir").join("output.txt");
    let notifier = RecordingNotifier::default();

    let outcome = bootstrap::run_with(&paths, &FileReportSink::new(&paths.output), &notifier);

    assert_eq!(outcome, RunOutcome::WriteFailed);
    let warnings = notifier.warnings.borrow();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("output.txt"));
}

#[test]
fn companies_are_ordered_numerically_with_string_ids() {
    let ws = Workspace::new();
    ws.write_json(
        "companies.json",
        &json!([
            { "id": "10", "name": "Ten", "top_up": 1, "email_status": true },
            { "id": "9", "name": "Nine", "top_up": 1, "email_status": true }
        ]),
    );
    ws.write_json(
        "users.json",
        &json!([
            { "id": 1, "first_name": "U", "last_name": "User", "email": "u@x", "company_id": 10,
              "email_status": true, "active_status": true, "tokens": 0 }
        ]),
    );

    run(&ws);
    let report = ws.output().unwrap();

    let nine = report.find("Company Name: Nine").unwrap();
    let ten = report.find("Company Name: Ten").unwrap();
    assert!(nine < ten);
    assert!(report.contains("    Company Id: 10\n    Company Name: Ten\n    Users Emailed:\n        User, U, u@x\n"));
}
