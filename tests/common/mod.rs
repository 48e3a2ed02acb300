// tests/common/mod.rs
#![allow(dead_code)]

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Value, json};
use tempfile::TempDir;
use topup_report_domain::config::ReportPaths;
use topup_report_ports::Notifier;

/// A scratch directory holding `companies.json`, `users.json` and the report.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("create tempdir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> ReportPaths {
        ReportPaths::in_dir(self.dir.path())
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write_raw(name, &value.to_string())
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn with_acme(self) -> Self {
        self.write_json("companies.json", &acme_companies());
        self.write_json("users.json", &acme_users());
        self
    }

    pub fn output(&self) -> Option<String> {
        fs::read_to_string(self.paths().output).ok()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub warnings: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

pub fn acme_companies() -> Value {
    json!([{ "id": 1, "name": "Acme", "top_up": 10, "email_status": true }])
}

pub fn acme_users() -> Value {
    json!([
        { "id": 1, "first_name": "A", "last_name": "Smith", "email": "a@x", "company_id": 1,
          "email_status": true, "active_status": true, "tokens": 5 },
        { "id": 2, "first_name": "B", "last_name": "Jones", "email": "b@x", "company_id": 1,
          "email_status": false, "active_status": true, "tokens": 20 }
    ])
}

pub const ACME_REPORT: &str = concat!(
    "    Company Id: 1\n",
    "    Company Name: Acme\n",
    "    Users Emailed:\n",
    "        Smith, A, a@x\n",
    "          Previous Token Balance: 5\n",
    "          New Token Balance: 5\n",
    "    Users Not Emailed:\n",
    "        Jones, B, b@x\n",
    "          Previous Token Balance: 20\n",
    "          New Token Balance: 30\n",
    "        Total Top Ups for Acme: 10\n",
);
