use std::path::Path;

use log::{debug, info};
use topup_report_domain::{
    analytics::Aggregator,
    config::ReportPaths,
    model::{Company, Record, User},
    validation::{valid_company, valid_user},
};
use topup_report_ports::{Notifier, RecordPredicate, RecordSource, ReportSink};
use topup_report_shared_kernel::ErrorContext;

use crate::dto::RunOutcome;

/// Loads both datasets, aggregates them and hands the result to the sink.
///
/// File-level failures become a warning on the notifier and never escape
/// [`GenerateReport::run`].
pub struct GenerateReport<'a> {
    source: &'a dyn RecordSource,
    sink: &'a dyn ReportSink,
    notifier: &'a dyn Notifier,
}

impl<'a> GenerateReport<'a> {
    pub fn new(source: &'a dyn RecordSource, sink: &'a dyn ReportSink, notifier: &'a dyn Notifier) -> Self {
        Self { source, sink, notifier }
    }

    pub fn run(&self, paths: &ReportPaths) -> RunOutcome {
        let companies: Vec<Company> = self
            .load(&paths.companies, &valid_company)
            .iter()
            .filter_map(|record| Company::from_record(record).ok())
            .collect();
        let users: Vec<User> = self
            .load(&paths.users, &valid_user)
            .iter()
            .filter_map(|record| User::from_record(record).ok())
            .collect();

        debug!("loaded {} companies and {} users", companies.len(), users.len());

        let Some(report) = Aggregator::aggregate(companies, users) else {
            debug!("nothing to report");
            return RunOutcome::Skipped;
        };

        let written = self
            .sink
            .write_report(&report)
            .with_context(|| format!("Failed to write report to {}", self.sink.target()));

        match written {
            Ok(()) => {
                info!("report for {} companies written to {}", report.len(), self.sink.target());
                RunOutcome::Written { companies: report.len() }
            }
            Err(err) => {
                self.notifier.warn(&err.to_string());
                RunOutcome::WriteFailed
            }
        }
    }

    fn load(&self, path: &Path, predicate: RecordPredicate<'_>) -> Vec<Record> {
        match self.source.load(path, predicate) {
            Ok(records) => records,
            Err(err) => {
                self.notifier.warn(&err.to_string());
                Vec::new()
            }
        }
    }
}
