use std::{
    io::{self, Write},
    path::PathBuf,
};

use topup_report_domain::model::EnrichedCompany;
use topup_report_ports::ReportSink;
use topup_report_shared_kernel::{InfrastructureError, Result};

use super::text::write_report;
use crate::persistence::FileWriter;

/// Writes the text report to a file, replacing any previous content.
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileReportSink {
    fn write_report(&self, companies: &[EnrichedCompany]) -> Result<()> {
        FileWriter::write_with(&self.path, |out| write_report(out, companies))?;
        Ok(())
    }

    fn target(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes the text report to standard output.
pub struct StdoutReportSink;

impl ReportSink for StdoutReportSink {
    fn write_report(&self, companies: &[EnrichedCompany]) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, companies)
            .and_then(|()| out.flush())
            .map_err(|err| InfrastructureError::OutputError {
                message: format!("stdout: {err}"),
                source: Some(Box::new(err)),
            })?;
        Ok(())
    }

    fn target(&self) -> String {
        "<stdout>".to_string()
    }
}
