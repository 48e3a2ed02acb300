// crates/ports/src/report.rs
use topup_report_domain::model::EnrichedCompany;
use topup_report_shared_kernel::Result;

/// Port receiving the aggregated companies, in report order.
pub trait ReportSink {
    fn write_report(&self, companies: &[EnrichedCompany]) -> Result<()>;

    /// Where the report goes, for log lines.
    fn target(&self) -> String;
}
