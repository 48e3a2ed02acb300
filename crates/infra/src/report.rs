pub mod sinks;
pub mod text;

pub use sinks::{FileReportSink, StdoutReportSink};
pub use text::write_report;
