#![allow(clippy::multiple_crate_versions)]

pub mod loader;
pub mod notifier;
pub mod persistence;
pub mod report;

pub use loader::JsonFileLoader;
pub use notifier::ConsoleNotifier;
pub use report::{FileReportSink, StdoutReportSink};
