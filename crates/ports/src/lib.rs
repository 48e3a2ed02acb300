//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`records`]: Loading raw records from an input file
//! - [`report`]: Emitting the rendered report
//! - [`notifier`]: User-facing diagnostics
//!
//! The use case layer depends only on these traits, so tests can swap in
//! in-memory implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod notifier;
pub mod records;
pub mod report;

pub use notifier::Notifier;
pub use records::{RecordPredicate, RecordSource};
pub use report::ReportSink;
