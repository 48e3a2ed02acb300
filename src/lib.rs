#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod bootstrap;
pub mod logging;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
