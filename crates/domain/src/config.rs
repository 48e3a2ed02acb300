use std::path::{Path, PathBuf};

pub const DEFAULT_COMPANIES_FILE: &str = "companies.json";
pub const DEFAULT_USERS_FILE: &str = "users.json";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Locations of the two inputs and the report artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub companies: PathBuf,
    pub users: PathBuf,
    pub output: PathBuf,
}

impl ReportPaths {
    pub fn new(companies: impl Into<PathBuf>, users: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { companies: companies.into(), users: users.into(), output: output.into() }
    }

    /// Default file names resolved inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(DEFAULT_COMPANIES_FILE),
            dir.join(DEFAULT_USERS_FILE),
            dir.join(DEFAULT_OUTPUT_FILE),
        )
    }
}

impl Default for ReportPaths {
    /// Fixed names relative to the working directory.
    fn default() -> Self {
        Self::new(DEFAULT_COMPANIES_FILE, DEFAULT_USERS_FILE, DEFAULT_OUTPUT_FILE)
    }
}
