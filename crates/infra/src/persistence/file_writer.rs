use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use topup_report_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` behind a buffered writer.
    pub fn create(path: &Path) -> InfraResult<BufWriter<File>> {
        File::create(path)
            .map(BufWriter::new)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }

    /// Stream content into `path` through `fill`, then flush.
    /// Whatever `fill` wrote before failing may remain on disk.
    pub fn write_with<F>(path: &Path, fill: F) -> InfraResult<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let mut writer = Self::create(path)?;
        fill(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
    }
}
