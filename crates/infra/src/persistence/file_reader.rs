use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use topup_report_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`. A missing file maps to
    /// [`InfrastructureError::FileNotFound`].
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|err| InfrastructureError::from_read(path, err))
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let mut reader = Self::open_buffered(path)?;
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|err| InfrastructureError::from_read(path, err))?;
        Ok(buf)
    }
}
