// crates/infra/src/loader.rs
use std::path::Path;

use log::debug;
use serde_json::Value;
use topup_report_domain::model::Record;
use topup_report_ports::{RecordPredicate, RecordSource};
use topup_report_shared_kernel::{InfraResult, InfrastructureError, Result};

use crate::persistence::FileReader;

/// Reads a JSON array of objects from disk.
pub struct JsonFileLoader;

impl RecordSource for JsonFileLoader {
    fn load(&self, path: &Path, predicate: RecordPredicate<'_>) -> Result<Vec<Record>> {
        Ok(load_records(path, predicate)?)
    }
}

/// Decode `path` and keep the objects accepted by `predicate`.
///
/// Array elements that are not objects are treated like records failing the
/// predicate and skipped.
pub fn load_records(path: &Path, predicate: RecordPredicate<'_>) -> InfraResult<Vec<Record>> {
    let bytes = FileReader::read_to_end(path)?;
    let records = parse_records(path, &bytes)?
        .into_iter()
        .filter(|record| predicate(record))
        .collect::<Vec<_>>();
    debug!("kept {} records from {}", records.len(), path.display());
    Ok(records)
}

fn parse_records(path: &Path, bytes: &[u8]) -> InfraResult<Vec<Record>> {
    let value: Value = serde_json::from_slice(bytes).map_err(|err| InfrastructureError::MalformedJson {
        path: path.to_path_buf(),
        details: err.to_string(),
    })?;

    let Value::Array(items) = value else {
        return Err(InfrastructureError::NotAnArray { path: path.to_path_buf() });
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(record) => Some(record),
            _ => None,
        })
        .collect())
}
