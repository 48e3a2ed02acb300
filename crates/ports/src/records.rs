// crates/ports/src/records.rs
use std::path::Path;

use topup_report_domain::model::Record;
use topup_report_shared_kernel::Result;

/// Filter deciding which decoded records are kept.
pub type RecordPredicate<'a> = &'a dyn Fn(&Record) -> bool;

/// Port for reading a file of records.
pub trait RecordSource {
    /// Decode every record in `path` and keep those accepted by `predicate`.
    /// Rejected records are dropped without being reported.
    fn load(&self, path: &Path, predicate: RecordPredicate<'_>) -> Result<Vec<Record>>;
}
