/// How a report run ended. None of these is a process failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The report was emitted for this many companies.
    Written { companies: usize },
    /// One of the inputs had no valid records, so nothing was emitted.
    Skipped,
    /// Rendering succeeded but the sink rejected the report.
    WriteFailed,
}

impl RunOutcome {
    pub const fn is_written(self) -> bool {
        matches!(self, Self::Written { .. })
    }
}
