use topup_report_shared_kernel::{
    DomainResult, RecordKey, TokenAmount,
    coerce::{display_text, truthy},
};

use super::{Record, field};

/// A company read from `companies.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: RecordKey,
    pub name: String,
    /// Credit granted to active users who are not emailed.
    pub top_up: TokenAmount,
    /// Whether the company may send email at all.
    pub email_status: bool,
}

impl Company {
    /// Build a company from a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`](topup_report_shared_kernel::DomainError::MissingField)
    /// when a required key is absent.
    pub fn from_record(record: &Record) -> DomainResult<Self> {
        Ok(Self {
            id: RecordKey::from_value(field(record, "id")?),
            name: display_text(field(record, "name")?).into_owned(),
            top_up: TokenAmount::from_value(field(record, "top_up")?),
            email_status: truthy(field(record, "email_status")?),
        })
    }
}
