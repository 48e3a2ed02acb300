//! Required-field schemas for input records.
//!
//! Only key presence is checked; `null` and `false` values still count as
//! present. Records failing a schema are dropped without any diagnostic.

use crate::model::Record;

pub const COMPANY_FIELDS: &[&str] = &["id", "name", "top_up", "email_status"];

pub const USER_FIELDS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "email",
    "company_id",
    "email_status",
    "active_status",
    "tokens",
];

/// 必須キーの集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    required: &'static [&'static str],
}

impl RecordSchema {
    pub const COMPANY: Self = Self { required: COMPANY_FIELDS };
    pub const USER: Self = Self { required: USER_FIELDS };

    /// First required key absent from `record`, in schema order.
    pub fn missing_field(&self, record: &Record) -> Option<&'static str> {
        self.required.iter().copied().find(|key| !record.contains_key(*key))
    }

    pub fn accepts(&self, record: &Record) -> bool {
        self.missing_field(record).is_none()
    }
}

pub fn valid_company(record: &Record) -> bool {
    RecordSchema::COMPANY.accepts(record)
}

pub fn valid_user(record: &Record) -> bool {
    RecordSchema::USER.accepts(record)
}
