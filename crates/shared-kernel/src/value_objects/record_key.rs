use std::{cmp::Ordering, fmt};

use serde_json::Value;

use crate::coerce::{display_text, loose_int};

/// Identifier taken from an untyped record field.
///
/// Equality, hashing and ordering all go through the loose numeric value,
/// so a company `id` of `"01"` or `1.0` and a user `company_id` of `1`
/// refer to the same company. Keys without a numeric value compare by
/// their text, never equal any numeric key, and sort after all of them.
#[derive(Debug, Clone)]
pub struct RecordKey {
    text: String,
    numeric: Option<i64>,
}

impl RecordKey {
    pub fn from_value(value: &Value) -> Self {
        Self { text: display_text(value).into_owned(), numeric: loose_int(value) }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub const fn numeric(&self) -> Option<i64> {
        self.numeric
    }

    /// Sort order by loose numeric value. Non-numeric keys compare equal to
    /// each other so stable sorts keep their input order.
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        match (self.numeric, other.numeric) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialEq for RecordKey {
    fn eq(&self, other: &Self) -> bool {
        match (self.numeric, other.numeric) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.text == other.text,
            _ => false,
        }
    }
}

impl Eq for RecordKey {}

impl std::hash::Hash for RecordKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self.numeric {
            Some(n) => n.hash(state),
            None => self.text.hash(state),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

