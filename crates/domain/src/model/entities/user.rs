use topup_report_shared_kernel::{
    DomainResult, RecordKey, TokenAmount,
    coerce::{display_text, truthy},
};

use super::{Record, field};

/// A user read from `users.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordKey,
    /// Foreign key onto [`Company::id`](super::Company::id).
    pub company_id: RecordKey,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_status: bool,
    pub active_status: bool,
    pub tokens: TokenAmount,
}

impl User {
    /// Build a user from a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`](topup_report_shared_kernel::DomainError::MissingField)
    /// when a required key is absent.
    pub fn from_record(record: &Record) -> DomainResult<Self> {
        Ok(Self {
            id: RecordKey::from_value(field(record, "id")?),
            company_id: RecordKey::from_value(field(record, "company_id")?),
            first_name: display_text(field(record, "first_name")?).into_owned(),
            last_name: display_text(field(record, "last_name")?).into_owned(),
            email: display_text(field(record, "email")?).into_owned(),
            email_status: truthy(field(record, "email_status")?),
            active_status: truthy(field(record, "active_status")?),
            tokens: TokenAmount::from_value(field(record, "tokens")?),
        })
    }

    /// 補充額 `top_up` を適用した後の残高。非アクティブなユーザーは変化しない。
    pub fn new_balance(&self, top_up: TokenAmount) -> TokenAmount {
        self.tokens + self.credit(top_up)
    }

    /// Portion of `top_up` this user actually receives.
    pub fn credit(&self, top_up: TokenAmount) -> TokenAmount {
        if self.active_status { top_up } else { TokenAmount::ZERO }
    }
}
