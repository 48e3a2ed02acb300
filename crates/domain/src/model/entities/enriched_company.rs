use topup_report_shared_kernel::TokenAmount;

use super::{Company, User};

/// A company together with its two user buckets, each sorted by last name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedCompany {
    pub company: Company,
    pub emailed_users: Vec<User>,
    pub not_emailed_users: Vec<User>,
}

impl EnrichedCompany {
    /// Sum of credits granted to the not-emailed bucket. Emailed users never
    /// contribute.
    pub fn total_top_ups(&self) -> TokenAmount {
        self.not_emailed_users
            .iter()
            .map(|user| user.credit(self.company.top_up))
            .sum()
    }

    pub fn user_count(&self) -> usize {
        self.emailed_users.len() + self.not_emailed_users.len()
    }
}
