use std::collections::HashMap;

use topup_report_shared_kernel::RecordKey;

use crate::{
    analytics::sort::{sort_companies_by_id, sort_users_by_last_name},
    model::{Company, EnrichedCompany, User},
};

/// Joins users onto their companies and splits each company's users into the
/// emailed and not-emailed buckets.
pub struct Aggregator;

impl Aggregator {
    /// Returns `None` when either collection is empty; there is nothing to
    /// report in that case.
    pub fn aggregate(mut companies: Vec<Company>, users: Vec<User>) -> Option<Vec<EnrichedCompany>> {
        if companies.is_empty() || users.is_empty() {
            return None;
        }

        sort_companies_by_id(&mut companies);
        let groups = Self::group_by_company(users);

        let enriched = companies
            .into_iter()
            .map(|company| {
                let members = groups.get(&company.id).map(Vec::as_slice).unwrap_or_default();
                Self::enrich(company, members)
            })
            .collect();
        Some(enriched)
    }

    /// Groups users by `company_id`, keeping input order inside each group.
    /// Users whose company does not exist simply never get looked up.
    fn group_by_company(users: Vec<User>) -> HashMap<RecordKey, Vec<User>> {
        let mut groups: HashMap<RecordKey, Vec<User>> = HashMap::new();
        for user in users {
            groups.entry(user.company_id.clone()).or_default().push(user);
        }
        groups
    }

    fn enrich(company: Company, members: &[User]) -> EnrichedCompany {
        let (mut emailed_users, mut not_emailed_users): (Vec<User>, Vec<User>) = members
            .iter()
            .cloned()
            .partition(|user| company.email_status && user.email_status);

        sort_users_by_last_name(&mut emailed_users);
        sort_users_by_last_name(&mut not_emailed_users);

        EnrichedCompany { company, emailed_users, not_emailed_users }
    }
}
