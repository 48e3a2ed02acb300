// domain analytics sorting utilities
use crate::model::{Company, User};

/// 会社IDの数値順に安定ソート。数値として読めないIDは末尾に残る。
pub fn sort_companies_by_id(companies: &mut [Company]) {
    companies.sort_by(|a, b| a.id.numeric_cmp(&b.id));
}

/// 姓の辞書順に安定ソート。
pub fn sort_users_by_last_name(users: &mut [User]) {
    users.sort_by(|a, b| a.last_name.cmp(&b.last_name));
}
