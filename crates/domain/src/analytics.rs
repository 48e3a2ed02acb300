pub mod aggregate;
pub mod sort;

pub use aggregate::Aggregator;
pub use sort::{sort_companies_by_id, sort_users_by_last_name};
