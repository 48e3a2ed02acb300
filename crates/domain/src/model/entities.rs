pub mod company;
pub mod enriched_company;
pub mod user;

pub use company::Company;
pub use enriched_company::EnrichedCompany;
pub use user::User;

/// One decoded JSON object from an input file.
pub type Record = serde_json::Map<String, serde_json::Value>;

pub(crate) fn field<'a>(
    record: &'a Record,
    name: &str,
) -> topup_report_shared_kernel::DomainResult<&'a serde_json::Value> {
    record
        .get(name)
        .ok_or_else(|| topup_report_shared_kernel::DomainError::MissingField { field: name.to_string() })
}
