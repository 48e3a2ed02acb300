pub mod entities;

pub use entities::{Company, EnrichedCompany, Record, User};
