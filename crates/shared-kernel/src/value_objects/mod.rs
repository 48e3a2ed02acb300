// crates/shared-kernel/src/value_objects/mod.rs
pub mod record_key;
pub mod token_amount;

pub use record_key::RecordKey;
pub use token_amount::TokenAmount;
