pub mod envelope;
pub mod query;
