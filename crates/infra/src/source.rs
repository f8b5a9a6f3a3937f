// crates/infra/src/source.rs
pub mod json;

pub use json::JsonRecordSource;
pub use recipe_stats_ports::source::{DeliveryRecordDto, RecordSource};
