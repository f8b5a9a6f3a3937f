// crates/shared-kernel/src/value_objects/mod.rs
pub mod hours;

pub use hours::ClockHour;
