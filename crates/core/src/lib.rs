// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod adapters;
pub mod bootstrap;
pub mod config;

pub use bootstrap::run_with_config;
pub use config::RunConfig;
pub use recipe_stats_domain::analytics::aggregate;
pub use recipe_stats_domain::config::FilterConfig;
pub use recipe_stats_domain::model::DeliveryRecord;
pub use recipe_stats_domain::report::Report;
pub use recipe_stats_shared_kernel::ClockHour;
