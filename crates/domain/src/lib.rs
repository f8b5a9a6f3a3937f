#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod report;

pub use analytics::{DeliveryWindow, DeliveryWindowParser, StatsAccumulator, aggregate};
pub use config::FilterConfig;
pub use model::DeliveryRecord;
pub use report::{BusiestPostcode, RecipeCount, Report, WindowDeliveryCount};
