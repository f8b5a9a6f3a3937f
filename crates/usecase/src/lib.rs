//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`orchestrator`]: Streaming aggregation over a record source
//! - [`ports`]: Application-side port receiving the finished report
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;
pub mod ports;

pub use orchestrator::RunAggregation;
pub use ports::ReportPresenter;
