// crates/core/src/config.rs
use std::path::PathBuf;

use recipe_stats_domain::config::FilterConfig;

/// Resolved configuration for one aggregation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the JSON array of delivery records.
    pub input: PathBuf,
    /// Postcode, time-window and keyword filter handed to the aggregator.
    pub filter: FilterConfig,
    /// Report destination; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Include `total_json_objects` in the report.
    pub include_total: bool,
}
