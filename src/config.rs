// src/config.rs
use crate::args::Args;
pub use recipe_stats_core::RunConfig;
use recipe_stats_core::{ClockHour, FilterConfig};

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let filter = FilterConfig::new(
            args.postcode,
            ClockHour::new(args.from),
            ClockHour::new(args.to),
            args.name,
        );
        Self { input: args.input, filter, output: args.output, include_total: args.totals }
    }
}
