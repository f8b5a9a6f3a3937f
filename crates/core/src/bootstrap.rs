// crates/core/src/bootstrap.rs
use anyhow::{Context, Result};
use recipe_stats_infra::source::JsonRecordSource;
use recipe_stats_usecase::RunAggregation;

use crate::{
    adapters::{ConsoleNotifier, JsonReportEmitter},
    config::RunConfig,
};

/// Wires the adapters together and runs one aggregation pass.
pub fn run_with_config(config: RunConfig) -> Result<()> {
    let RunConfig { input, filter, output, include_total } = config;

    let mut source = JsonRecordSource::open(&input)
        .with_context(|| format!("opening record source '{}'", input.display()))?;

    let presenter = JsonReportEmitter::new(output, include_total);
    let notifier = ConsoleNotifier;
    RunAggregation::new(&presenter, Some(&notifier))
        .run(&mut source, filter)
        .context("aggregating delivery records")
}

#[cfg(test)]
mod tests {
    use recipe_stats_domain::config::FilterConfig;
    use recipe_stats_shared_kernel::ClockHour;

    use super::*;

    #[test]
    fn runs_end_to_end_over_a_fixture_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("deliveries.json");
        let output = dir.path().join("report.json");
        std::fs::write(
            &input,
            br#"[
  {"postcode":"10120","recipe":"Creamy Dill Chicken","delivery":"Wednesday 10AM - 3PM"},
  {"postcode":"10120","recipe":"Potato Gratin","delivery":"Friday 9AM - 5PM"}
]"#,
        )
        .expect("write fixture");

        let config = RunConfig {
            input,
            filter: FilterConfig::new("10120", ClockHour::new(10), ClockHour::new(3), ["Potato"]),
            output: Some(output.clone()),
            include_total: true,
        };

        run_with_config(config).expect("run succeeds");

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).expect("read report"))
                .expect("parse report");
        assert_eq!(report["unique_recipe_count"], 2);
        assert_eq!(report["busiest_postcode"]["postcode"], "10120");
        assert_eq!(report["busiest_postcode"]["delivery_count"], 2);
        assert_eq!(report["count_per_postcode_and_time"]["from"], "10AM");
        assert_eq!(report["count_per_postcode_and_time"]["delivery_count"], 1);
        assert_eq!(report["match_by_name"], serde_json::json!(["Potato Gratin"]));
        assert_eq!(report["total_json_objects"], 2);
    }

    #[test]
    fn missing_input_is_an_error() {
        let config = RunConfig {
            input: "/no/such/deliveries.json".into(),
            filter: FilterConfig::new(
                "10120",
                ClockHour::new(10),
                ClockHour::new(3),
                Vec::<String>::new(),
            ),
            output: None,
            include_total: false,
        };

        let err = run_with_config(config).expect_err("open fails");
        assert!(err.to_string().contains("opening record source"), "{err:#}");
    }
}
