// crates/infra/src/output.rs
use std::io::Write;

use recipe_stats_domain::report::Report;
use recipe_stats_shared_kernel::Result;

use crate::serialization::{JsonBusiestPostcode, JsonRecipeCount, JsonReport, JsonWindowCount};

/// Writes `report` to `out` as pretty-printed JSON with a trailing newline.
pub fn write_json_report(report: &Report, include_total: bool, out: &mut impl Write) -> Result<()> {
    let output = build_json_report(report, include_total);
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

fn build_json_report(report: &Report, include_total: bool) -> JsonReport {
    let count_per_recipe = report
        .recipes_by_name
        .iter()
        .map(|entry| JsonRecipeCount { recipe: entry.recipe.clone(), count: entry.count })
        .collect();
    JsonReport {
        unique_recipe_count: report.unique_recipe_count,
        count_per_recipe,
        busiest_postcode: JsonBusiestPostcode {
            postcode: report.busiest_postcode.postcode.clone(),
            delivery_count: report.busiest_postcode.delivery_count,
        },
        count_per_postcode_and_time: JsonWindowCount {
            postcode: report.window_deliveries.postcode.clone(),
            from: format!("{}AM", report.window_deliveries.from),
            to: format!("{}PM", report.window_deliveries.to),
            delivery_count: report.window_deliveries.delivery_count,
        },
        match_by_name: report.matched_recipe_names.clone(),
        total_json_objects: include_total.then_some(report.total_records),
    }
}

#[cfg(test)]
mod tests {
    use recipe_stats_domain::report::{BusiestPostcode, RecipeCount, WindowDeliveryCount};
    use recipe_stats_shared_kernel::ClockHour;
    use serde_json::Value;

    use super::*;

    fn sample_report() -> Report {
        Report {
            unique_recipe_count: 2,
            recipes_by_name: vec![
                RecipeCount { recipe: "A5 Ranch Burger".to_string(), count: 1 },
                RecipeCount { recipe: "Creamy Dill Chicken".to_string(), count: 2 },
                RecipeCount { recipe: "Potato Gratin".to_string(), count: 1 },
            ],
            busiest_postcode: BusiestPostcode {
                postcode: "10120".to_string(),
                delivery_count: 3,
            },
            window_deliveries: WindowDeliveryCount {
                postcode: "10120".to_string(),
                from: ClockHour::new(10),
                to: ClockHour::new(3),
                delivery_count: 2,
            },
            matched_recipe_names: vec![
                "Creamy Dill Chicken".to_string(),
                "Potato Gratin".to_string(),
            ],
            total_records: 4,
        }
    }

    fn render(report: &Report, include_total: bool) -> (String, Value) {
        let mut buffer = Vec::new();
        write_json_report(report, include_total, &mut buffer).expect("json output succeeds");
        let json_str = String::from_utf8(buffer).expect("utf8");
        let value: Value = serde_json::from_str(&json_str).expect("parse json");
        (json_str, value)
    }

    #[test]
    fn json_report_contains_all_sections() {
        let (_, value) = render(&sample_report(), false);

        assert_eq!(value["unique_recipe_count"], 2);

        let recipes = value["count_per_recipe"].as_array().expect("recipe array");
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[0]["recipe"], "A5 Ranch Burger");
        assert_eq!(recipes[0]["count"], 1);
        assert_eq!(recipes[1]["recipe"], "Creamy Dill Chicken");
        assert_eq!(recipes[1]["count"], 2);

        assert_eq!(value["busiest_postcode"]["postcode"], "10120");
        assert_eq!(value["busiest_postcode"]["delivery_count"], 3);

        let window = &value["count_per_postcode_and_time"];
        assert_eq!(window["postcode"], "10120");
        assert_eq!(window["from"], "10AM");
        assert_eq!(window["to"], "3PM");
        assert_eq!(window["delivery_count"], 2);

        assert_eq!(
            value["match_by_name"],
            serde_json::json!(["Creamy Dill Chicken", "Potato Gratin"])
        );
    }

    #[test]
    fn total_is_omitted_unless_requested() {
        let (_, value) = render(&sample_report(), false);
        assert!(
            value.get("total_json_objects").is_none(),
            "total should be absent when not requested"
        );
    }

    #[test]
    fn total_is_present_when_requested() {
        let (_, value) = render(&sample_report(), true);
        assert_eq!(value["total_json_objects"], 4);
    }

    #[test]
    fn output_ends_with_a_newline() {
        let (json_str, _) = render(&sample_report(), false);
        assert!(json_str.ends_with('\n'));
    }
}
