// crates/infra/src/serialization.rs
use serde::Serialize;

/// Top-level JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub unique_recipe_count: usize,
    pub count_per_recipe: Vec<JsonRecipeCount>,
    pub busiest_postcode: JsonBusiestPostcode,
    pub count_per_postcode_and_time: JsonWindowCount,
    pub match_by_name: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_json_objects: Option<u64>,
}

/// JSON representation of one recipe tally.
#[derive(Debug, Serialize)]
pub struct JsonRecipeCount {
    pub recipe: String,
    pub count: usize,
}

/// JSON representation of the busiest postcode.
#[derive(Debug, Serialize)]
pub struct JsonBusiestPostcode {
    pub postcode: String,
    pub delivery_count: usize,
}

/// JSON representation of the filtered delivery-window tally.
///
/// `from` and `to` carry their meridiem suffixes ("10AM", "3PM") on
/// the wire.
#[derive(Debug, Serialize)]
pub struct JsonWindowCount {
    pub postcode: String,
    pub from: String,
    pub to: String,
    pub delivery_count: usize,
}
