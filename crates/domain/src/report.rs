use recipe_stats_shared_kernel::ClockHour;

/// Occurrence count for one recipe name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCount {
    pub recipe: String,
    pub count: usize,
}

/// The postcode receiving the most deliveries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusiestPostcode {
    pub postcode: String,
    pub delivery_count: usize,
}

/// Deliveries to the configured postcode inside the configured hour window.
///
/// Always part of the report, even when the count is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDeliveryCount {
    pub postcode: String,
    pub from: ClockHour,
    pub to: ClockHour,
    pub delivery_count: usize,
}

/// Immutable result of one aggregation run.
///
/// `recipes_by_name` and `matched_recipe_names` are sorted ascending by
/// ordinal string comparison; `unique_recipe_count` counts recipes that
/// occur exactly once, not distinct recipe names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub unique_recipe_count: usize,
    pub recipes_by_name: Vec<RecipeCount>,
    pub busiest_postcode: BusiestPostcode,
    pub window_deliveries: WindowDeliveryCount,
    pub matched_recipe_names: Vec<String>,
    pub total_records: u64,
}
