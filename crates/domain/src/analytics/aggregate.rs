use std::collections::{HashMap, HashSet};

use recipe_stats_shared_kernel::{DomainError, DomainResult};

use crate::{
    analytics::window::DeliveryWindowParser,
    config::FilterConfig,
    model::DeliveryRecord,
    report::{BusiestPostcode, RecipeCount, Report, WindowDeliveryCount},
};

/// Accumulates delivery statistics over one streaming pass.
///
/// Created empty, fed one record at a time through [`record`], and
/// consumed exactly once by [`finish`] to produce the immutable
/// [`Report`].
///
/// [`record`]: StatsAccumulator::record
/// [`finish`]: StatsAccumulator::finish
pub struct StatsAccumulator {
    filter: FilterConfig,
    window_parser: DeliveryWindowParser,
    recipe_counts: HashMap<String, usize>,
    postcode_counts: HashMap<String, usize>,
    window_delivery_count: usize,
    matched_recipes: HashSet<String>,
    total_records: u64,
}

impl StatsAccumulator {
    #[must_use]
    pub fn new(filter: FilterConfig) -> Self {
        Self {
            filter,
            window_parser: DeliveryWindowParser::new(),
            recipe_counts: HashMap::new(),
            postcode_counts: HashMap::new(),
            window_delivery_count: 0,
            matched_recipes: HashSet::new(),
            total_records: 0,
        }
    }

    /// Folds one record into the accumulators.
    ///
    /// A malformed delivery window on a record for the target postcode
    /// is returned as a recoverable error: the record has already been
    /// counted and keyword-matched by then, only its window contribution
    /// is skipped.
    pub fn record(&mut self, record: &DeliveryRecord) -> DomainResult<()> {
        self.total_records += 1;
        *self.recipe_counts.entry(record.recipe.clone()).or_insert(0) += 1;
        *self.postcode_counts.entry(record.postcode.clone()).or_insert(0) += 1;

        let window_result = self.count_delivery_window(record);
        self.match_keywords(record);
        window_result
    }

    fn count_delivery_window(&mut self, record: &DeliveryRecord) -> DomainResult<()> {
        if record.postcode != self.filter.target_postcode() {
            return Ok(());
        }
        let window = self.window_parser.parse(&record.delivery)?;
        if window.lies_within(self.filter.from_hour(), self.filter.to_hour()) {
            self.window_delivery_count += 1;
        }
        Ok(())
    }

    /// First matching keyword wins; the recipe is recorded at most once.
    fn match_keywords(&mut self, record: &DeliveryRecord) {
        if self.filter.keywords().is_empty() {
            return;
        }
        let recipe = record.recipe.to_lowercase();
        if self.filter.keywords().iter().any(|keyword| recipe.contains(keyword.as_str())) {
            self.matched_recipes.insert(record.recipe.clone());
        }
    }

    /// Consumes the accumulators and derives the report.
    ///
    /// Fails with [`DomainError::EmptyInput`] when no records were
    /// processed, since "busiest postcode" has no defined value then.
    pub fn finish(self) -> DomainResult<Report> {
        let busiest_postcode = busiest_postcode(self.postcode_counts)?;

        let mut recipes_by_name: Vec<RecipeCount> = self
            .recipe_counts
            .into_iter()
            .map(|(recipe, count)| RecipeCount { recipe, count })
            .collect();
        recipes_by_name.sort_by(|a, b| a.recipe.cmp(&b.recipe));

        let unique_recipe_count = recipes_by_name.iter().filter(|entry| entry.count == 1).count();

        let mut matched_recipe_names: Vec<String> = self.matched_recipes.into_iter().collect();
        matched_recipe_names.sort();

        Ok(Report {
            unique_recipe_count,
            recipes_by_name,
            busiest_postcode,
            window_deliveries: WindowDeliveryCount {
                postcode: self.filter.target_postcode().to_string(),
                from: self.filter.from_hour(),
                to: self.filter.to_hour(),
                delivery_count: self.window_delivery_count,
            },
            matched_recipe_names,
            total_records: self.total_records,
        })
    }
}

/// One-shot aggregation over an in-memory record sequence.
///
/// Recoverable window-parse errors are tolerated silently here; drive a
/// [`StatsAccumulator`] directly to observe them per record.
pub fn aggregate<I>(records: I, filter: FilterConfig) -> DomainResult<Report>
where
    I: IntoIterator<Item = DeliveryRecord>,
{
    let mut accumulator = StatsAccumulator::new(filter);
    for record in records {
        let _ = accumulator.record(&record);
    }
    accumulator.finish()
}

// Highest delivery count wins. For deterministic results when counts
// are equal, ties fall back to postcode ascending so the outcome is
// stable across runs and platforms.
fn busiest_postcode(postcode_counts: HashMap<String, usize>) -> DomainResult<BusiestPostcode> {
    let mut entries: Vec<(String, usize)> = postcode_counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .next()
        .map(|(postcode, delivery_count)| BusiestPostcode { postcode, delivery_count })
        .ok_or(DomainError::EmptyInput)
}
