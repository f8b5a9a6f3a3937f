use recipe_stats_domain::{analytics::StatsAccumulator, config::FilterConfig, model::DeliveryRecord};
use recipe_stats_ports::notifier::AggregationNotifier;
use recipe_stats_ports::source::{DeliveryRecordDto, RecordSource};
use recipe_stats_shared_kernel::{ApplicationError, RecipeStatsError, Result};

use crate::ports::ReportPresenter;

/// Streaming aggregation use case.
///
/// Drains a record source into the accumulator one record at a time,
/// routes recoverable per-record errors to the notifier, and hands the
/// finished report to the presenter.
pub struct RunAggregation<'a> {
    presenter: &'a dyn ReportPresenter,
    notifier: Option<&'a dyn AggregationNotifier>,
}

impl<'a> RunAggregation<'a> {
    pub fn new(
        presenter: &'a dyn ReportPresenter,
        notifier: Option<&'a dyn AggregationNotifier>,
    ) -> Self {
        Self { presenter, notifier }
    }

    /// Runs one aggregation pass over `source`.
    ///
    /// Fatal source errors abort immediately. A record with a malformed
    /// delivery window is kept in every tally except the window count
    /// and surfaces as a warning, never as a failure.
    pub fn run(&self, source: &mut dyn RecordSource, filter: FilterConfig) -> Result<()> {
        let mut accumulator = StatsAccumulator::new(filter);
        let mut index: u64 = 0;

        while let Some(dto) = next_record(source, index)? {
            index += 1;
            let record = port_to_domain_record(dto);
            if let Err(err) = accumulator.record(&record) {
                self.log_warning(&format!("[warn] record {index}: {err}"));
            }
        }

        let report = accumulator.finish()?;
        self.presenter.present(&report).map_err(presentation_failed)?;
        self.log_completion(report.total_records);

        Ok(())
    }

    fn log_completion(&self, total_records: u64) {
        if let Some(notifier) = self.notifier {
            notifier.info(&format!("[recipe_stats] Completed: {total_records} records processed"));
        }
    }

    fn log_warning(&self, message: &str) {
        if let Some(notifier) = self.notifier {
            notifier.warn(message);
        }
    }
}

fn next_record(source: &mut dyn RecordSource, index: u64) -> Result<Option<DeliveryRecordDto>> {
    source.next_record().map_err(|err| aggregation_failed(err, index))
}

fn port_to_domain_record(dto: DeliveryRecordDto) -> DeliveryRecord {
    DeliveryRecord { postcode: dto.postcode, recipe: dto.recipe, delivery: dto.delivery }
}

fn aggregation_failed(source: RecipeStatsError, index: u64) -> RecipeStatsError {
    ApplicationError::AggregationFailed {
        reason: format!("record source failed after {index} records"),
        source: Some(Box::new(source)),
    }
    .into()
}

fn presentation_failed(source: RecipeStatsError) -> RecipeStatsError {
    ApplicationError::PresentationFailed {
        reason: "report sink rejected the finished report".to_string(),
        source: Some(Box::new(source)),
    }
    .into()
}
