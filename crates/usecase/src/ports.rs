// crates/usecase/src/ports.rs
use recipe_stats_domain::report::Report;
use recipe_stats_shared_kernel::Result;

/// Application port receiving the finished, immutable report.
///
/// Implementations never see a partially aggregated report: the
/// orchestrator presents all-or-nothing per run.
pub trait ReportPresenter {
    fn present(&self, report: &Report) -> Result<()>;
}
