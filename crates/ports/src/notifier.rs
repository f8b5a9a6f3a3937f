// crates/ports/src/notifier.rs

/// Side channel for run diagnostics, distinct from the report itself.
///
/// Recoverable per-record conditions are reported here so they never
/// contaminate the report data.
pub trait AggregationNotifier: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
