use recipe_stats_shared_kernel::{ClockHour, DomainError, DomainResult};
use regex::Regex;

/// Hour bounds extracted from a delivery string such as "Wednesday 11AM - 2PM".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    pub from: ClockHour,
    pub to: ClockHour,
}

impl DeliveryWindow {
    /// Whether this window lies inside the filter bounds: starts no
    /// earlier than `from` and ends no later than `to`.
    #[must_use]
    pub fn lies_within(self, from: ClockHour, to: ClockHour) -> bool {
        self.from >= from && self.to <= to
    }
}

/// Parser for the fixed `"<Weekday> <h>AM - <h>PM"` delivery format.
///
/// The weekday token is consumed but not validated.
pub struct DeliveryWindowParser {
    pattern: Regex,
}

impl DeliveryWindowParser {
    /// # Panics
    ///
    /// Panics if the internal regex pattern fails to compile (should never happen with hardcoded patterns).
    #[must_use]
    pub fn new() -> Self {
        Self { pattern: Regex::new(r"^\s*\S+\s+(\d{1,2})AM\s-\s(\d{1,2})PM\s*$").unwrap() }
    }

    /// Extracts the hour bounds from `delivery`.
    ///
    /// A mismatch is a recoverable error scoped to the one record that
    /// carried the string.
    pub fn parse(&self, delivery: &str) -> DomainResult<DeliveryWindow> {
        let captures = self
            .pattern
            .captures(delivery)
            .ok_or_else(|| DomainError::DeliveryWindowParse { delivery: delivery.to_string() })?;

        let from = capture_hour(&captures, 1, delivery)?;
        let to = capture_hour(&captures, 2, delivery)?;
        Ok(DeliveryWindow { from, to })
    }
}

impl Default for DeliveryWindowParser {
    fn default() -> Self {
        Self::new()
    }
}

fn capture_hour(
    captures: &regex::Captures<'_>,
    index: usize,
    delivery: &str,
) -> DomainResult<ClockHour> {
    captures
        .get(index)
        .and_then(|hour| hour.as_str().parse::<u32>().ok())
        .map(ClockHour::new)
        .ok_or_else(|| DomainError::DeliveryWindowParse { delivery: delivery.to_string() })
}
