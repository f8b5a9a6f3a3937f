use recipe_stats_shared_kernel::ClockHour;

/// Filter settings for one aggregation run.
///
/// Built once by the caller and never mutated afterwards. Keyword
/// matching is case-insensitive, so keywords are lowercased here and
/// compared against a lowercased recipe name.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    target_postcode: String,
    from_hour: ClockHour,
    to_hour: ClockHour,
    keywords: Vec<String>,
}

impl FilterConfig {
    pub fn new(
        target_postcode: impl Into<String>,
        from_hour: ClockHour,
        to_hour: ClockHour,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let keywords = keywords.into_iter().map(|keyword| keyword.into().to_lowercase()).collect();
        Self { target_postcode: target_postcode.into(), from_hour, to_hour, keywords }
    }

    #[must_use]
    pub fn target_postcode(&self) -> &str {
        &self.target_postcode
    }

    #[must_use]
    pub const fn from_hour(&self) -> ClockHour {
        self.from_hour
    }

    #[must_use]
    pub const fn to_hour(&self) -> ClockHour {
        self.to_hour
    }

    /// Lowercased keywords in configured order.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
