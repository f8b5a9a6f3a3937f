// crates/shared-kernel/src/value_objects/hours.rs
use serde::{Deserialize, Serialize};

/// Clock hour as it appears in a delivery window ("10AM", "3PM").
///
/// Plain hour number with no range validation; the delivery-window
/// comparison relies only on its ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockHour(u32);

impl ClockHour {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for ClockHour {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

mod display {
    use std::fmt;

    use super::ClockHour;

    impl fmt::Display for ClockHour {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
