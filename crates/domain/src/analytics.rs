pub mod aggregate;
pub mod window;

pub use aggregate::{StatsAccumulator, aggregate};
pub use window::{DeliveryWindow, DeliveryWindowParser};
