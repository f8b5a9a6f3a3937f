use serde::{Deserialize, Serialize};

/// One recipe delivery as decoded from the input stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub postcode: String,
    pub recipe: String,
    pub delivery: String,
}

impl DeliveryRecord {
    #[must_use]
    pub fn new(
        postcode: impl Into<String>,
        recipe: impl Into<String>,
        delivery: impl Into<String>,
    ) -> Self {
        Self { postcode: postcode.into(), recipe: recipe.into(), delivery: delivery.into() }
    }
}
