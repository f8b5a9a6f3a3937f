// crates/ports/src/source.rs
use recipe_stats_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO representing one delivery record produced by an input port.
///
/// Field-level decode tolerance sits behind the port: a record whose
/// field is missing or not a string arrives here with that field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecordDto {
    pub postcode: String,
    pub recipe: String,
    pub delivery: String,
}

/// Port for streaming delivery records.
///
/// Sources are sequential and forward-only: one record per call, no
/// look-ahead, no rewind. `Ok(None)` signals the end of the sequence;
/// any error is fatal to the whole run.
pub trait RecordSource: Send + Sync {
    fn next_record(&mut self) -> Result<Option<DeliveryRecordDto>>;
}
