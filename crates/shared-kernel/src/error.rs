// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RecipeStatsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<RecipeStatsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, RecipeStatsError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Zero records were processed, so "busiest postcode" has no defined value.
    #[error("No delivery records in input; busiest postcode is undefined")]
    EmptyInput,

    /// A record's delivery field does not match the expected time-window pattern.
    /// Recoverable: the record still counts, only its window contribution is skipped.
    #[error("Delivery time '{delivery}' does not match '<Weekday> <h>AM - <h>PM'")]
    DeliveryWindowParse { delivery: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to aggregate delivery records: {reason}")]
    AggregationFailed {
        reason: String,
        #[source]
        source: Option<Box<RecipeStatsError>>,
    },

    #[error("Failed to present report: {reason}")]
    PresentationFailed {
        reason: String,
        #[source]
        source: Option<Box<RecipeStatsError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read input '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not a JSON array of objects: {details}")]
    Framing { details: String },

    #[error("Failed to write report '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} report: {details}")]
    Serialization { format: String, details: String },

    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for RecipeStatsError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RecipeStatsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<RecipeStatsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RecipeStatsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RecipeStatsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
