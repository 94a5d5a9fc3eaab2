//! Driver error types.

use std::path::PathBuf;

use crate::domain::TimeError;
use crate::schedule::ScheduleError;

/// Errors that stop a scenario before or while it runs.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Scenario file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scenario file is not valid JSON for a scenario
    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),

    /// Scenario date is not YYYY-MM-DD
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A booking time could not be parsed
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Station setup failed
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
