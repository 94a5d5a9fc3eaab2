//! Scheduling error types.

use crate::domain::InvalidLine;

/// Errors raised by station operations.
///
/// A timing conflict is not an error: it is reported as
/// [`BookingOutcome::Conflict`](super::BookingOutcome::Conflict).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// No platform with this id has been added to the station
    #[error("platform {0} not found")]
    PlatformNotFound(i32),

    /// A platform with this id already exists on the station
    #[error("platform {0} already exists")]
    DuplicatePlatform(i32),

    /// The line could not be added
    #[error(transparent)]
    InvalidLine(#[from] InvalidLine),
}
