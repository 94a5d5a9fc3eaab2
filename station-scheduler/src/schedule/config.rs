//! Gap configuration for platform timelines.

use chrono::Duration;
use serde::Deserialize;

use crate::domain::BookingKind;

/// Error returned when a minimum gap is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} gap of {minutes} minutes: {reason}")]
pub struct InvalidGap {
    kind: BookingKind,
    minutes: i64,
    reason: &'static str,
}

/// Minimum separation between bookings of the same kind on one platform.
///
/// Gaps are always positive, so a booking always conflicts with an earlier
/// booking of the same kind at the same instant.
///
/// ```
/// use station_scheduler::domain::BookingKind;
/// use station_scheduler::schedule::GapConfig;
/// use chrono::Duration;
///
/// let config = GapConfig::new(45, 5).unwrap();
/// assert_eq!(config.gap(BookingKind::Stoppage), Duration::minutes(45));
///
/// assert!(GapConfig::new(0, 10).is_err());
/// assert!(GapConfig::new(30, -1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "GapMinutes")]
pub struct GapConfig {
    stoppage: Duration,
    through: Duration,
}

impl GapConfig {
    pub fn new(stoppage_gap_mins: i64, through_gap_mins: i64) -> Result<Self, InvalidGap> {
        Ok(Self {
            stoppage: checked_gap(BookingKind::Stoppage, stoppage_gap_mins)?,
            through: checked_gap(BookingKind::Through, through_gap_mins)?,
        })
    }

    /// Returns the minimum gap for a booking kind.
    pub fn gap(&self, kind: BookingKind) -> Duration {
        match kind {
            BookingKind::Stoppage => self.stoppage,
            BookingKind::Through => self.through,
        }
    }
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            stoppage: Duration::minutes(30),
            through: Duration::minutes(10),
        }
    }
}

/// Gaps as written in a scenario file, before validation.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct GapMinutes {
    stoppage_gap_mins: i64,
    through_gap_mins: i64,
}

impl Default for GapMinutes {
    fn default() -> Self {
        Self {
            stoppage_gap_mins: 30,
            through_gap_mins: 10,
        }
    }
}

impl TryFrom<GapMinutes> for GapConfig {
    type Error = InvalidGap;

    fn try_from(raw: GapMinutes) -> Result<Self, Self::Error> {
        GapConfig::new(raw.stoppage_gap_mins, raw.through_gap_mins)
    }
}

fn checked_gap(kind: BookingKind, minutes: i64) -> Result<Duration, InvalidGap> {
    if minutes <= 0 {
        return Err(InvalidGap {
            kind,
            minutes,
            reason: "must be positive",
        });
    }
    Duration::try_minutes(minutes).ok_or(InvalidGap {
        kind,
        minutes,
        reason: "out of range",
    })
}
