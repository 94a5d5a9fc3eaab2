//! Station registry and booking dispatch.

use tracing::{debug, warn};

use crate::domain::{BookingKind, Instant, Line, StationId};

use super::config::GapConfig;
use super::error::ScheduleError;
use super::platform::{BookingOutcome, Platform};

/// A station: its identity, the lines it serves and its platforms.
///
/// The station owns its platforms outright and routes each booking to the
/// platform it names. Mutation needs `&mut self`; callers sharing a station
/// across threads must wrap it in their own lock.
///
/// # Examples
///
/// ```
/// use station_scheduler::domain::{BookingKind, Instant};
/// use station_scheduler::schedule::{BookingOutcome, ScheduleError, Station};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let at = |s| Instant::parse_hhmm(s, date).unwrap();
///
/// let mut station = Station::new(1001);
/// station.add_platform(1).unwrap();
///
/// let outcome = station.schedule(1, BookingKind::Stoppage, at("10:00")).unwrap();
/// assert_eq!(outcome, BookingOutcome::Accepted);
///
/// let err = station.schedule(3, BookingKind::Stoppage, at("10:00")).unwrap_err();
/// assert_eq!(err, ScheduleError::PlatformNotFound(3));
/// ```
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    config: GapConfig,
    lines: Vec<Line>,
    platforms: Vec<Platform>,
}

impl Station {
    /// Create a station with the default gaps.
    pub fn new(id: impl Into<StationId>) -> Self {
        Self::with_config(id, GapConfig::default())
    }

    /// Create a station whose platforms use `config`.
    pub fn with_config(id: impl Into<StationId>, config: GapConfig) -> Self {
        Self {
            id: id.into(),
            config,
            lines: Vec::new(),
            platforms: Vec::new(),
        }
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// Add a line to the station's catalogue.
    ///
    /// Line names need not be unique.
    pub fn add_line(&mut self, name: impl Into<String>) -> Result<(), ScheduleError> {
        let line = Line::new(name)?;
        debug!(station = %self.id, line = %line, "line added");
        self.lines.push(line);
        Ok(())
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Add a platform with empty timelines.
    ///
    /// Platform ids are unique within a station; adding an existing id fails
    /// and leaves the station unchanged.
    pub fn add_platform(&mut self, platform_id: i32) -> Result<(), ScheduleError> {
        if self.platform(platform_id).is_some() {
            warn!(station = %self.id, platform = platform_id, "duplicate platform rejected");
            return Err(ScheduleError::DuplicatePlatform(platform_id));
        }

        debug!(station = %self.id, platform = platform_id, "platform added");
        self.platforms.push(Platform::with_config(platform_id, self.config));
        Ok(())
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Look up a platform by id.
    pub fn platform(&self, platform_id: i32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id() == platform_id)
    }

    fn platform_mut(&mut self, platform_id: i32) -> Option<&mut Platform> {
        self.platforms.iter_mut().find(|p| p.id() == platform_id)
    }

    /// Book `kind` on platform `platform_id` at `t`.
    ///
    /// Returns the platform's outcome unchanged. Fails only when the
    /// platform does not exist, in which case nothing is modified.
    pub fn schedule(
        &mut self,
        platform_id: i32,
        kind: BookingKind,
        t: Instant,
    ) -> Result<BookingOutcome, ScheduleError> {
        let station = self.id.clone();
        let Some(platform) = self.platform_mut(platform_id) else {
            warn!(station = %station, platform = platform_id, "platform not found");
            return Err(ScheduleError::PlatformNotFound(platform_id));
        };

        let outcome = platform.try_book(kind, t);
        match outcome {
            BookingOutcome::Accepted => {
                debug!(
                    station = %station,
                    platform = platform_id,
                    %kind,
                    time = %t,
                    "booking accepted"
                );
            }
            BookingOutcome::Conflict { existing, .. } => {
                debug!(
                    station = %station,
                    platform = platform_id,
                    %kind,
                    time = %t,
                    %existing,
                    "booking rejected"
                );
            }
        }
        Ok(outcome)
    }

    pub fn schedule_stoppage(
        &mut self,
        platform_id: i32,
        t: Instant,
    ) -> Result<BookingOutcome, ScheduleError> {
        self.schedule(platform_id, BookingKind::Stoppage, t)
    }

    pub fn schedule_through(
        &mut self,
        platform_id: i32,
        t: Instant,
    ) -> Result<BookingOutcome, ScheduleError> {
        self.schedule(platform_id, BookingKind::Through, t)
    }
}
