//! Running a scenario and rendering its outcome.

use std::fmt;

use tracing::{info, warn};

use crate::domain::{BookingKind, Instant};
use crate::schedule::{BookingOutcome, ScheduleError, Station};

use super::error::DriverError;
use super::scenario::Scenario;

/// A booking that reached a platform, with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub platform: i32,
    pub kind: BookingKind,
    pub time: Instant,
    pub outcome: BookingOutcome,
}

/// Everything a scenario run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The station after the last booking.
    pub station: Station,
    /// Bookings in the order they were issued.
    pub entries: Vec<ReportEntry>,
    /// Why the batch stopped early, if it did.
    pub aborted: Option<ScheduleError>,
}

impl RunReport {
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    pub fn accepted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_accepted())
            .count()
    }

    pub fn conflict_count(&self) -> usize {
        self.entries.len() - self.accepted_count()
    }
}

/// Build the station a scenario describes and issue its bookings in order.
///
/// Conflicts are recorded and the run continues. An unknown platform stops
/// the batch; it is reported in [`RunReport::aborted`] rather than as an
/// error, since the bookings made before it still stand. Problems with the
/// scenario itself (bad times, blank line names, duplicate platforms) fail
/// before any booking is issued.
pub fn run(scenario: &Scenario) -> Result<RunReport, DriverError> {
    let instants = scenario.instants()?;

    let mut station = Station::with_config(scenario.station.clone(), scenario.gaps);
    for line in &scenario.lines {
        station.add_line(line.as_str())?;
    }
    for &platform in &scenario.platforms {
        station.add_platform(platform)?;
    }

    let mut entries = Vec::with_capacity(scenario.bookings.len());
    let mut aborted = None;

    for (request, time) in scenario.bookings.iter().zip(instants) {
        match station.schedule(request.platform, request.kind, time) {
            Ok(outcome) => entries.push(ReportEntry {
                platform: request.platform,
                kind: request.kind,
                time,
                outcome,
            }),
            Err(err @ ScheduleError::PlatformNotFound(_)) => {
                warn!(error = %err, "aborting batch");
                aborted = Some(err);
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let report = RunReport {
        station,
        entries,
        aborted,
    };
    info!(
        station = %report.station.id(),
        accepted = report.accepted_count(),
        conflicts = report.conflict_count(),
        aborted = report.is_aborted(),
        "scenario complete"
    );
    Ok(report)
}

/// Label used for a kind in outcome lines.
fn kind_label(kind: BookingKind) -> &'static str {
    match kind {
        BookingKind::Stoppage => "stoppage",
        BookingKind::Through => "through train",
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = kind_label(self.kind);
        match self.outcome {
            BookingOutcome::Accepted => {
                let mut chars = label.chars();
                if let Some(first) = chars.next() {
                    write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
                }
                write!(
                    f,
                    " scheduled successfully (platform {} at {}).",
                    self.platform, self.time
                )
            }
            BookingOutcome::Conflict { existing, .. } => write!(
                f,
                "Conflict: Could not schedule {} (platform {} at {} conflicts with {}).",
                label, self.platform, self.time, existing
            ),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.station.id();
        writeln!(f, "Station ID ({}): {}", id.variant_name(), id)?;

        writeln!(f, "Lines:")?;
        for line in self.station.lines() {
            writeln!(f, "- {line}")?;
        }

        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }

        if let Some(err) = &self.aborted {
            writeln!(f, "Aborted: {err}")?;
        }
        Ok(())
    }
}
