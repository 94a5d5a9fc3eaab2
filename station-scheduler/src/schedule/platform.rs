//! Per-platform admission control.
//!
//! A platform keeps one timeline per [`BookingKind`]. A new booking is
//! admitted only if it keeps the minimum gap to every earlier booking of
//! the same kind; the other kind's timeline is never consulted.

use tracing::trace;

use crate::domain::{BookingKind, Instant};

use super::config::GapConfig;

/// Result of a booking attempt.
///
/// A conflict is an expected outcome, not a failure: it leaves the platform
/// untouched and tells the caller which earlier booking was in the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The booking was recorded on the platform.
    Accepted,
    /// The booking lies within the minimum gap of `existing`.
    Conflict { kind: BookingKind, existing: Instant },
}

impl BookingOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BookingOutcome::Accepted)
    }

    /// Returns the conflicting instant, if the booking was rejected.
    pub fn conflict(&self) -> Option<Instant> {
        match self {
            BookingOutcome::Accepted => None,
            BookingOutcome::Conflict { existing, .. } => Some(*existing),
        }
    }
}

/// A platform and its two booking timelines.
///
/// # Examples
///
/// ```
/// use station_scheduler::domain::{BookingKind, Instant};
/// use station_scheduler::schedule::{BookingOutcome, Platform};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let at = |s| Instant::parse_hhmm(s, date).unwrap();
///
/// let mut platform = Platform::new(1);
/// assert!(platform.try_book(BookingKind::Stoppage, at("10:00")).is_accepted());
///
/// // Another stoppage 15 minutes later is too close
/// assert_eq!(
///     platform.try_book(BookingKind::Stoppage, at("10:15")),
///     BookingOutcome::Conflict { kind: BookingKind::Stoppage, existing: at("10:00") }
/// );
///
/// // A through train at the same moment uses its own timeline
/// assert!(platform.try_book(BookingKind::Through, at("10:00")).is_accepted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    id: i32,
    config: GapConfig,
    stoppages: Vec<Instant>,
    throughs: Vec<Instant>,
}

impl Platform {
    /// Create a platform with empty timelines and the default gaps.
    pub fn new(id: i32) -> Self {
        Self::with_config(id, GapConfig::default())
    }

    pub fn with_config(id: i32, config: GapConfig) -> Self {
        Self {
            id,
            config,
            stoppages: Vec::new(),
            throughs: Vec::new(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn config(&self) -> &GapConfig {
        &self.config
    }

    /// Accepted instants for a kind, in booking order.
    pub fn timeline(&self, kind: BookingKind) -> &[Instant] {
        match kind {
            BookingKind::Stoppage => &self.stoppages,
            BookingKind::Through => &self.throughs,
        }
    }

    pub fn stoppages(&self) -> &[Instant] {
        &self.stoppages
    }

    pub fn throughs(&self) -> &[Instant] {
        &self.throughs
    }

    /// Find the first booking of `kind` that `t` would conflict with.
    ///
    /// Entries are scanned in booking order. A distance exactly equal to the
    /// gap is not a conflict.
    pub fn check(&self, kind: BookingKind, t: Instant) -> Option<Instant> {
        let gap = self.config.gap(kind);
        self.timeline(kind)
            .iter()
            .copied()
            .find(|existing| existing.abs_diff(t) < gap)
    }

    /// Try to record a booking of `kind` at `t`.
    ///
    /// On conflict nothing is recorded.
    pub fn try_book(&mut self, kind: BookingKind, t: Instant) -> BookingOutcome {
        if let Some(existing) = self.check(kind, t) {
            trace!(platform = self.id, %kind, requested = %t, %existing, "booking conflicts");
            return BookingOutcome::Conflict { kind, existing };
        }

        self.timeline_mut(kind).push(t);
        BookingOutcome::Accepted
    }

    fn timeline_mut(&mut self, kind: BookingKind) -> &mut Vec<Instant> {
        match kind {
            BookingKind::Stoppage => &mut self.stoppages,
            BookingKind::Through => &mut self.throughs,
        }
    }
}
