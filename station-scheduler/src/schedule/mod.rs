//! Platform booking and admission control.
//!
//! A [`Station`] owns its [`Platform`]s and dispatches each booking request
//! to the platform it names. Each platform keeps separate timelines for
//! stoppages and throughs and rejects bookings that come too close to an
//! earlier one of the same kind.

mod config;
mod error;
mod platform;
mod station;

#[cfg(test)]
mod station_tests;

pub use config::{GapConfig, InvalidGap};
pub use error::ScheduleError;
pub use platform::{BookingOutcome, Platform};
pub use station::Station;
