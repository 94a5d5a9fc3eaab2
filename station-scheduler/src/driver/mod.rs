//! Scenario driver.
//!
//! Builds a station, issues a batch of bookings against it and renders the
//! outcome of each. This sits outside the scheduling core and only talks to
//! it through [`Station`](crate::schedule::Station).

mod error;
mod report;
mod scenario;

pub use error::DriverError;
pub use report::{ReportEntry, RunReport, run};
pub use scenario::{BookingRequest, Scenario};
