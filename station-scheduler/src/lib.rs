//! Station platform scheduler.
//!
//! Accepts stoppage and through bookings on a station's platforms, rejecting
//! any booking that comes too close to an earlier one of the same kind on
//! the same platform.

pub mod domain;
pub mod driver;
pub mod schedule;
