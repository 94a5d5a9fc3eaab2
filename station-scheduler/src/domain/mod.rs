//! Domain types for station scheduling.
//!
//! Values here are validated at construction, so the scheduling layer can
//! trust them without re-checking.

mod kind;
mod line;
mod station;
mod time;

pub use kind::BookingKind;
pub use line::{InvalidLine, Line};
pub use station::StationId;
pub use time::{Instant, TimeError};
