//! Booking kinds.

use std::fmt;

use serde::Deserialize;

/// What a booking on a platform represents.
///
/// Each kind has its own timeline on a platform and its own minimum gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    /// A train that halts at the platform.
    Stoppage,
    /// A train that passes the platform without halting.
    Through,
}

impl BookingKind {
    /// Both kinds, in a fixed order.
    pub const ALL: [BookingKind; 2] = [BookingKind::Stoppage, BookingKind::Through];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingKind::Stoppage => "stoppage",
            BookingKind::Through => "through",
        }
    }
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
