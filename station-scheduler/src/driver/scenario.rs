//! Booking scenarios.
//!
//! A scenario describes one station and an ordered batch of booking
//! requests. Scenarios are read from JSON:
//!
//! ```json
//! {
//!   "station": 1001,
//!   "lines": ["Blue Line", "Yellow Line"],
//!   "platforms": [1, 2],
//!   "date": "2024-03-15",
//!   "gaps": { "stoppage_gap_mins": 30, "through_gap_mins": 10 },
//!   "bookings": [
//!     { "platform": 1, "kind": "stoppage", "time": "10:00" },
//!     { "platform": 1, "kind": "through", "time": "10:29:30" }
//!   ]
//! }
//! ```
//!
//! Only `station` is required.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{BookingKind, Instant, StationId};
use crate::schedule::GapConfig;

use super::error::DriverError;

/// Date used when a scenario does not name one.
const DEFAULT_DATE: &str = "2024-01-01";

/// One booking request as written in a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingRequest {
    pub platform: i32,
    pub kind: BookingKind,
    /// "HH:MM" or "HH:MM:SS" on the scenario date.
    pub time: String,
}

impl BookingRequest {
    pub fn new(platform: i32, kind: BookingKind, time: impl Into<String>) -> Self {
        Self {
            platform,
            kind,
            time: time.into(),
        }
    }
}

/// A station setup plus the bookings to issue against it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    pub station: StationId,

    #[serde(default)]
    pub lines: Vec<String>,

    #[serde(default)]
    pub platforms: Vec<i32>,

    /// Calendar date for every booking time ("YYYY-MM-DD").
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub gaps: GapConfig,

    #[serde(default)]
    pub bookings: Vec<BookingRequest>,
}

impl Scenario {
    /// The demonstration run: station 1001 with two lines and two
    /// platforms, and four bookings on platform 1 of which the last two
    /// conflict.
    pub fn reference() -> Self {
        Self {
            station: StationId::Number(1001),
            lines: vec!["Blue Line".to_string(), "Yellow Line".to_string()],
            platforms: vec![1, 2],
            date: None,
            gaps: GapConfig::default(),
            bookings: vec![
                BookingRequest::new(1, BookingKind::Stoppage, "10:00"),
                BookingRequest::new(1, BookingKind::Through, "10:30"),
                BookingRequest::new(1, BookingKind::Stoppage, "10:15"),
                BookingRequest::new(1, BookingKind::Through, "10:05"),
            ],
        }
    }

    pub fn from_json(s: &str) -> Result<Self, DriverError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DriverError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// The calendar date bookings are placed on.
    pub fn date(&self) -> Result<NaiveDate, DriverError> {
        let value = self.date.as_deref().unwrap_or(DEFAULT_DATE);
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| DriverError::InvalidDate {
            value: value.to_string(),
            source,
        })
    }

    /// Parse every booking time, in request order.
    pub fn instants(&self) -> Result<Vec<Instant>, DriverError> {
        let date = self.date()?;
        self.bookings
            .iter()
            .map(|b| Instant::parse_hhmm(&b.time, date).map_err(DriverError::from))
            .collect()
    }
}
