//! Station identity.

use std::fmt;

use serde::Deserialize;

/// How a station is identified.
///
/// A station is tagged either by text or by an integer. The variant is
/// chosen once, when the station is built, and never changes.
///
/// # Examples
///
/// ```
/// use station_scheduler::domain::StationId;
///
/// let id = StationId::from(1001);
/// assert_eq!(id.to_string(), "1001");
/// assert!(!id.is_text());
///
/// let id = StationId::from("KGX");
/// assert_eq!(id.as_text(), Some("KGX"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum StationId {
    Number(i64),
    Text(String),
}

impl StationId {
    /// Returns true for a text identity.
    pub fn is_text(&self) -> bool {
        matches!(self, StationId::Text(_))
    }

    /// Returns the text identity, if this station is tagged by text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StationId::Text(s) => Some(s),
            StationId::Number(_) => None,
        }
    }

    /// Returns the integer identity, if this station is tagged by number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            StationId::Number(n) => Some(*n),
            StationId::Text(_) => None,
        }
    }

    /// Human-readable name of the variant ("String" or "Integer").
    pub fn variant_name(&self) -> &'static str {
        match self {
            StationId::Text(_) => "String",
            StationId::Number(_) => "Integer",
        }
    }
}

impl From<i64> for StationId {
    fn from(n: i64) -> Self {
        StationId::Number(n)
    }
}

impl From<i32> for StationId {
    fn from(n: i32) -> Self {
        StationId::Number(i64::from(n))
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        StationId::Text(s.to_string())
    }
}

impl From<String> for StationId {
    fn from(s: String) -> Self {
        StationId::Text(s)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationId::Text(s) => f.write_str(s),
            StationId::Number(n) => write!(f, "{n}"),
        }
    }
}
