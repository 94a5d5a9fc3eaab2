//! Named lines served by a station.

use std::fmt;

/// Error returned when a line name is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line: {reason}")]
pub struct InvalidLine {
    reason: &'static str,
}

/// A named line served by a station.
///
/// Names are non-empty. Two lines may share a name.
///
/// ```
/// use station_scheduler::domain::Line;
///
/// assert_eq!(Line::new("Blue Line").unwrap().name(), "Blue Line");
/// assert!(Line::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    name: String,
}

impl Line {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidLine> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidLine {
                reason: "name must not be empty",
            });
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
