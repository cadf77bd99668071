use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw "HH:MM" clock value as typed by the user.
///
/// The value is never validated: anything non-empty is kept verbatim and
/// interpreted later by `to_minutes`, which degrades malformed parts to 0.
/// Absence is modelled with `Option<TimeOfDay>` rather than an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(String);

impl TimeOfDay {
    /// Empty input means "not recorded".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert an optional DB/CLI string into an optional clock value.
pub fn optional(raw: Option<&str>) -> Option<TimeOfDay> {
    raw.and_then(TimeOfDay::parse)
}
