//! Caller-supplied day record data.
//!
//! Fields are strings in the external formats: dates as `dd-MM-uuuu` and
//! times as `HH:mm`. They are parsed by the service before anything is
//! stored.

use serde::{Deserialize, Serialize};

/// Data for a new day record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecordInput {
    /// The day worked, `dd-MM-uuuu`.
    pub date: String,
    /// Where the work was done.
    pub place: String,
    /// Arrival time, `HH:mm`.
    pub time_from: String,
    /// Departure time, `HH:mm`.
    pub time_to: String,
    /// Pause length as `HH:mm`, so `00:30` is thirty minutes.
    pub pause: String,
}

/// A partial update of an existing day record.
///
/// `date` selects the record. Every other field is applied only when it is
/// present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecordPatch {
    /// The day of the record to edit, `dd-MM-uuuu`.
    pub date: String,
    /// New place.
    #[serde(default)]
    pub place: Option<String>,
    /// New arrival time, `HH:mm`.
    #[serde(default)]
    pub time_from: Option<String>,
    /// New departure time, `HH:mm`.
    #[serde(default)]
    pub time_to: Option<String>,
    /// New pause, `HH:mm`.
    #[serde(default)]
    pub pause: Option<String>,
}

impl DayRecordPatch {
    /// Creates a patch for the record on `date` that changes nothing yet.
    pub fn for_date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }
}

/// Returns the field's value if the caller actually supplied one.
pub(crate) fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
