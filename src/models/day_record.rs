//! Day record model.

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{worked_hours, worked_minutes};
use crate::error::LedgerResult;

/// One employee's work session for a single calendar day.
///
/// At most one day record exists per employee and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Identity assigned when the record is created.
    pub id: Uuid,
    /// Calendar year of `date`.
    pub year: i32,
    /// Month of `date`, 1 through 12.
    pub month: u32,
    /// The day the session took place.
    pub date: NaiveDate,
    /// Where the work was done.
    pub place: String,
    /// Arrival time.
    pub time_from: NaiveTime,
    /// Departure time.
    pub time_to: NaiveTime,
    /// Pause length, encoded as a time of day counted from midnight.
    pub pause: NaiveTime,
    /// Email of the owning employee.
    pub employee_email: String,
}

impl DayRecord {
    /// Creates a record with a fresh id, deriving year and month from `date`.
    pub fn new(
        employee_email: impl Into<String>,
        date: NaiveDate,
        place: impl Into<String>,
        time_from: NaiveTime,
        time_to: NaiveTime,
        pause: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            year: date.year(),
            month: date.month(),
            date,
            place: place.into(),
            time_from,
            time_to,
            pause,
            employee_email: employee_email.into(),
        }
    }

    /// Creates the zero-length placeholder stored for an employee who did not log a day.
    pub fn placeholder(
        employee_email: impl Into<String>,
        date: NaiveDate,
        place: impl Into<String>,
    ) -> Self {
        Self::new(
            employee_email,
            date,
            place,
            NaiveTime::MIN,
            NaiveTime::MIN,
            NaiveTime::MIN,
        )
    }

    /// Returns the whole minutes worked in this session.
    pub fn worked_minutes(&self) -> LedgerResult<i64> {
        worked_minutes(self.time_from, self.time_to, self.pause)
    }

    /// Returns the hours worked in this session.
    pub fn worked_hours(&self) -> LedgerResult<Decimal> {
        worked_hours(self.time_from, self.time_to, self.pause)
    }
}
