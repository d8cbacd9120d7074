//! Derived results: enriched day records, monthly salary reports and the
//! salary calculator's input/output. None of these are persisted.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DayRecord;

/// A day record together with the hours and pay it accounts for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecordView {
    /// Id of the underlying record.
    pub id: Uuid,
    /// The day worked.
    pub date: NaiveDate,
    /// Where the work was done.
    pub place: String,
    /// Arrival time.
    pub time_from: NaiveTime,
    /// Departure time.
    pub time_to: NaiveTime,
    /// Pause length.
    pub pause: NaiveTime,
    /// Hours worked that day.
    pub total_hours: Decimal,
    /// Gross pay for that day.
    pub total_salary: Decimal,
}

impl DayRecordView {
    /// Builds the view of `record` given its computed hours and pay.
    pub fn new(record: &DayRecord, total_hours: Decimal, total_salary: Decimal) -> Self {
        Self {
            id: record.id,
            date: record.date,
            place: record.place.clone(),
            time_from: record.time_from,
            time_to: record.time_to,
            pause: record.pause,
            total_hours,
            total_salary,
        }
    }
}

/// Salary summary for one employee and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// Upper-case English month name, e.g. `"MARCH"`.
    pub month: String,
    /// Hours worked across the month.
    pub total_hours: Decimal,
    /// Gross pay for the month.
    pub total_salary: Decimal,
    /// Net pay after levies and tax.
    pub clear_salary: Decimal,
}

/// Input and output of the stand-alone salary calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// Hours worked.
    pub total_hours: Decimal,
    /// Gross pay per hour.
    pub salary_per_hour: Decimal,
    /// Gross pay.
    pub total_salary: Decimal,
    /// Gross pay plus the employer's contributions.
    pub super_total_salary: Decimal,
    /// Levies deducted, rounded to cents.
    pub levies: Decimal,
    /// Income tax deducted, rounded to cents.
    pub tax: Decimal,
    /// Net pay.
    pub clear_salary: Decimal,
}

impl SalaryCalculation {
    /// Returns the zeroed state a fresh calculator session starts from.
    pub fn init() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            salary_per_hour: Decimal::ZERO,
            total_salary: Decimal::ZERO,
            super_total_salary: Decimal::ZERO,
            levies: Decimal::ZERO,
            tax: Decimal::ZERO,
            clear_salary: Decimal::ZERO,
        }
    }
}
