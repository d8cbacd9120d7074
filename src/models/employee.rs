//! Employee model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An hourly-paid employee.
///
/// Employees are registered outside the ledger; the ledger only appends to
/// their day record collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique email address identifying the employee.
    pub email: String,
    /// Gross pay per hour worked.
    pub salary_per_hour: Decimal,
    /// Ids of the employee's day records, in the order they were stored.
    #[serde(default)]
    pub day_records: Vec<Uuid>,
}

impl Employee {
    /// Creates an employee with no day records.
    ///
    /// # Examples
    ///
    /// ```
    /// use hours_ledger::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("jane@example.com", Decimal::new(1250, 2));
    /// assert!(employee.day_records.is_empty());
    /// ```
    pub fn new(email: impl Into<String>, salary_per_hour: Decimal) -> Self {
        Self {
            email: email.into(),
            salary_per_hour,
            day_records: Vec::new(),
        }
    }
}
