//! Persistence contracts the day-record service depends on.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::LedgerResult;
use crate::models::{DayRecord, Employee};

/// Read access to registered employees plus appending to their record list.
pub trait EmployeeRepository: Send + Sync {
    /// Looks up an employee by email.
    fn find_by_email(&self, email: &str) -> LedgerResult<Option<Employee>>;

    /// Returns every registered employee.
    fn list_all(&self) -> LedgerResult<Vec<Employee>>;

    /// Appends a stored day record to the employee's collection.
    ///
    /// Called only after [`DayRecordRepository::save`] has accepted the
    /// record. The save is the commit point: a record whose append fails is
    /// still stored, still found by employee and date, and missing only from
    /// the employee's ordered list.
    fn append_day_record(&self, email: &str, record_id: Uuid) -> LedgerResult<()>;
}

/// Storage of day records.
pub trait DayRecordRepository: Send + Sync {
    /// Looks up a record by id.
    fn find_by_id(&self, id: Uuid) -> LedgerResult<Option<DayRecord>>;

    /// Looks up the employee's record for `date`.
    fn find_by_employee_and_date(
        &self,
        email: &str,
        date: NaiveDate,
    ) -> LedgerResult<Option<DayRecord>>;

    /// Returns every employee's record for `date`.
    ///
    /// Part of the store contract for other consumers of the ledger; the
    /// service itself always looks records up by employee and date.
    fn find_by_date(&self, date: NaiveDate) -> LedgerResult<Vec<DayRecord>>;

    /// Returns the employee's records for a month, in storage order.
    fn find_by_employee_and_month_year(
        &self,
        email: &str,
        month: u32,
        year: i32,
    ) -> LedgerResult<Vec<DayRecord>>;

    /// Stores a new record.
    ///
    /// Fails with `DayRecordExists` when the employee already has a record
    /// for the same date.
    fn save(&self, record: DayRecord) -> LedgerResult<DayRecord>;

    /// Replaces a stored record with the same id.
    fn update(&self, record: DayRecord) -> LedgerResult<DayRecord>;
}

impl<T: EmployeeRepository + ?Sized> EmployeeRepository for Arc<T> {
    fn find_by_email(&self, email: &str) -> LedgerResult<Option<Employee>> {
        (**self).find_by_email(email)
    }

    fn list_all(&self) -> LedgerResult<Vec<Employee>> {
        (**self).list_all()
    }

    fn append_day_record(&self, email: &str, record_id: Uuid) -> LedgerResult<()> {
        (**self).append_day_record(email, record_id)
    }
}

impl<T: DayRecordRepository + ?Sized> DayRecordRepository for Arc<T> {
    fn find_by_id(&self, id: Uuid) -> LedgerResult<Option<DayRecord>> {
        (**self).find_by_id(id)
    }

    fn find_by_employee_and_date(
        &self,
        email: &str,
        date: NaiveDate,
    ) -> LedgerResult<Option<DayRecord>> {
        (**self).find_by_employee_and_date(email, date)
    }

    fn find_by_date(&self, date: NaiveDate) -> LedgerResult<Vec<DayRecord>> {
        (**self).find_by_date(date)
    }

    fn find_by_employee_and_month_year(
        &self,
        email: &str,
        month: u32,
        year: i32,
    ) -> LedgerResult<Vec<DayRecord>> {
        (**self).find_by_employee_and_month_year(email, month, year)
    }

    fn save(&self, record: DayRecord) -> LedgerResult<DayRecord> {
        (**self).save(record)
    }

    fn update(&self, record: DayRecord) -> LedgerResult<DayRecord> {
        (**self).update(record)
    }
}
