//! In-memory repository implementation.

use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{DayRecord, Employee};

use super::traits::{DayRecordRepository, EmployeeRepository};

/// Keeps employees and day records in memory, in insertion order.
///
/// The (employee, date) uniqueness check and the insert happen under one
/// write lock, so concurrent saves for the same day cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: RwLock<Vec<Employee>>,
    day_records: RwLock<Vec<DayRecord>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee.
    ///
    /// Registering an email that is already known updates the employee's
    /// details but keeps the day records already linked to them.
    pub fn register(&self, employee: Employee) {
        let mut employees = self.employees.write().unwrap_or_else(PoisonError::into_inner);
        match employees.iter_mut().find(|e| e.email == employee.email) {
            Some(existing) => {
                let mut day_records = std::mem::take(&mut existing.day_records);
                for id in employee.day_records {
                    if !day_records.contains(&id) {
                        day_records.push(id);
                    }
                }
                *existing = Employee {
                    email: employee.email,
                    salary_per_hour: employee.salary_per_hour,
                    day_records,
                };
            }
            None => employees.push(employee),
        }
    }
}

impl EmployeeRepository for InMemoryStore {
    fn find_by_email(&self, email: &str) -> LedgerResult<Option<Employee>> {
        let employees = self.employees.read().unwrap_or_else(PoisonError::into_inner);
        Ok(employees.iter().find(|e| e.email == email).cloned())
    }

    fn list_all(&self) -> LedgerResult<Vec<Employee>> {
        let employees = self.employees.read().unwrap_or_else(PoisonError::into_inner);
        Ok(employees.clone())
    }

    fn append_day_record(&self, email: &str, record_id: Uuid) -> LedgerResult<()> {
        let mut employees = self.employees.write().unwrap_or_else(PoisonError::into_inner);
        let employee = employees
            .iter_mut()
            .find(|e| e.email == email)
            .ok_or_else(|| LedgerError::EmployeeNotFound {
                email: email.to_string(),
            })?;
        employee.day_records.push(record_id);
        Ok(())
    }
}

impl DayRecordRepository for InMemoryStore {
    fn find_by_id(&self, id: Uuid) -> LedgerResult<Option<DayRecord>> {
        let records = self.day_records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    fn find_by_employee_and_date(
        &self,
        email: &str,
        date: NaiveDate,
    ) -> LedgerResult<Option<DayRecord>> {
        let records = self.day_records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .iter()
            .find(|r| r.employee_email == email && r.date == date)
            .cloned())
    }

    fn find_by_date(&self, date: NaiveDate) -> LedgerResult<Vec<DayRecord>> {
        let records = self.day_records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.iter().filter(|r| r.date == date).cloned().collect())
    }

    fn find_by_employee_and_month_year(
        &self,
        email: &str,
        month: u32,
        year: i32,
    ) -> LedgerResult<Vec<DayRecord>> {
        let records = self.day_records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .iter()
            .filter(|r| r.employee_email == email && r.month == month && r.year == year)
            .cloned()
            .collect())
    }

    fn save(&self, record: DayRecord) -> LedgerResult<DayRecord> {
        let mut records = self.day_records.write().unwrap_or_else(PoisonError::into_inner);
        if records
            .iter()
            .any(|r| r.employee_email == record.employee_email && r.date == record.date)
        {
            return Err(LedgerError::DayRecordExists {
                email: record.employee_email,
                date: record.date,
            });
        }
        records.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: DayRecord) -> LedgerResult<DayRecord> {
        let mut records = self.day_records.write().unwrap_or_else(PoisonError::into_inner);
        let stored = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| LedgerError::DayRecordNotFound {
                email: record.employee_email.clone(),
                date: record.date,
            })?;
        *stored = record.clone();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, day).unwrap()
    }

    fn store_with(emails: &[&str]) -> InMemoryStore {
        let store = InMemoryStore::new();
        for email in emails {
            store.register(Employee::new(*email, Decimal::new(10, 0)));
        }
        store
    }

    #[test]
    fn test_save_rejects_second_record_for_same_day() {
        let store = store_with(&["a@example.com"]);
        store
            .save(DayRecord::placeholder("a@example.com", date(1), "Office"))
            .unwrap();

        let result = store.save(DayRecord::placeholder("a@example.com", date(1), "Home"));

        assert!(matches!(
            result,
            Err(LedgerError::DayRecordExists { .. })
        ));
    }

    #[test]
    fn test_same_day_for_different_employees_is_allowed() {
        let store = store_with(&["a@example.com", "b@example.com"]);
        store
            .save(DayRecord::placeholder("a@example.com", date(1), "Office"))
            .unwrap();
        store
            .save(DayRecord::placeholder("b@example.com", date(1), "Office"))
            .unwrap();

        assert_eq!(store.find_by_date(date(1)).unwrap().len(), 2);
    }

    #[test]
    fn test_month_query_keeps_storage_order() {
        let store = store_with(&["a@example.com"]);
        for day in [15, 3, 9] {
            store
                .save(DayRecord::placeholder("a@example.com", date(day), "Office"))
                .unwrap();
        }
        store
            .save(DayRecord::placeholder(
                "a@example.com",
                NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
                "Office",
            ))
            .unwrap();

        let days: Vec<NaiveDate> = store
            .find_by_employee_and_month_year("a@example.com", 3, 2021)
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();

        assert_eq!(days, vec![date(15), date(3), date(9)]);
    }

    #[test]
    fn test_update_unknown_record_fails() {
        let store = store_with(&["a@example.com"]);
        let result = store.update(DayRecord::placeholder("a@example.com", date(1), "Office"));

        assert!(matches!(
            result,
            Err(LedgerError::DayRecordNotFound { .. })
        ));
    }

    #[test]
    fn test_append_day_record_to_unknown_employee_fails() {
        let store = store_with(&[]);
        let result = store.append_day_record("ghost@example.com", Uuid::new_v4());

        assert!(matches!(
            result,
            Err(LedgerError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_register_replaces_existing_employee() {
        let store = store_with(&["a@example.com"]);
        store.register(Employee::new("a@example.com", Decimal::new(20, 0)));

        let employees = store.list_all().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].salary_per_hour, Decimal::new(20, 0));
    }

    #[test]
    fn test_register_again_keeps_linked_day_records() {
        let store = store_with(&["a@example.com"]);
        let record = store
            .save(DayRecord::placeholder("a@example.com", date(1), "Office"))
            .unwrap();
        store.append_day_record("a@example.com", record.id).unwrap();

        store.register(Employee::new("a@example.com", Decimal::new(20, 0)));

        let employee = store.find_by_email("a@example.com").unwrap().unwrap();
        assert_eq!(employee.salary_per_hour, Decimal::new(20, 0));
        assert_eq!(employee.day_records, vec![record.id]);
    }
}
