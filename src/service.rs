//! Day record bookkeeping.
//!
//! [`DayRecordService`] validates and stores day records, enriches them with
//! worked hours and pay, aggregates monthly salary reports and runs the two
//! daily scans behind the periodic jobs. Every mutating operation validates
//! completely before it writes anything.

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use crate::calculation::{
    calculate_salary_with, gross_salary, hours_from_minutes, minutes_between, net_salary_with,
    pause_minutes, worked_hours,
};
use crate::clock::Clock;
use crate::config::{LedgerConfig, SalaryRules};
use crate::error::{LedgerError, LedgerResult};
use crate::format::{parse_date, parse_time};
use crate::models::{
    supplied, DayRecord, DayRecordInput, DayRecordPatch, DayRecordView, Employee,
    SalaryCalculation, SalaryReport,
};
use crate::notifier::Notifier;
use crate::repository::{DayRecordRepository, EmployeeRepository};

/// Outcome of one absence notification scan.
#[derive(Debug, Default)]
pub struct NotificationSummary {
    /// Employees who were reminded.
    pub notified: Vec<String>,
    /// Deliveries that failed; the scan carried on past each of them.
    pub failures: Vec<LedgerError>,
}

/// Orchestrates day record creation, editing, lookups and salary reports.
pub struct DayRecordService<E, D, N, C> {
    employees: E,
    day_records: D,
    notifier: N,
    clock: C,
    rules: SalaryRules,
    default_place: String,
}

impl<E, D, N, C> DayRecordService<E, D, N, C>
where
    E: EmployeeRepository,
    D: DayRecordRepository,
    N: Notifier,
    C: Clock,
{
    /// Creates a service over the given collaborators.
    pub fn new(
        employees: E,
        day_records: D,
        notifier: N,
        clock: C,
        config: &LedgerConfig,
    ) -> Self {
        Self {
            employees,
            day_records,
            notifier,
            clock,
            rules: config.salary.clone(),
            default_place: config.default_place.clone(),
        }
    }

    /// Returns the clock the service reads "today" from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Records a new working day for the employee.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if no employee has this email
    /// - `InvalidDate` / `InvalidTime` if a field is not in the external format
    /// - `DayRecordExists` if the employee already has a record for the date
    /// - `InvalidTimeSpan` / `InvalidDuration` if the times do not form a valid session
    ///
    /// The record is committed by the store's `save`. If linking it to the
    /// employee fails afterwards, the error is returned but the record stays
    /// stored: it is still found by date and still blocks a second create for
    /// that day.
    pub fn create_day_record(
        &self,
        email: &str,
        input: &DayRecordInput,
    ) -> LedgerResult<DayRecord> {
        let employee = self.employee(email)?;
        let date = parse_date(&input.date)?;

        if self
            .day_records
            .find_by_employee_and_date(&employee.email, date)?
            .is_some()
        {
            warn!(email = %employee.email, %date, "Day record already exists");
            return Err(LedgerError::DayRecordExists {
                email: employee.email,
                date,
            });
        }

        let time_from = parse_time(&input.time_from)?;
        let time_to = parse_time(&input.time_to)?;
        let pause = parse_time(&input.pause)?;
        validate_session(time_from, time_to, pause)?;

        let record = DayRecord::new(
            employee.email.clone(),
            date,
            input.place.clone(),
            time_from,
            time_to,
            pause,
        );
        let saved = self.day_records.save(record)?;
        self.link(&employee.email, &saved)?;

        info!(email = %employee.email, %date, record_id = %saved.id, "Day record created");
        Ok(saved)
    }

    /// Applies a partial update to the employee's record for `patch.date`.
    ///
    /// Only fields the caller supplied with a non-empty value change. When any
    /// of the times change, the resulting session is validated again before
    /// it is stored.
    pub fn edit_day_record(
        &self,
        email: &str,
        patch: &DayRecordPatch,
    ) -> LedgerResult<DayRecord> {
        let employee = self.employee(email)?;
        let date = parse_date(&patch.date)?;

        let mut record = self
            .day_records
            .find_by_employee_and_date(&employee.email, date)?
            .ok_or_else(|| LedgerError::DayRecordNotFound {
                email: employee.email.clone(),
                date,
            })?;

        let time_from = supplied(&patch.time_from).map(parse_time).transpose()?;
        let time_to = supplied(&patch.time_to).map(parse_time).transpose()?;
        let pause = supplied(&patch.pause).map(parse_time).transpose()?;
        let times_changed = time_from.is_some() || time_to.is_some() || pause.is_some();

        if let Some(place) = supplied(&patch.place) {
            record.place = place.to_string();
        }
        if let Some(time_from) = time_from {
            record.time_from = time_from;
        }
        if let Some(time_to) = time_to {
            record.time_to = time_to;
        }
        if let Some(pause) = pause {
            record.pause = pause;
        }

        if times_changed {
            validate_session(record.time_from, record.time_to, record.pause)?;
        }

        let updated = self.day_records.update(record)?;
        info!(email = %employee.email, %date, record_id = %updated.id, "Day record edited");
        Ok(updated)
    }

    /// Returns all of the employee's records, in the order they were stored.
    pub fn get_all_day_records(&self, email: &str) -> LedgerResult<Vec<DayRecordView>> {
        let employee = self.employee(email)?;

        let mut views = Vec::with_capacity(employee.day_records.len());
        for id in &employee.day_records {
            match self.day_records.find_by_id(*id)? {
                Some(record) => views.push(self.view(&employee, &record)?),
                None => {
                    debug!(email = %employee.email, record_id = %id, "Skipping missing day record")
                }
            }
        }
        Ok(views)
    }

    /// Returns the employee's records in the month of `reference_date`.
    pub fn get_all_day_records_for_month(
        &self,
        email: &str,
        reference_date: &str,
    ) -> LedgerResult<Vec<DayRecordView>> {
        let employee = self.employee(email)?;
        let records = self.records_in_month(&employee, parse_date(reference_date)?)?;

        records
            .iter()
            .map(|record| self.view(&employee, record))
            .collect()
    }

    /// Returns the employee's record for a single day.
    pub fn get_day_record(&self, email: &str, date: &str) -> LedgerResult<DayRecordView> {
        let employee = self.employee(email)?;
        let date = parse_date(date)?;

        let record = self
            .day_records
            .find_by_employee_and_date(&employee.email, date)?
            .ok_or_else(|| LedgerError::DayRecordNotFound {
                email: employee.email.clone(),
                date,
            })?;
        self.view(&employee, &record)
    }

    /// Builds the salary report for the month of `reference_date`.
    ///
    /// Worked minutes are summed across the month first; gross pay is the
    /// total multiplied by the hourly rate, and the reported hours are
    /// derived from the same minute total.
    pub fn get_calculated_salary(
        &self,
        email: &str,
        reference_date: &str,
    ) -> LedgerResult<SalaryReport> {
        let employee = self.employee(email)?;
        let reference_date = parse_date(reference_date)?;

        let mut total_minutes = 0;
        for record in self.records_in_month(&employee, reference_date)? {
            total_minutes += record.worked_minutes()?;
        }
        let total_salary = gross_salary(total_minutes, employee.salary_per_hour)?;

        Ok(SalaryReport {
            month: reference_date.format("%B").to_string().to_uppercase(),
            total_hours: hours_from_minutes(total_minutes),
            total_salary,
            clear_salary: net_salary_with(&self.rules, total_salary)?,
        })
    }

    /// Reminds every employee who has no record for today.
    ///
    /// A failed delivery is recorded in the summary and the scan moves on to
    /// the next employee.
    pub fn send_notification_if_day_record_doesnt_exist(
        &self,
    ) -> LedgerResult<NotificationSummary> {
        self.send_notifications_for(self.clock.today())
    }

    /// Reminds every employee who has no record for `date`.
    pub fn send_notifications_for(&self, date: NaiveDate) -> LedgerResult<NotificationSummary> {
        let mut summary = NotificationSummary::default();

        for employee in self.employees.list_all()? {
            if self
                .day_records
                .find_by_employee_and_date(&employee.email, date)?
                .is_some()
            {
                continue;
            }

            match self.notifier.notify(&employee.email) {
                Ok(()) => {
                    debug!(email = %employee.email, "Absence reminder sent");
                    summary.notified.push(employee.email);
                }
                Err(err) => {
                    warn!(email = %employee.email, error = %err, "Absence reminder failed");
                    summary.failures.push(LedgerError::NotificationFailed {
                        email: employee.email,
                        message: err.message,
                    });
                }
            }
        }

        info!(
            %date,
            notified = summary.notified.len(),
            failed = summary.failures.len(),
            "Absence notification scan finished"
        );
        Ok(summary)
    }

    /// Stores a zero-hour placeholder for every employee without a record today.
    ///
    /// Returns the placeholders created; running it again the same day
    /// creates none.
    pub fn record_default_record(&self) -> LedgerResult<Vec<DayRecord>> {
        self.record_default_records_for(self.clock.today())
    }

    /// Stores a zero-hour placeholder for every employee without a record on `date`.
    ///
    /// An employee whose own record lands between the lookup and the save is
    /// treated as having logged the day.
    pub fn record_default_records_for(&self, date: NaiveDate) -> LedgerResult<Vec<DayRecord>> {
        let mut created = Vec::new();

        for employee in self.employees.list_all()? {
            if self
                .day_records
                .find_by_employee_and_date(&employee.email, date)?
                .is_some()
            {
                continue;
            }

            let record =
                DayRecord::placeholder(employee.email.clone(), date, self.default_place.clone());
            let saved = match self.day_records.save(record) {
                Ok(saved) => saved,
                Err(LedgerError::DayRecordExists { .. }) => {
                    debug!(email = %employee.email, %date, "Day record logged during scan");
                    continue;
                }
                Err(err) => return Err(err),
            };
            self.link(&employee.email, &saved)?;
            created.push(saved);
        }

        info!(%date, created = created.len(), "Default day records written");
        Ok(created)
    }

    /// Runs the stand-alone salary calculator.
    ///
    /// # Errors
    ///
    /// Returns `CalculationOverflow` if the inputs are too large to multiply.
    pub fn calculated_salary(
        &self,
        hours: Decimal,
        salary_per_hour: Decimal,
    ) -> LedgerResult<SalaryCalculation> {
        calculate_salary_with(&self.rules, hours, salary_per_hour)
    }

    /// Returns the zeroed state for a fresh calculator session.
    pub fn calculator_init(&self) -> SalaryCalculation {
        SalaryCalculation::init()
    }

    fn employee(&self, email: &str) -> LedgerResult<Employee> {
        self.employees
            .find_by_email(email)?
            .ok_or_else(|| LedgerError::EmployeeNotFound {
                email: email.to_string(),
            })
    }

    fn records_in_month(
        &self,
        employee: &Employee,
        reference_date: NaiveDate,
    ) -> LedgerResult<Vec<DayRecord>> {
        self.day_records.find_by_employee_and_month_year(
            &employee.email,
            reference_date.month(),
            reference_date.year(),
        )
    }

    fn link(&self, email: &str, record: &DayRecord) -> LedgerResult<()> {
        self.employees
            .append_day_record(email, record.id)
            .inspect_err(|err| {
                error!(
                    email,
                    date = %record.date,
                    record_id = %record.id,
                    error = %err,
                    "Day record stored but not linked to its employee"
                )
            })
    }

    fn view(&self, employee: &Employee, record: &DayRecord) -> LedgerResult<DayRecordView> {
        let minutes = record.worked_minutes()?;
        Ok(DayRecordView::new(
            record,
            hours_from_minutes(minutes),
            gross_salary(minutes, employee.salary_per_hour)?,
        ))
    }
}

/// Checks that arrival, departure and pause describe a real working session.
///
/// Besides the span invariants enforced by [`worked_hours`], the time left
/// after the pause may not be shorter than the pause itself.
fn validate_session(
    time_from: NaiveTime,
    time_to: NaiveTime,
    pause: NaiveTime,
) -> LedgerResult<()> {
    if time_from == time_to {
        return Err(LedgerError::InvalidTimeSpan {
            message: format!("arrival and departure are both {}", time_from),
        });
    }

    worked_hours(time_from, time_to, pause)?;

    let pause = pause_minutes(pause);
    let net = minutes_between(time_from, time_to) - pause;
    if net < pause {
        return Err(LedgerError::InvalidTimeSpan {
            message: format!("pause of {} minutes exceeds the {} minutes worked", pause, net),
        });
    }
    Ok(())
}
