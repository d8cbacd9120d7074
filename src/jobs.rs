//! The two periodic jobs.
//!
//! Each job is a plain function over a [`DayRecordService`] and the day it
//! runs for. Failures are logged and swallowed: whoever triggers a job does
//! not retry it.

use chrono::NaiveDate;
use tracing::{error, info};

use crate::clock::Clock;
use crate::notifier::Notifier;
use crate::repository::{DayRecordRepository, EmployeeRepository};
use crate::service::DayRecordService;

/// Reminds employees who have not logged a day record for `date`.
pub fn notify_missing_day_records<E, D, N, C>(
    service: &DayRecordService<E, D, N, C>,
    date: NaiveDate,
) where
    E: EmployeeRepository,
    D: DayRecordRepository,
    N: Notifier,
    C: Clock,
{
    match service.send_notifications_for(date) {
        Ok(summary) => {
            for failure in &summary.failures {
                error!(error = %failure, "Absence reminder not delivered");
            }
            info!(
                %date,
                notified = summary.notified.len(),
                failed = summary.failures.len(),
                "Notification job finished"
            );
        }
        Err(err) => error!(error = %err, "Notification job failed"),
    }
}

/// Writes placeholder day records for employees who did not log `date`.
pub fn record_default_day_records<E, D, N, C>(
    service: &DayRecordService<E, D, N, C>,
    date: NaiveDate,
) where
    E: EmployeeRepository,
    D: DayRecordRepository,
    N: Notifier,
    C: Clock,
{
    match service.record_default_records_for(date) {
        Ok(created) => info!(%date, created = created.len(), "Default record job finished"),
        Err(err) => error!(error = %err, "Default record job failed"),
    }
}
