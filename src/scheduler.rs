//! Wall-clock triggering of the periodic jobs.
//!
//! Each job runs in its own `tokio` task that sleeps until the trigger's next
//! firing time, runs the job to completion and goes back to sleep. The two
//! tasks share nothing but the service.
//!
//! Sleeping is measured on the runtime's monotonic timer, but firing is
//! decided by the service's wall clock: a task that wakes before the clock
//! reads the firing time goes back to sleep, and the job runs for the date of
//! the firing time rather than whatever "today" is once it wakes. Jobs call
//! blocking collaborators, so they run on the blocking thread pool.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::clock::Clock;
use crate::config::{DailyTrigger, ScheduleConfig};
use crate::jobs::{notify_missing_day_records, record_default_day_records};
use crate::notifier::Notifier;
use crate::repository::{DayRecordRepository, EmployeeRepository};
use crate::service::DayRecordService;

/// How far past its firing time a job may start before the run is logged as late.
const LATE_TOLERANCE_SECS: i64 = 30;

type Job<E, D, N, C> = fn(&DayRecordService<E, D, N, C>, NaiveDate);

impl DailyTrigger {
    /// Returns the first firing time strictly after `now`.
    ///
    /// Returns `None` if the trigger is not active on any weekday.
    ///
    /// # Examples
    ///
    /// ```
    /// use hours_ledger::config::DailyTrigger;
    /// use chrono::{NaiveDate, NaiveTime, Weekday};
    ///
    /// let trigger = DailyTrigger {
    ///     at: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
    ///     weekdays: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
    /// };
    ///
    /// // 2021-03-05 is a Friday; the next run after Friday evening is Monday.
    /// let friday_night = NaiveDate::from_ymd_opt(2021, 3, 5).unwrap().and_hms_opt(21, 0, 0).unwrap();
    /// let monday = NaiveDate::from_ymd_opt(2021, 3, 8).unwrap().and_hms_opt(20, 0, 0).unwrap();
    /// assert_eq!(trigger.next_run_after(friday_night), Some(monday));
    /// ```
    pub fn next_run_after(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        (0..=7)
            .filter_map(|offset| now.date().checked_add_days(Days::new(offset)))
            .filter(|day| self.weekdays.contains(&day.weekday()))
            .map(|day| day.and_time(self.at))
            .find(|candidate| *candidate > now)
    }
}

/// Spawns the notification and default-record jobs on the current runtime.
///
/// The returned handles run until aborted.
pub fn spawn_jobs<E, D, N, C>(
    service: Arc<DayRecordService<E, D, N, C>>,
    schedules: &ScheduleConfig,
) -> Vec<JoinHandle<()>>
where
    E: EmployeeRepository + 'static,
    D: DayRecordRepository + 'static,
    N: Notifier + 'static,
    C: Clock + 'static,
{
    vec![
        spawn_job(
            "notification",
            schedules.notification.clone(),
            Arc::clone(&service),
            notify_missing_day_records,
        ),
        spawn_job(
            "default_record",
            schedules.default_record.clone(),
            service,
            record_default_day_records,
        ),
    ]
}

fn spawn_job<E, D, N, C>(
    name: &'static str,
    trigger: DailyTrigger,
    service: Arc<DayRecordService<E, D, N, C>>,
    job: Job<E, D, N, C>,
) -> JoinHandle<()>
where
    E: EmployeeRepository + 'static,
    D: DayRecordRepository + 'static,
    N: Notifier + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        let mut last_run: Option<NaiveDateTime> = None;
        loop {
            // A clock stepped back after a run must not fire the same slot twice.
            let now = service.clock().now();
            let from = last_run.map_or(now, |last| last.max(now));
            let Some(next_run) = trigger.next_run_after(from) else {
                warn!(job = name, "Trigger has no active weekdays, job disabled");
                return;
            };

            wait_until(service.clock(), name, next_run).await;

            let late = service.clock().now() - next_run;
            if late > TimeDelta::seconds(LATE_TOLERANCE_SECS) {
                warn!(job = name, %next_run, late_secs = late.num_seconds(), "Running late");
            }
            info!(job = name, date = %next_run.date(), "Running scheduled job");

            let run_service = Arc::clone(&service);
            let run_date = next_run.date();
            if let Err(err) = tokio::task::spawn_blocking(move || job(&run_service, run_date)).await
            {
                error!(job = name, error = %err, "Scheduled job panicked");
            }
            last_run = Some(next_run);
        }
    })
}

/// Sleeps until the wall clock reads at least `target`, re-reading it after
/// every wake-up.
async fn wait_until<C: Clock>(clock: &C, job: &'static str, target: NaiveDateTime) {
    loop {
        let now = clock.now();
        if now >= target {
            return;
        }

        let wait = (target - now).to_std().unwrap_or_default();
        debug!(job, %target, wait_secs = wait.as_secs(), "Waiting for next run");
        tokio::time::sleep(wait).await;
    }
}
