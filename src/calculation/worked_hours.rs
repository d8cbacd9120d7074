//! Worked hours arithmetic.
//!
//! Day records store arrival, departure and pause as wall-clock times with
//! no date component. The pause is encoded as a time of day counted from
//! midnight, so a pause of `00:30` means thirty minutes.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

pub(super) const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Returns the number of whole minutes from `from` to `to`.
///
/// Both times are taken to be on the same day; the result is negative when
/// `to` is earlier than `from`. Seconds are ignored.
///
/// # Examples
///
/// ```
/// use hours_ledger::calculation::minutes_between;
/// use chrono::NaiveTime;
///
/// let from = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let to = NaiveTime::from_hms_opt(16, 30, 0).unwrap();
/// assert_eq!(minutes_between(from, to), 510);
/// assert_eq!(minutes_between(to, from), -510);
/// ```
pub fn minutes_between(from: NaiveTime, to: NaiveTime) -> i64 {
    minute_of_day(to) - minute_of_day(from)
}

/// Returns the length of a pause in minutes.
pub fn pause_minutes(pause: NaiveTime) -> i64 {
    minutes_between(NaiveTime::MIN, pause)
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Computes the whole minutes worked in a single session.
///
/// The worked time is the span from `time_from` to `time_to` minus the pause.
/// Monthly totals and pay are summed from minutes so that no repeating
/// fraction of an hour is ever truncated before the rate is applied.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidDuration`] if `time_to` is earlier than
/// `time_from`, or if the pause is longer than the span itself.
pub fn worked_minutes(
    time_from: NaiveTime,
    time_to: NaiveTime,
    pause: NaiveTime,
) -> LedgerResult<i64> {
    let span = minutes_between(time_from, time_to);
    if span < 0 {
        return Err(LedgerError::InvalidDuration {
            message: format!("session ends at {} before it starts at {}", time_to, time_from),
        });
    }

    let pause = pause_minutes(pause);
    if pause > span {
        return Err(LedgerError::InvalidDuration {
            message: format!("pause of {} minutes exceeds the {} minute session", pause, span),
        });
    }

    Ok(span - pause)
}

/// Converts a minute count into hours.
pub fn hours_from_minutes(minutes: i64) -> Decimal {
    Decimal::from(minutes) / MINUTES_PER_HOUR
}

/// Computes the hours worked in a single session.
///
/// # Errors
///
/// Same as [`worked_minutes`].
///
/// # Examples
///
/// ```
/// use hours_ledger::calculation::worked_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let hours = worked_hours(
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
///     NaiveTime::from_hms_opt(0, 30, 0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(hours, Decimal::new(80, 1)); // 8.0 hours
/// ```
pub fn worked_hours(
    time_from: NaiveTime,
    time_to: NaiveTime,
    pause: NaiveTime,
) -> LedgerResult<Decimal> {
    worked_minutes(time_from, time_to, pause).map(hours_from_minutes)
}
