//! External date and time formats.
//!
//! Callers exchange dates as `dd-MM-uuuu` and times as `HH:mm`. Parsing is
//! strict: both fields must be zero-padded and the date must exist in the
//! calendar, so `29-02-2021` is rejected.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{LedgerError, LedgerResult};

const DATE_FORMAT: &str = "%d-%m-%Y";
const TIME_FORMAT: &str = "%H:%M";

/// Parses a `dd-MM-uuuu` date.
///
/// # Examples
///
/// ```
/// use hours_ledger::format::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("01-03-2021").unwrap(),
///     NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()
/// );
/// assert!(parse_date("29-02-2021").is_err());
/// assert!(parse_date("1-3-2021").is_err());
/// ```
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    if !has_shape(input, &[2, 2, 4], '-') {
        return Err(LedgerError::InvalidDate {
            input: input.to_string(),
            source: None,
        });
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| LedgerError::InvalidDate {
        input: input.to_string(),
        source: Some(e),
    })
}

/// Parses an `HH:mm` time.
pub fn parse_time(input: &str) -> LedgerResult<NaiveTime> {
    if !has_shape(input, &[2, 2], ':') {
        return Err(LedgerError::InvalidTime {
            input: input.to_string(),
            source: None,
        });
    }

    NaiveTime::parse_from_str(input, TIME_FORMAT).map_err(|e| LedgerError::InvalidTime {
        input: input.to_string(),
        source: Some(e),
    })
}

/// Formats a date as `dd-MM-uuuu`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a time as `HH:mm`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Checks that `input` is digit groups of exactly the given widths joined by `separator`.
fn has_shape(input: &str, widths: &[usize], separator: char) -> bool {
    let groups: Vec<&str> = input.split(separator).collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, &width)| {
                group.len() == width && group.bytes().all(|b| b.is_ascii_digit())
            })
}
