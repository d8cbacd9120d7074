//! Error types for the hours ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the day-record and salary operations can report.

use chrono::NaiveDate;
use thiserror::Error;

/// Broad classification of a [`LedgerError`].
///
/// The transport layer maps these onto its own status codes; the
/// bookkeeping core never deals with HTTP directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An employee or day record lookup by key failed.
    NotFound,
    /// A day record already exists for the employee and date.
    Conflict,
    /// The caller supplied malformed or inconsistent data.
    Validation,
    /// The ledger configuration could not be loaded.
    Configuration,
}

impl ErrorKind {
    /// Returns the HTTP status code equivalent of this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Validation => 400,
            ErrorKind::Configuration => 500,
        }
    }
}

/// The main error type for the hours ledger.
///
/// # Example
///
/// ```
/// use hours_ledger::error::{ErrorKind, LedgerError};
///
/// let error = LedgerError::EmployeeNotFound {
///     email: "jane@example.com".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: jane@example.com");
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No employee is registered under the given email.
    #[error("Employee not found: {email}")]
    EmployeeNotFound {
        /// The email that was looked up.
        email: String,
    },

    /// The employee has no day record for the given date.
    #[error("Day record not found for '{email}' on {date}")]
    DayRecordNotFound {
        /// The owning employee's email.
        email: String,
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// A day record already exists for the employee and date.
    #[error("Day record already exists for '{email}' on {date}")]
    DayRecordExists {
        /// The owning employee's email.
        email: String,
        /// The conflicting date.
        date: NaiveDate,
    },

    /// A computed duration came out negative.
    #[error("Invalid duration: {message}")]
    InvalidDuration {
        /// A description of the offending duration.
        message: String,
    },

    /// The arrival, departure and pause times do not form a valid session.
    #[error("Invalid time span: {message}")]
    InvalidTimeSpan {
        /// A description of what made the span invalid.
        message: String,
    },

    /// A date did not match the `dd-MM-uuuu` format.
    #[error("Invalid date '{input}', expected dd-MM-yyyy")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// The underlying parse failure, absent when the input had the wrong shape.
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// A time did not match the `HH:mm` format.
    #[error("Invalid time '{input}', expected HH:mm")]
    InvalidTime {
        /// The rejected input.
        input: String,
        /// The underlying parse failure, absent when the input had the wrong shape.
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// A salary figure does not fit in the decimal range.
    #[error("Calculation overflow: {message}")]
    CalculationOverflow {
        /// The figure that overflowed.
        message: String,
    },

    /// The absence notification could not be delivered.
    #[error("Failed to notify '{email}': {message}")]
    NotificationFailed {
        /// The recipient's email.
        email: String,
        /// A description of the delivery failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl LedgerError {
    /// Classifies this error into its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::EmployeeNotFound { .. } | LedgerError::DayRecordNotFound { .. } => {
                ErrorKind::NotFound
            }
            LedgerError::DayRecordExists { .. } => ErrorKind::Conflict,
            LedgerError::InvalidDuration { .. }
            | LedgerError::InvalidTimeSpan { .. }
            | LedgerError::InvalidDate { .. }
            | LedgerError::InvalidTime { .. }
            | LedgerError::CalculationOverflow { .. }
            | LedgerError::NotificationFailed { .. } => ErrorKind::Validation,
            LedgerError::ConfigNotFound { .. } | LedgerError::ConfigParseError { .. } => {
                ErrorKind::Configuration
            }
        }
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
