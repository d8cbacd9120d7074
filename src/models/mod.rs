//! Core data models for the hours ledger.
//!
//! This module contains the domain models used throughout the crate.

mod day_record;
mod employee;
mod input;
mod report;

pub use day_record::DayRecord;
pub use employee::Employee;
pub use input::{DayRecordInput, DayRecordPatch};
pub(crate) use input::supplied;
pub use report::{DayRecordView, SalaryCalculation, SalaryReport};
