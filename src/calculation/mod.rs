//! Calculation logic for the hours ledger.
//!
//! This module contains the pure helpers the day-record service builds on:
//! worked hours derived from a session's clock times and pause, and the
//! levy/tax formula turning gross pay into net pay.

mod net_salary;
mod worked_hours;

pub use net_salary::{
    calculate_salary, calculate_salary_with, gross_salary, net_salary, net_salary_with,
};
pub use worked_hours::{
    hours_from_minutes, minutes_between, pause_minutes, worked_hours, worked_minutes,
};
