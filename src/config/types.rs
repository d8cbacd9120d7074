//! Configuration types for the hours ledger.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has a
//! default, so a file only needs to name what it overrides.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The levy and tax formula applied to gross pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRules {
    /// Gross pay at or above which levies and tax are deducted.
    pub threshold: Decimal,
    /// Share of gross pay withheld as levies.
    pub levy_rate: Decimal,
    /// Amount subtracted from the tax base before tax is applied.
    pub tax_free_allowance: Decimal,
    /// Income tax rate applied to the tax base.
    pub tax_rate: Decimal,
    /// Employer-side cost factor added on top of gross pay.
    pub super_gross_factor: Decimal,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            threshold: Decimal::from_parts(700, 0, 0, false, 0),
            levy_rate: Decimal::from_parts(134, 0, 0, false, 3),
            tax_free_allowance: Decimal::from_parts(41024, 0, 0, false, 2),
            tax_rate: Decimal::from_parts(19, 0, 0, false, 2),
            super_gross_factor: Decimal::from_parts(352, 0, 0, false, 3),
        }
    }
}

/// A wall-clock trigger firing at a fixed time on selected weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrigger {
    /// Local time of day to fire at.
    pub at: NaiveTime,
    /// Days of the week the trigger is active on.
    pub weekdays: Vec<Weekday>,
}

/// Triggers for the two periodic jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// When employees without a day record are reminded.
    pub notification: DailyTrigger,
    /// When placeholder records are written for employees who did not log.
    pub default_record: DailyTrigger,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        use Weekday::*;

        Self {
            notification: DailyTrigger {
                at: NaiveTime::from_hms_opt(20, 0, 0).expect("Valid notification time"),
                weekdays: vec![Mon, Tue, Wed, Thu, Fri],
            },
            default_record: DailyTrigger {
                at: NaiveTime::from_hms_opt(23, 50, 0).expect("Valid default record time"),
                weekdays: vec![Mon, Tue, Wed, Thu, Fri, Sat, Sun],
            },
        }
    }
}

/// The complete ledger configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// The levy and tax formula.
    pub salary: SalaryRules,
    /// Triggers for the periodic jobs.
    pub schedules: ScheduleConfig,
    /// Place written into placeholder day records.
    pub default_place: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            salary: SalaryRules::default(),
            schedules: ScheduleConfig::default(),
            default_place: "Undefined".to_string(),
        }
    }
}
