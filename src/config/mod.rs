//! Configuration loading for the hours ledger.
//!
//! This module loads the salary formula constants, the periodic job
//! triggers and the placeholder place name from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use hours_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ledger.yaml").unwrap();
//! println!("Tax rate: {}", config.salary.tax_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DailyTrigger, LedgerConfig, SalaryRules, ScheduleConfig};
