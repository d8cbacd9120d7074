//! Work hours ledger.
//!
//! This crate records employees' daily work sessions, derives the hours they
//! worked and turns monthly hours into net pay under a fixed levy and tax
//! formula. It also provides the two periodic jobs that remind employees to
//! log their day and fill in placeholder records for those who did not.

#![warn(missing_docs)]

pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod jobs;
pub mod models;
pub mod notifier;
pub mod repository;
pub mod scheduler;
pub mod service;
