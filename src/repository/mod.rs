//! Repository abstractions for employees and day records.
//!
//! The service only talks to the traits; [`InMemoryStore`] is the bundled
//! implementation used by tests and embedders without a database.

mod memory;
mod traits;

pub use memory::InMemoryStore;
pub use traits::{DayRecordRepository, EmployeeRepository};
