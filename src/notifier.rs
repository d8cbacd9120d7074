//! Outbound notification contract.

use std::sync::Arc;

use thiserror::Error;

/// A notification could not be delivered.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct NotifyError {
    /// A description of the delivery failure.
    pub message: String,
}

impl NotifyError {
    /// Creates a delivery failure with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Delivers the "no day record logged today" reminder to an employee.
pub trait Notifier: Send + Sync {
    /// Sends the reminder to `email`.
    fn notify(&self, email: &str) -> Result<(), NotifyError>;
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, email: &str) -> Result<(), NotifyError> {
        (**self).notify(email)
    }
}
