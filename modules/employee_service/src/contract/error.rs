//! Contract error types for employee service
//!
//! These errors are transport-agnostic; the REST layer maps them to HTTP.

use thiserror::Error;

/// Employee service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    /// No employee row matched the id
    #[error("employee not found: {id}")]
    NotFound { id: i32 },

    /// Input rejected before reaching the store
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Store, connectivity or timeout failure. Details are logged, not carried.
    #[error("internal error")]
    Internal,
}

impl EmployeeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
