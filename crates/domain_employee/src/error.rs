//! Employee domain errors
//!
//! The domain has exactly one business error, a conflict on create when the
//! email is already in use. Everything else is a repository failure carried
//! through unchanged.

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the employee domain
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// Attempted to create an employee whose email already exists
    #[error("Conflict: employee with email '{0}' already exists")]
    EmailAlreadyExists(String),

    /// The repository failed; propagated as-is
    #[error(transparent)]
    Repository(#[from] PortError),
}

impl EmployeeError {
    /// Creates an EmailAlreadyExists error
    pub fn email_taken(email: impl Into<String>) -> Self {
        EmployeeError::EmailAlreadyExists(email.into())
    }

    /// Returns true if this error is the create-path email conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, EmployeeError::EmailAlreadyExists(_))
    }

    /// Returns the underlying repository error, if any
    pub fn as_port_error(&self) -> Option<&PortError> {
        match self {
            EmployeeError::Repository(err) => Some(err),
            EmployeeError::EmailAlreadyExists(_) => None,
        }
    }
}
