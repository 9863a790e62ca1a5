//! Employee model
//!
//! An employee record is a plain value: names, an email, and an identifier
//! that only exists once the store has persisted the record.

use serde::{Deserialize, Serialize};

use core_kernel::EmployeeId;

/// An employee record
///
/// `id` is `None` until the record has been saved for the first time; the
/// store assigns it and it never changes afterwards. Email is intended to be
/// unique, but only [`EmployeeService::save_employee`] enforces that.
///
/// [`EmployeeService::save_employee`]: crate::service::EmployeeService::save_employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier, absent before the first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Creates an unsaved employee record
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Attaches a store-assigned identifier
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true once the record has been assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the record carries the given first and last name
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}
