//! Test Data Builders
//!
//! Provides a builder for employee records with sensible defaults, so tests
//! only spell out the fields they care about.

use core_kernel::EmployeeId;
use domain_employee::Employee;

use crate::fixtures::EmployeeFixtures;

/// Builder for constructing test employee data
pub struct TestEmployeeBuilder {
    id: Option<EmployeeId>,
    first_name: String,
    last_name: String,
    email: String,
}

impl Default for TestEmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEmployeeBuilder {
    /// Creates a new builder seeded from the Ramesh fixture
    pub fn new() -> Self {
        let base = EmployeeFixtures::ramesh();
        Self {
            id: None,
            first_name: base.first_name,
            last_name: base.last_name,
            email: base.email,
        }
    }

    /// Sets the identifier
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds the employee
    pub fn build(self) -> Employee {
        Employee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
