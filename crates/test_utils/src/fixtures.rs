//! Pre-built Test Fixtures
//!
//! Provides ready-to-use employee records. The named fixtures are fixed and
//! predictable; `random` draws fake data for tests that only need "some"
//! employee.

use core_kernel::EmployeeId;
use domain_employee::Employee;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

/// Fixture for employee test data
pub struct EmployeeFixtures;

impl EmployeeFixtures {
    /// Unsaved Ramesh Fadatare, ramesh@gmail.com
    pub fn ramesh() -> Employee {
        Employee::new("Ramesh", "Fadatare", "ramesh@gmail.com")
    }

    /// Unsaved John Cena, johncena@gmail.com
    pub fn john_cena() -> Employee {
        Employee::new("John", "Cena", "johncena@gmail.com")
    }

    /// Unsaved Tony Stark, tonystark@gmail.com
    pub fn tony_stark() -> Employee {
        Employee::new("Tony", "Stark", "tonystark@gmail.com")
    }

    /// Ramesh as already persisted with id 1
    pub fn saved_ramesh() -> Employee {
        Self::ramesh().with_id(IdFixtures::id(1))
    }

    /// Tony Stark as already persisted with id 2
    pub fn saved_tony_stark() -> Employee {
        Self::tony_stark().with_id(IdFixtures::id(2))
    }

    /// An unsaved employee with fake names and email
    pub fn random() -> Employee {
        let first_name: String = FirstName().fake();
        let last_name: String = LastName().fake();
        let email: String = SafeEmail().fake();
        Employee::new(first_name, last_name, email)
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// Builds an id from a known-positive literal
    ///
    /// # Panics
    ///
    /// Panics if `value` is not positive
    pub fn id(value: i64) -> EmployeeId {
        EmployeeId::new(value).expect("fixture ids must be positive")
    }

    /// An id no fixture ever saves
    pub fn missing() -> EmployeeId {
        Self::id(9_999)
    }
}
