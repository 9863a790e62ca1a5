//! Employee domain service
//!
//! The service owns the one business rule of the system: an employee cannot
//! be created with an email that is already in use. Every other operation is
//! a straight pass-through to the repository.
//!
//! The email check and the insert are two separate repository calls and are
//! not atomic. Two concurrent creates with the same email can both pass the
//! check; closing that window is left to the store.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::EmployeeId;

use crate::employee::Employee;
use crate::error::EmployeeError;
use crate::ports::EmployeeRepository;

/// Service for creating, reading, updating, and deleting employee records
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a service over the given repository
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Creates an employee unless its email is already taken
    ///
    /// # Errors
    ///
    /// - `EmployeeError::EmailAlreadyExists` if a record with the same email
    ///   exists; the repository's `save` is not called in that case
    /// - `EmployeeError::Repository` for store failures
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let saved = service
    ///     .save_employee(Employee::new("Ramesh", "Fadatare", "ramesh@gmail.com"))
    ///     .await?;
    /// assert!(saved.id.is_some());
    /// ```
    #[instrument(skip(self, employee), fields(email = %employee.email))]
    pub async fn save_employee(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        if let Some(existing) = self.repository.find_by_email(&employee.email).await? {
            warn!(existing_id = ?existing.id, "Rejecting employee with duplicate email");
            return Err(EmployeeError::email_taken(employee.email));
        }

        let saved = self.repository.save(employee).await?;
        info!(id = ?saved.id, "Employee created");
        Ok(saved)
    }

    /// Returns every employee, possibly none
    #[instrument(skip(self))]
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.repository.find_all().await?;
        debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    /// Returns the employee with the given id, if any
    #[instrument(skip(self))]
    pub async fn get_employee_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Saves changes to an existing employee
    ///
    /// Email uniqueness is not re-checked here; an update may move a record
    /// onto an email another record already uses.
    #[instrument(skip(self, employee), fields(id = ?employee.id))]
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let updated = self.repository.save(employee).await?;
        info!("Employee updated");
        Ok(updated)
    }

    /// Deletes the employee with the given id; a missing id is not an error
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        self.repository.delete_by_id(id).await?;
        info!("Employee deleted");
        Ok(())
    }
}
