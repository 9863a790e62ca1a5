//! Employee Records Domain
//!
//! This crate holds the employee model, the repository port that storage
//! adapters implement, and the service layer that owns the single business
//! rule of the system: no two employees may be created with the same email.
//!
//! # Layers
//!
//! - **Repository** ([`EmployeeRepository`]): create/read/update/delete plus
//!   lookups by email and by first and last name.
//! - **Service** ([`EmployeeService`]): rejects creates whose email is already
//!   taken, and passes every other call straight through.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_employee::{Employee, EmployeeService};
//!
//! let service = EmployeeService::new(Arc::new(repository));
//! let saved = service
//!     .save_employee(Employee::new("Ramesh", "Fadatare", "ramesh@gmail.com"))
//!     .await?;
//! assert!(saved.id.is_some());
//! ```

pub mod employee;
pub mod error;
pub mod ports;
pub mod service;

pub use employee::Employee;
pub use error::EmployeeError;
pub use ports::EmployeeRepository;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{InMemoryEmployeeRepository, RepositoryCalls};
pub use service::EmployeeService;
