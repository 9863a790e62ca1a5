//! Core Kernel - Foundational types for the employee records system
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure crates:
//! - Strongly-typed, store-assigned identifiers
//! - The port error taxonomy every repository implementation speaks
//! - Common kernel errors

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::{EmployeeId, IdParseError};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
