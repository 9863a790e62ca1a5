//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types. Queries are checked at runtime rather than with
//! `query_as!`, so building the crate does not need a live database.

pub mod employee;

pub use employee::{EmployeeRow, PgEmployeeRepository};
