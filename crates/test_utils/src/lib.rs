//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! employee records test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built employee records
//! - `builders`: Builder for employee test data
//! - `database`: PostgreSQL test container management
//! - `generators`: Property-based test data generators
//! - `logging`: One-time tracing subscriber setup

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use generators::*;
pub use logging::*;
