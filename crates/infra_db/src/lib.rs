//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL storage for the employee records
//! system using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: [`PgEmployeeRepository`]
//! implements the domain's `EmployeeRepository` port, keeping SQL and row
//! mapping out of the domain layer. Pool lifecycle stays with the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PgEmployeeRepository};
//!
//! let pool = create_pool(DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! let repo = PgEmployeeRepository::new(pool);
//! ```

pub mod config;
pub mod pool;
pub mod error;
pub mod repositories;

pub use config::DatabaseSettings;
pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::PgEmployeeRepository;
