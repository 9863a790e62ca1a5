//! Database error types
//!
//! This module defines the error types that can occur during database operations,
//! and how they are classified before crossing into the domain as `PortError`.

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur during database operations
///
/// This enum captures connection issues, query failures, and constraint
/// violations. Construct it from `sqlx::Error` with `?` to get the
/// classified variant.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Check or not-null constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Invalid or unreadable database settings
    #[error("Invalid database configuration: {0}")]
    Configuration(String),

    /// A row held data the domain model rejects
    #[error("Invalid row data: {0}")]
    InvalidRow(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(sqlx::Error),
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found("Employee", 42);
    /// assert!(error.to_string().contains("Employee"));
    /// ```
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound { .. })
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Classifies SQLx errors into DatabaseError variants
///
/// Database errors are mapped by PostgreSQL SQLSTATE code.
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::not_found("Record", "unknown"),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::PoolClosed => {
                DatabaseError::ConnectionFailed("Connection pool is closed".to_string())
            }
            sqlx::Error::Io(io_err) => DatabaseError::ConnectionFailed(io_err.to_string()),
            sqlx::Error::Configuration(cfg_err) => {
                DatabaseError::Configuration(cfg_err.to_string())
            }
            sqlx::Error::Migrate(migrate_err) => {
                DatabaseError::MigrationFailed(migrate_err.to_string())
            }
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                match db_err.code().as_deref() {
                    Some("23505") => DatabaseError::DuplicateEntry(message),
                    Some("23502") | Some("23514") => DatabaseError::ConstraintViolation(message),
                    _ => DatabaseError::QueryFailed(message),
                }
            }
            other => DatabaseError::SqlError(other),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::MigrationFailed(error.to_string())
    }
}

/// Translates database failures into the domain's port error
///
/// - `NotFound` -> `PortError::NotFound`
/// - `DuplicateEntry` -> `PortError::Conflict`
/// - constraint violations -> `PortError::Validation`
/// - connection and pool failures -> `PortError::Connection`
/// - anything else -> `PortError::Internal`
impl From<DatabaseError> for PortError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::NotFound { entity, id } => PortError::NotFound {
                entity_type: entity,
                id,
            },
            DatabaseError::DuplicateEntry(message) => PortError::conflict(message),
            DatabaseError::ConstraintViolation(message) => PortError::validation(message),
            e @ (DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted) => {
                PortError::connection_with_source(e.to_string(), e)
            }
            other => PortError::internal_with_source(other.to_string(), other),
        }
    }
}
