//! Database settings loaded from the environment
//!
//! Settings are read with the `config` crate from variables prefixed with
//! `EMPLOYEE_DB_`, after `dotenvy` loads an optional `.env` file. Every key
//! has a default, so an empty environment yields a local development setup.
//!
//! | Variable                           | Default                            |
//! |------------------------------------|------------------------------------|
//! | `EMPLOYEE_DB_URL`                  | `postgres://localhost/employees`   |
//! | `EMPLOYEE_DB_MAX_CONNECTIONS`      | `10`                               |
//! | `EMPLOYEE_DB_MIN_CONNECTIONS`      | `2`                                |
//! | `EMPLOYEE_DB_CONNECT_TIMEOUT_SECS` | `30`                               |
//! | `EMPLOYEE_DB_MAX_LIFETIME_SECS`    | `1800`                             |
//! | `EMPLOYEE_DB_IDLE_TIMEOUT_SECS`    | `600`                              |

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::DatabaseError;
use crate::pool::DatabaseConfig;

/// Connection string used when none is configured
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/employees";

/// Environment variable prefix for database settings
pub const ENV_PREFIX: &str = "EMPLOYEE_DB";

/// Database settings as read from the environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// PostgreSQL connection string
    pub url: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Minimum number of pooled connections
    pub min_connections: u32,
    /// Seconds to wait when acquiring a connection
    pub connect_timeout_secs: u64,
    /// Seconds a connection may live before being recycled
    pub max_lifetime_secs: u64,
    /// Seconds a connection may sit idle before being closed
    pub idle_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout_secs: 30,
            max_lifetime_secs: 30 * 60,
            idle_timeout_secs: 10 * 60,
        }
    }
}

impl DatabaseSettings {
    /// Loads settings from the process environment
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Configuration` if a variable cannot be parsed
    pub fn from_env() -> Result<Self, DatabaseError> {
        // A missing .env file is the normal case outside local development.
        dotenvy::dotenv().ok();
        Self::load(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Loads settings from an explicit variable map instead of the process
    /// environment
    ///
    /// Keys use the same `EMPLOYEE_DB_*` names as [`from_env`](Self::from_env).
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, DatabaseError> {
        Self::load(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(vars)),
        )
    }

    fn load(source: config::Environment) -> Result<Self, DatabaseError> {
        config::Config::builder()
            .add_source(source)
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| DatabaseError::Configuration(e.to_string()))
    }
}

impl From<DatabaseSettings> for DatabaseConfig {
    fn from(settings: DatabaseSettings) -> Self {
        DatabaseConfig::new(settings.url)
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .max_lifetime(Duration::from_secs(settings.max_lifetime_secs))
            .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
    }
}
