//! Employee repository implementation
//!
//! PostgreSQL storage for employee records. Every query touches the single
//! `employees` table; inserts and updates use `RETURNING` so the caller gets
//! the row exactly as stored.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use core_kernel::{DomainPort, EmployeeId, PortError};
use domain_employee::ports::single_name_match;
use domain_employee::{Employee, EmployeeRepository};

use crate::error::DatabaseError;

/// Repository for employee records backed by PostgreSQL
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Creates a new PgEmployeeRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn insert(&self, employee: &Employee) -> Result<EmployeeRow, DatabaseError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: EmployeeId, employee: &Employee) -> Result<EmployeeRow, DatabaseError> {
        sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4
            WHERE id = $1
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(id.value())
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Employee", id))
    }
}

impl DomainPort for PgEmployeeRepository {}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    #[instrument(skip(self, employee), fields(id = ?employee.id))]
    async fn save(&self, employee: Employee) -> Result<Employee, PortError> {
        let row = match employee.id {
            Some(id) => self.update(id, &employee).await?,
            None => self.insert(&employee).await?,
        };

        let saved = row.into_employee()?;
        info!(id = ?saved.id, "Employee saved");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Employee>, PortError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        debug!(count = rows.len(), "Fetched all employees");
        rows.into_iter().map(EmployeeRow::into_employee).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, PortError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, PortError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, PortError> {
        // Two rows are enough to tell "one" from "many".
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM employees
            WHERE first_name = $1 AND last_name = $2
            ORDER BY id
            LIMIT 2
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        let matches = rows
            .into_iter()
            .map(EmployeeRow::into_employee)
            .collect::<Result<Vec<_>, _>>()?;
        single_name_match(matches, first_name, last_name)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        if result.rows_affected() == 0 {
            debug!("No employee row to delete");
        } else {
            info!("Employee deleted");
        }
        Ok(())
    }
}

/// Database row representation of an employee
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeRow {
    /// Converts the row into the domain model
    ///
    /// # Errors
    ///
    /// Returns `PortError::Internal` if the stored id is not positive
    pub fn into_employee(self) -> Result<Employee, PortError> {
        let id = EmployeeId::new(self.id)
            .map_err(|e| PortError::from(DatabaseError::InvalidRow(e.to_string())))?;
        Ok(Employee::new(self.first_name, self.last_name, self.email).with_id(id))
    }
}
