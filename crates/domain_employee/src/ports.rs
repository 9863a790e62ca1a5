//! Employee Domain Ports
//!
//! This module defines the repository port for employee records, so the
//! service layer never depends on a particular store.
//!
//! # Architecture
//!
//! The `EmployeeRepository` trait defines every operation the domain needs
//! from its data source. Implementations:
//!
//! - **PostgreSQL**: `infra_db::repositories::PgEmployeeRepository`
//! - **In-memory**: [`mock::InMemoryEmployeeRepository`], for tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_employee::ports::EmployeeRepository;
//! use std::sync::Arc;
//!
//! let repository: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool));
//! let everyone = repository.find_all().await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, EmployeeId, PortError};

use crate::employee::Employee;

/// The repository port for employee records
///
/// All methods are async and return `Result<T, PortError>`. Store failures
/// (connectivity, pool exhaustion) are returned as-is; implementations never
/// retry.
#[async_trait]
pub trait EmployeeRepository: DomainPort {
    /// Inserts the record when it has no id, otherwise updates the row with
    /// that id
    ///
    /// # Returns
    ///
    /// The persisted record with its id populated
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when updating an id that has no row
    async fn save(&self, employee: Employee) -> Result<Employee, PortError>;

    /// Returns every record in storage order (ascending id)
    async fn find_all(&self) -> Result<Vec<Employee>, PortError>;

    /// Looks up a record by id
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, PortError>;

    /// Looks up a record by exact email
    ///
    /// If several rows share the email the one with the lowest id is returned.
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, PortError>;

    /// Looks up the single record with the given first and last name
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` when more than one record matches
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, PortError>;

    /// Removes the row backing `employee`
    ///
    /// Unsaved records and rows that are already gone are a no-op.
    async fn delete(&self, employee: &Employee) -> Result<(), PortError> {
        match employee.id {
            Some(id) => self.delete_by_id(id).await,
            None => Ok(()),
        }
    }

    /// Removes the row with the given id; a missing row is a no-op
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), PortError>;
}

/// Picks the single match of a name lookup
///
/// No match is `None`; more than one is a conflict.
pub fn single_name_match(
    mut matches: Vec<Employee>,
    first_name: &str,
    last_name: &str,
) -> Result<Option<Employee>, PortError> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => Err(PortError::conflict(format!(
            "more than one employee named '{} {}'",
            first_name, last_name
        ))),
    }
}

/// In-memory implementation of EmployeeRepository for testing
///
/// Records live in a `BTreeMap` keyed by id, so iteration order is storage
/// order. Ids are handed out from a counter starting at 1.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// How many times each repository operation has been invoked
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct RepositoryCalls {
        pub save: usize,
        pub find_all: usize,
        pub find_by_id: usize,
        pub find_by_email: usize,
        pub find_by_name: usize,
        pub delete: usize,
        pub delete_by_id: usize,
    }

    #[derive(Debug, Default)]
    struct State {
        rows: BTreeMap<EmployeeId, Employee>,
        last_id: i64,
        calls: RepositoryCalls,
    }

    /// In-memory EmployeeRepository with call counting and outage simulation
    #[derive(Debug, Default)]
    pub struct InMemoryEmployeeRepository {
        state: RwLock<State>,
        unavailable: AtomicBool,
    }

    impl InMemoryEmployeeRepository {
        /// Creates an empty repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with records, saving each as-is
        ///
        /// Records that already carry an id keep it; the id counter moves past
        /// the highest seeded id. Seeding is not counted as calls.
        pub async fn with_employees(employees: Vec<Employee>) -> Result<Self, PortError> {
            let repo = Self::new();
            {
                let mut state = repo.state.write().await;
                for employee in employees {
                    let id = match employee.id {
                        Some(id) => id,
                        None => next_id(&mut state)?,
                    };
                    state.last_id = state.last_id.max(id.value());
                    state.rows.insert(id, employee.with_id(id));
                }
            }
            Ok(repo)
        }

        /// Makes every subsequent call fail with `PortError::Connection`
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        /// Returns a snapshot of the per-operation call counts
        pub async fn calls(&self) -> RepositoryCalls {
            self.state.read().await.calls
        }

        /// Returns the number of stored records
        pub async fn len(&self) -> usize {
            self.state.read().await.rows.len()
        }

        /// Returns true if nothing is stored
        pub async fn is_empty(&self) -> bool {
            self.state.read().await.rows.is_empty()
        }

        fn check_available(&self) -> Result<(), PortError> {
            if self.unavailable.load(Ordering::SeqCst) {
                Err(PortError::connection("in-memory employee store is unavailable"))
            } else {
                Ok(())
            }
        }
    }

    fn next_id(state: &mut State) -> Result<EmployeeId, PortError> {
        let next = state.last_id.checked_add(1).ok_or_else(|| PortError::Internal {
            message: "in-memory id counter exhausted".to_string(),
            source: None,
        })?;
        let id = EmployeeId::new(next)
            .map_err(|e| PortError::internal_with_source("in-memory id counter", e))?;
        state.last_id = next;
        Ok(id)
    }

    impl DomainPort for InMemoryEmployeeRepository {}

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn save(&self, employee: Employee) -> Result<Employee, PortError> {
            let mut state = self.state.write().await;
            state.calls.save += 1;
            self.check_available()?;

            let id = match employee.id {
                Some(id) if state.rows.contains_key(&id) => id,
                Some(id) => return Err(PortError::not_found("Employee", id)),
                None => next_id(&mut state)?,
            };

            let saved = employee.with_id(id);
            state.rows.insert(id, saved.clone());
            Ok(saved)
        }

        async fn find_all(&self) -> Result<Vec<Employee>, PortError> {
            let mut state = self.state.write().await;
            state.calls.find_all += 1;
            self.check_available()?;
            Ok(state.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, PortError> {
            let mut state = self.state.write().await;
            state.calls.find_by_id += 1;
            self.check_available()?;
            Ok(state.rows.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, PortError> {
            let mut state = self.state.write().await;
            state.calls.find_by_email += 1;
            self.check_available()?;
            Ok(state.rows.values().find(|e| e.email == email).cloned())
        }

        async fn find_by_name(
            &self,
            first_name: &str,
            last_name: &str,
        ) -> Result<Option<Employee>, PortError> {
            let mut state = self.state.write().await;
            state.calls.find_by_name += 1;
            self.check_available()?;
            let matches = state
                .rows
                .values()
                .filter(|e| e.has_name(first_name, last_name))
                .cloned()
                .collect();
            single_name_match(matches, first_name, last_name)
        }

        async fn delete(&self, employee: &Employee) -> Result<(), PortError> {
            let mut state = self.state.write().await;
            state.calls.delete += 1;
            self.check_available()?;
            if let Some(id) = employee.id {
                state.rows.remove(&id);
            }
            Ok(())
        }

        async fn delete_by_id(&self, id: EmployeeId) -> Result<(), PortError> {
            let mut state = self.state.write().await;
            state.calls.delete_by_id += 1;
            self.check_available()?;
            state.rows.remove(&id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::InMemoryEmployeeRepository;

    fn ramesh() -> Employee {
        Employee::new("Ramesh", "Fadatare", "ramesh@gmail.com")
    }

    #[tokio::test]
    async fn test_save_assigns_positive_id() {
        let repo = InMemoryEmployeeRepository::new();

        let saved = repo.save(ramesh()).await.unwrap();

        let id = saved.id.expect("saved employee should have an id");
        assert!(id.value() > 0);
    }

    #[tokio::test]
    async fn test_find_all_returns_storage_order() {
        let repo = InMemoryEmployeeRepository::new();
        let first = repo.save(ramesh()).await.unwrap();
        let second = repo
            .save(Employee::new("John", "Cena", "johncena@gmail.com"))
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();

        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let repo = InMemoryEmployeeRepository::new();
        let saved = repo.save(ramesh()).await.unwrap();

        let mut changed = saved.clone();
        changed.first_name = "Ram".to_string();
        changed.email = "ram@gmail.com".to_string();
        let updated = repo.save(changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.first_name, "Ram");
        assert_eq!(updated.email, "ram@gmail.com");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_of_missing_row_is_not_found() {
        let repo = InMemoryEmployeeRepository::new();
        let ghost = ramesh().with_id(EmployeeId::new(404).unwrap());

        let result = repo.save(ghost).await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unsaved_record_is_noop() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(ramesh()).await.unwrap();

        repo.delete(&ramesh()).await.unwrap();

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_name_rejects_duplicates() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(ramesh()).await.unwrap();
        repo.save(Employee::new("Ramesh", "Fadatare", "other@gmail.com"))
            .await
            .unwrap();

        let result = repo.find_by_name("Ramesh", "Fadatare").await;

        assert!(result.unwrap_err().is_conflict());
    }

    #[tokio::test]
    async fn test_seeded_ids_advance_counter() {
        let seeded = ramesh().with_id(EmployeeId::new(10).unwrap());
        let repo = InMemoryEmployeeRepository::with_employees(vec![seeded])
            .await
            .unwrap();

        let saved = repo
            .save(Employee::new("John", "Cena", "johncena@gmail.com"))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(EmployeeId::new(11).unwrap()));
        assert_eq!(repo.calls().await.save, 1);
    }

    #[tokio::test]
    async fn test_exhausted_id_counter_is_an_error() {
        let seeded = ramesh().with_id(EmployeeId::new(i64::MAX).unwrap());
        let repo = InMemoryEmployeeRepository::with_employees(vec![seeded])
            .await
            .unwrap();

        let err = repo
            .save(Employee::new("John", "Cena", "johncena@gmail.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, PortError::Internal { .. }));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_with_connection_error() {
        let repo = InMemoryEmployeeRepository::new();
        repo.set_unavailable(true);

        let result = repo.find_all().await;

        let err = result.unwrap_err();
        assert!(err.is_transient());
        assert!(matches!(err, PortError::Connection { .. }));
    }

    #[test]
    fn test_single_name_match_cases() {
        assert!(single_name_match(vec![], "A", "B").unwrap().is_none());
        assert_eq!(
            single_name_match(vec![ramesh()], "Ramesh", "Fadatare").unwrap(),
            Some(ramesh())
        );
        assert!(single_name_match(vec![ramesh(), ramesh()], "Ramesh", "Fadatare").is_err());
    }
}
