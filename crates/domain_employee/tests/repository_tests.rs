//! Repository contract tests against the in-memory repository
//!
//! The same scenarios run against PostgreSQL in
//! `infra_db/tests/pg_employee_repository_tests.rs`.

use domain_employee::{EmployeeRepository, InMemoryEmployeeRepository};
use test_utils::{EmployeeFixtures, IdFixtures};

#[tokio::test]
async fn test_save_returns_saved_employee() {
    let repo = InMemoryEmployeeRepository::new();

    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    assert!(saved.id.is_some_and(|id| id.value() > 0));
    assert_eq!(saved.first_name, "Ramesh");
}

#[tokio::test]
async fn test_find_all_returns_both_saved_employees() {
    let repo = InMemoryEmployeeRepository::new();
    repo.save(EmployeeFixtures::ramesh()).await.unwrap();
    repo.save(EmployeeFixtures::john_cena()).await.unwrap();

    let employees = repo.find_all().await.unwrap();

    assert_eq!(employees.len(), 2);
}

#[tokio::test]
async fn test_find_by_id_returns_saved_employee() {
    let repo = InMemoryEmployeeRepository::new();
    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    let found = repo.find_by_id(saved.id.unwrap()).await.unwrap();

    assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn test_find_by_email_returns_saved_employee() {
    let repo = InMemoryEmployeeRepository::new();
    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    let found = repo.find_by_email("ramesh@gmail.com").await.unwrap();
    let missing = repo.find_by_email("nobody@gmail.com").await.unwrap();

    assert_eq!(found, Some(saved));
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_by_email_with_duplicates_returns_lowest_id() {
    let repo = InMemoryEmployeeRepository::new();
    let first = repo.save(EmployeeFixtures::ramesh()).await.unwrap();
    let second = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    let found = repo.find_by_email("ramesh@gmail.com").await.unwrap();

    assert!(first.id < second.id);
    assert_eq!(found, Some(first));
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_update_returns_updated_employee() {
    let repo = InMemoryEmployeeRepository::new();
    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    let mut stored = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    stored.email = "ram@gmail.com".to_string();
    stored.first_name = "Ram".to_string();
    let updated = repo.save(stored).await.unwrap();

    assert_eq!(updated.email, "ram@gmail.com");
    assert_eq!(updated.first_name, "Ram");
    assert_eq!(updated.id, saved.id);
}

#[tokio::test]
async fn test_delete_removes_employee() {
    let repo = InMemoryEmployeeRepository::new();
    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    repo.delete(&saved).await.unwrap();

    assert!(repo.find_by_id(saved.id.unwrap()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_by_id_after_delete_is_noop() {
    let repo = InMemoryEmployeeRepository::new();
    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();
    let id = saved.id.unwrap();

    repo.delete(&saved).await.unwrap();
    repo.delete_by_id(id).await.unwrap();

    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_delete_by_missing_id_is_noop() {
    let repo = InMemoryEmployeeRepository::new();
    repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    repo.delete_by_id(IdFixtures::missing()).await.unwrap();

    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_find_by_name_returns_first_of_two() {
    let repo = InMemoryEmployeeRepository::new();
    let ramesh = repo.save(EmployeeFixtures::ramesh()).await.unwrap();
    repo.save(EmployeeFixtures::john_cena()).await.unwrap();

    let found = repo.find_by_name("Ramesh", "Fadatare").await.unwrap();

    assert_eq!(found, Some(ramesh));
}

#[tokio::test]
async fn test_find_by_name_without_match_is_empty() {
    let repo = InMemoryEmployeeRepository::new();
    repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    let found = repo.find_by_name("Ramesh", "Ramesh").await.unwrap();

    assert!(found.is_none());
}
