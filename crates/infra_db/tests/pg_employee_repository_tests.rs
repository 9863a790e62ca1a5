//! PostgreSQL employee repository tests
//!
//! Each test starts its own PostgreSQL container, so these need a Docker
//! daemon and are ignored by default. Run with `cargo test -- --ignored`.

use std::sync::Arc;

use domain_employee::{Employee, EmployeeRepository, EmployeeService};
use infra_db::PgEmployeeRepository;
use test_utils::{create_isolated_test_database, init_tracing, EmployeeFixtures, IdFixtures, TestDatabase};

async fn repository() -> (TestDatabase, PgEmployeeRepository) {
    init_tracing();
    let db = create_isolated_test_database()
        .await
        .expect("Failed to create test database");
    let repo = PgEmployeeRepository::new(db.pool().clone());
    (db, repo)
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_assigns_positive_id() {
    let (_db, repo) = repository().await;

    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    assert!(saved.id.is_some_and(|id| id.value() > 0));
    assert_eq!(saved.email, "ramesh@gmail.com");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_is_ordered_by_id() {
    let (_db, repo) = repository().await;
    let ramesh = repo.save(EmployeeFixtures::ramesh()).await.unwrap();
    let john = repo.save(EmployeeFixtures::john_cena()).await.unwrap();

    let employees = repo.find_all().await.unwrap();

    assert_eq!(employees, vec![ramesh, john]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_and_email() {
    let (_db, repo) = repository().await;
    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    let by_id = repo.find_by_id(saved.id.unwrap()).await.unwrap();
    let by_email = repo.find_by_email("ramesh@gmail.com").await.unwrap();
    let missing = repo.find_by_id(IdFixtures::missing()).await.unwrap();

    assert_eq!(by_id, Some(saved.clone()));
    assert_eq!(by_email, Some(saved));
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_keeps_id() {
    let (_db, repo) = repository().await;
    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    let mut changed = saved.clone();
    changed.email = "ram@gmail.com".to_string();
    changed.first_name = "Ram".to_string();
    let updated = repo.save(changed).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.email, "ram@gmail.com");
    assert_eq!(updated.first_name, "Ram");
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_of_missing_row_is_not_found() {
    let (_db, repo) = repository().await;

    let ghost = EmployeeFixtures::ramesh().with_id(IdFixtures::missing());
    let err = repo.save(ghost).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_then_find_is_empty() {
    let (_db, repo) = repository().await;
    let saved = repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    repo.delete(&saved).await.unwrap();
    repo.delete_by_id(saved.id.unwrap()).await.unwrap();

    assert!(repo.find_by_id(saved.id.unwrap()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_name_single_none_and_many() {
    let (_db, repo) = repository().await;
    let ramesh = repo.save(EmployeeFixtures::ramesh()).await.unwrap();
    repo.save(EmployeeFixtures::john_cena()).await.unwrap();

    assert_eq!(repo.find_by_name("Ramesh", "Fadatare").await.unwrap(), Some(ramesh));
    assert!(repo.find_by_name("Tony", "Stark").await.unwrap().is_none());

    repo.save(Employee::new("John", "Cena", "cena2@gmail.com")).await.unwrap();
    let err = repo.find_by_name("John", "Cena").await.unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_storage_does_not_enforce_unique_email() {
    let (_db, repo) = repository().await;
    let first = repo.save(EmployeeFixtures::ramesh()).await.unwrap();
    repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    let found = repo.find_by_email("ramesh@gmail.com").await.unwrap();

    assert_eq!(found, Some(first));
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_rejects_duplicate_email_against_postgres() {
    let (_db, repo) = repository().await;
    let service = EmployeeService::new(Arc::new(repo.clone()));

    service.save_employee(EmployeeFixtures::ramesh()).await.unwrap();
    let err = service
        .save_employee(EmployeeFixtures::ramesh())
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_clear_data_restarts_ids() {
    let (db, repo) = repository().await;
    repo.save(EmployeeFixtures::ramesh()).await.unwrap();

    db.clear_data().await.unwrap();
    let saved = repo.save(EmployeeFixtures::john_cena()).await.unwrap();

    assert_eq!(saved.id, Some(IdFixtures::id(1)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_migrations_are_idempotent() {
    let (db, _repo) = repository().await;

    infra_db::run_migrations(db.pool()).await.unwrap();
}
