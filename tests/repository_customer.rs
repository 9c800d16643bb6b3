//! PostgreSQL repository tests.
//!
//! See README.md for running these against a database.

use customer_service::domain::entities::NewCustomer;
use customer_service::domain::repositories::CustomerRepository;
use customer_service::error::AppError;
use customer_service::infrastructure::persistence::PgCustomerRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_customer(first: &str, sur: &str) -> NewCustomer {
    NewCustomer::new(Some(first.to_string()), Some(sur.to_string())).unwrap()
}

#[sqlx::test]
#[ignore]
async fn test_save_assigns_id(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));

    let customer = repo.save(new_customer("John", "Joe")).await.unwrap();

    assert!(customer.id > 0);
    assert_eq!(customer.first_name, "John");
    assert_eq!(customer.sur_name, "Joe");
}

#[sqlx::test]
#[ignore]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));
    let saved = repo.save(new_customer("John", "Joe")).await.unwrap();

    let found = repo.find_by_id(saved.id).await.unwrap();
    assert_eq!(found, Some(saved));

    let missing = repo.find_by_id(i64::MAX).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore]
async fn test_find_all(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));
    assert!(repo.find_all().await.unwrap().is_empty());

    repo.save(new_customer("John", "Joe")).await.unwrap();
    repo.save(new_customer("Ryan", "Dan")).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].first_name, "John");
    assert_eq!(all[1].first_name, "Ryan");
}

#[sqlx::test]
#[ignore]
async fn test_delete_by_id(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));
    let saved = repo.save(new_customer("John", "Joe")).await.unwrap();

    repo.delete_by_id(saved.id).await.unwrap();
    assert!(repo.find_by_id(saved.id).await.unwrap().is_none());

    let err = repo.delete_by_id(saved.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
#[ignore]
async fn test_blank_names_rejected_by_schema(pool: PgPool) {
    let result = sqlx::query("INSERT INTO customers (first_name, sur_name) VALUES ('  ', 'Joe')")
        .execute(&pool)
        .await;

    let err: AppError = result.unwrap_err().into();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[sqlx::test]
#[ignore]
async fn test_ping(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
