#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use customer_service::application::services::CustomerService;
use customer_service::domain::entities::{Customer, NewCustomer};
use customer_service::domain::repositories::CustomerRepository;
use customer_service::error::AppError;
use customer_service::infrastructure::persistence::InMemoryCustomerRepository;
use customer_service::routes::router;
use customer_service::state::AppState;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn create_test_state(repository: Arc<dyn CustomerRepository>, base_url: &str) -> AppState {
    AppState::new(Arc::new(CustomerService::new(repository)), base_url)
}

/// Server over the full router backed by a fresh in-memory repository.
pub fn make_server() -> TestServer {
    make_server_with(Arc::new(InMemoryCustomerRepository::new()), "")
}

pub fn make_server_with(repository: Arc<dyn CustomerRepository>, base_url: &str) -> TestServer {
    TestServer::new(router(create_test_state(repository, base_url))).unwrap()
}

/// In-memory repository that counts `save` calls.
#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryCustomerRepository,
    saves: AtomicUsize,
}

impl CountingRepository {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustomerRepository for CountingRepository {
    async fn save(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(new_customer).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        self.inner.find_all().await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.inner.delete_by_id(id).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }
}

/// Repository whose every call fails as an unreachable database would.
pub struct FailingRepository;

fn storage_down() -> AppError {
    AppError::internal("Database error", json!({ "cause": "connection refused" }))
}

#[async_trait]
impl CustomerRepository for FailingRepository {
    async fn save(&self, _new_customer: NewCustomer) -> Result<Customer, AppError> {
        Err(storage_down())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Customer>, AppError> {
        Err(storage_down())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        Err(storage_down())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), AppError> {
        Err(storage_down())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(storage_down())
    }
}
