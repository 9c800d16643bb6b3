//! In-process implementation of customer repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// A repository that keeps customers in memory.
///
/// Used when no database is configured and in tests. Data is lost on restart.
/// Ids start at 1 and are never reused; listing returns customers in id order.
pub struct InMemoryCustomerRepository {
    customers: RwLock<BTreeMap<i64, Customer>>,
    next_id: AtomicI64,
}

impl InMemoryCustomerRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory customer repository");
        Self {
            customers: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let customer = new_customer.into_customer(id);

        self.customers.write().await.insert(id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.customers.read().await.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        match self.customers.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(
                format!("Could not find customer: {id}"),
                json!({"id": id}),
            )),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
