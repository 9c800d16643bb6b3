//! Customer management service.

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Result of a delete request.
///
/// `Missing` and `Failed` are kept apart here even though the HTTP layer
/// reports both the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Missing,
    Failed,
}

/// Service for creating, reading and deleting customers.
///
/// Holds no state besides the repository handle.
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Validates the names and stores a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either name is missing or blank;
    /// the repository is not called in that case.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_customer(
        &self,
        first_name: Option<String>,
        sur_name: Option<String>,
    ) -> Result<Customer, AppError> {
        let new_customer = NewCustomer::new(first_name, sur_name)?;
        let customer = self.repository.save(new_customer).await?;

        tracing::info!(id = customer.id, "Customer created");
        Ok(customer)
    }

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_customer(&self, id: i64) -> Result<Customer, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("Could not find customer: {id}"), json!({"id": id}))
        })
    }

    /// Lists all customers in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.find_all().await
    }

    /// Deletes a customer, classifying any failure instead of returning it.
    pub async fn delete_customer(&self, id: i64) -> DeleteOutcome {
        match self.repository.delete_by_id(id).await {
            Ok(()) => {
                tracing::info!(id, "Customer deleted");
                DeleteOutcome::Deleted
            }
            Err(AppError::NotFound { .. }) => DeleteOutcome::Missing,
            Err(_) => DeleteOutcome::Failed,
        }
    }

    /// Checks that the repository is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage backend cannot be reached.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
