//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::CustomerService;

/// Immutable per-process state.
///
/// Cloned into each request; all fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    /// Prefix for links and `Location` headers, without a trailing slash.
    /// Empty means links are relative to the service root.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(customer_service: Arc<CustomerService>, base_url: &str) -> Self {
        Self {
            customer_service,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }
}
