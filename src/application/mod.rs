//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::customer_service::CustomerService`] - Customer creation, lookup and deletion

pub mod services;
