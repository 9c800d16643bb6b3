//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Customer payloads use camelCase
//! field names on the wire.

pub mod customer;
pub mod health;
