//! REST API layer for HTTP request/response handling.
//!
//! - [`assembler`] - Hypermedia decoration of customers
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod assembler;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
