//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! - [`persistence`] - Repository implementations (PostgreSQL and in-memory)

pub mod persistence;
