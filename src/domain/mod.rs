//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - [`entities::Customer`] and its validated creation input
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod entities;
pub mod repositories;
