//! Core domain entities.
//!
//! Entities are plain data structures. Creation input lives in a separate
//! type ([`NewCustomer`]) that can only exist in a validated state.

pub mod customer;

pub use customer::{Customer, NewCustomer};
