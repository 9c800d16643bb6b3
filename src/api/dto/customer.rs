//! DTOs for customer endpoints.

use serde::{Deserialize, Serialize};

/// Request body for `POST /customers`.
///
/// Both fields are optional at the wire level so that a missing name is
/// reported as a validation error rather than a deserialization failure.
/// Any `id` in the payload is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub first_name: Option<String>,
    pub sur_name: Option<String>,
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// A customer with its `self` and `customers` links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResource {
    pub id: i64,
    pub first_name: String,
    pub sur_name: String,
    pub links: Vec<Link>,
}

/// Envelope returned by `GET /customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCollection {
    pub links: Vec<Link>,
    pub content: Vec<CustomerResource>,
}
