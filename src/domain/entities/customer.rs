//! Customer entity and its validated creation input.

use crate::error::AppError;
use serde_json::json;

/// A persisted customer.
///
/// The `id` is assigned by the repository on save and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub sur_name: String,
}

impl Customer {
    /// Creates a new Customer instance.
    pub fn new(id: i64, first_name: impl Into<String>, sur_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            sur_name: sur_name.into(),
        }
    }
}

/// Input data for creating a new customer.
///
/// Can only be built through [`NewCustomer::new`], so both names are always
/// present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    first_name: String,
    sur_name: String,
}

impl NewCustomer {
    /// Validates raw name fields and builds the creation input.
    ///
    /// Names are trimmed before the check and stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every missing or blank field.
    pub fn new(first_name: Option<String>, sur_name: Option<String>) -> Result<Self, AppError> {
        let first_name = non_blank(first_name);
        let sur_name = non_blank(sur_name);

        match (first_name, sur_name) {
            (Some(first_name), Some(sur_name)) => Ok(Self {
                first_name,
                sur_name,
            }),
            (first_name, sur_name) => {
                let mut fields = Vec::new();
                if first_name.is_none() {
                    fields.push("firstName");
                }
                if sur_name.is_none() {
                    fields.push("surName");
                }
                Err(AppError::bad_request(
                    "Customer names must not be blank",
                    json!({ "fields": fields }),
                ))
            }
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn sur_name(&self) -> &str {
        &self.sur_name
    }

    /// Attaches a repository-assigned id.
    pub fn into_customer(self, id: i64) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            sur_name: self.sur_name,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
