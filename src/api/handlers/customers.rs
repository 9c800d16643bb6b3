//! Handlers for customer endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::assembler::{customer_collection, customer_href, customer_resource};
use crate::api::dto::customer::{CreateCustomerRequest, CustomerCollection, CustomerResource};
use crate::application::services::DeleteOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new customer.
///
/// # Endpoint
///
/// `POST /customers`
///
/// # Request Body
///
/// ```json
/// { "firstName": "John", "surName": "Joe" }
/// ```
///
/// # Response
///
/// `201 Created` with an empty body and `Location: {base}/customers/{id}`.
///
/// # Errors
///
/// Returns 400 if either name is missing or blank, or the body is not valid JSON.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let customer = state
        .customer_service
        .create_customer(payload.first_name, payload.sur_name)
        .await?;

    let location = customer_href(&state.base_url, customer.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// Returns a single customer with navigation links.
///
/// # Endpoint
///
/// `GET /customers/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if no customer has this id.
pub async fn get_customer_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<CustomerResource>, AppError> {
    let Path(id) = id?;
    let customer = state.customer_service.get_customer(id).await?;

    Ok(Json(customer_resource(customer, &state.base_url)))
}

/// Lists all customers.
///
/// # Endpoint
///
/// `GET /customers`
///
/// An empty store yields `200 OK` with an empty `content` array.
pub async fn list_customers_handler(
    State(state): State<AppState>,
) -> Result<Json<CustomerCollection>, AppError> {
    let customers = state.customer_service.list_customers().await?;

    Ok(Json(customer_collection(customers, &state.base_url)))
}

/// Deletes a customer.
///
/// # Endpoint
///
/// `DELETE /customers/{id}`
///
/// # Response Codes
///
/// - **200 OK**: the customer was deleted
/// - **204 No Content**: the customer did not exist or the deletion failed
/// - **400 Bad Request**: the id is not an integer
///
/// The failure cause is never reported to the client.
pub async fn delete_customer_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    let status = match state.customer_service.delete_customer(id).await {
        DeleteOutcome::Deleted => StatusCode::OK,
        DeleteOutcome::Missing | DeleteOutcome::Failed => StatusCode::NO_CONTENT,
    };

    Ok(status)
}
