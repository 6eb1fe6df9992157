//! # Request Handlers
//!
//! Axum request handlers for the payment-sheet API.
//!
//! Client errors carry the validation message. Upstream failures are logged
//! and answered with a fixed per-endpoint message so provider details never
//! reach the client.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sheet_core::{
    CustomerLookupRequest, DeletedCustomer, PaymentSessionCredentials, PaymentSheetRequest,
    SheetError,
};
use tracing::{debug, error, instrument};

pub const WELCOME_TEXT: &str = "Bem-vindo ao meu projeto Node.js!";

pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub const FETCH_CUSTOMER_FAILED: &str = "Failed to fetch customer";
pub const CREATE_PAYMENT_SHEET_FAILED: &str = "Failed to create payment sheet";
pub const DELETE_CUSTOMER_FAILED: &str = "Failed to delete customer";

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Informational response (e.g., lookup miss)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Customer lookup response
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub email: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn sheet_error_to_response(err: SheetError, upstream_message: &str) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if err.is_client_error() {
        debug!("Rejected request: {}", err);
        return (status, Json(ErrorResponse::new(err.to_string())));
    }

    error!("{}: {}", upstream_message, err);
    (status, Json(ErrorResponse::new(upstream_message)))
}

/// Missing or malformed bodies validate as empty requests
fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Unreadable JSON body: {}", rejection);
            T::default()
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Plain-text welcome page
pub async fn welcome() -> &'static str {
    WELCOME_TEXT
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "payment-sheet",
        "provider": state.service.provider_name(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Look up a customer by email (`GET /customers`, email in the JSON body)
#[instrument(skip(state, body))]
pub async fn find_customer(
    State(state): State<AppState>,
    body: Result<Json<CustomerLookupRequest>, JsonRejection>,
) -> Response {
    let request = body_or_default(body);

    match state.service.find_customer(request).await {
        Ok(Some(customer)) => (
            StatusCode::OK,
            Json(CustomerResponse {
                id: customer.id,
                email: customer.email,
            }),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: CUSTOMER_NOT_FOUND.to_string(),
            }),
        )
            .into_response(),
        Err(e) => sheet_error_to_response(e, FETCH_CUSTOMER_FAILED).into_response(),
    }
}

/// Find or create the customer and issue payment-sheet credentials
#[instrument(skip(state, body))]
pub async fn create_payment_sheet(
    State(state): State<AppState>,
    body: Result<Json<PaymentSheetRequest>, JsonRejection>,
) -> Result<Json<PaymentSessionCredentials>, ApiError> {
    let request = body_or_default(body);

    let credentials = state
        .service
        .create_payment_sheet(request)
        .await
        .map_err(|e| sheet_error_to_response(e, CREATE_PAYMENT_SHEET_FAILED))?;

    Ok(Json(credentials))
}

/// Delete a customer; the provider's deletion object is returned as-is
#[instrument(skip(state))]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<DeletedCustomer>, ApiError> {
    let deleted = state
        .service
        .delete_customer(&customer_id)
        .await
        .map_err(|e| sheet_error_to_response(e, DELETE_CUSTOMER_FAILED))?;

    Ok(Json(deleted))
}
