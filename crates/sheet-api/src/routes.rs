//! # Routes
//!
//! Axum router configuration for the payment-sheet API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
///   - GET    /                - Welcome text
///   - GET    /health          - Health check
///   - GET    /customers       - Find customer by email (JSON body)
///   - POST   /payment-sheet   - Create payment-sheet credentials
///   - DELETE /customers/{id}  - Delete customer
pub fn create_router(state: AppState) -> Router {
    // Mobile and web clients call from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .route("/payment-sheet", post(handlers::create_payment_sheet))
        .route("/customers", get(handlers::find_customer))
        .route("/customers/{customer_id}", delete(handlers::delete_customer))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
