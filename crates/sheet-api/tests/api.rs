//! End-to-end tests of the HTTP surface over an in-memory gateway.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use sheet_api::{create_router, AppConfig, AppState};
use sheet_core::testing::{GatewayCall, RecordingGateway};
use sheet_core::GatewayError;
use std::sync::Arc;

const PUBLISHABLE_KEY: &str = "pk_test_sheet";

fn harness() -> (TestServer, Arc<RecordingGateway>) {
    let gateway = Arc::new(RecordingGateway::new());
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
    };

    let state = AppState::with_gateway(config, gateway.clone(), PUBLISHABLE_KEY);
    let server = TestServer::new(create_router(state)).expect("Failed to create test server");
    (server, gateway)
}

#[tokio::test]
async fn test_welcome() {
    let (server, _) = harness();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Bem-vindo ao meu projeto Node.js!");
}

#[tokio::test]
async fn test_health() {
    let (server, _) = harness();

    let body: Value = server.get("/health").await.json();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["provider"], "recording");
}

// =============================================================================
// GET /customers
// =============================================================================

#[tokio::test]
async fn test_lookup_without_email_is_rejected() {
    let (server, gateway) = harness();

    let response = server.get("/customers").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"error": "Email is required"}));

    let response = server.get("/customers").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_lookup_found() {
    let (server, gateway) = harness();
    let customer = gateway.seed_customer("Ana", "ana@example.com");

    let response = server
        .get("/customers")
        .json(&json!({"email": "ana@example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": customer.id, "email": "ana@example.com"})
    );
}

#[tokio::test]
async fn test_lookup_not_found() {
    let (server, _) = harness();

    let response = server
        .get("/customers")
        .json(&json!({"email": "nobody@example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({"message": "Customer not found"}));
}

#[tokio::test]
async fn test_lookup_upstream_failure() {
    let (server, gateway) = harness();
    gateway.fail_on(
        GatewayCall::ListCustomers,
        GatewayError::Network("dns error".into()),
    );

    let response = server
        .get("/customers")
        .json(&json!({"email": "ana@example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({"error": "Failed to fetch customer"}));
}

// =============================================================================
// POST /payment-sheet
// =============================================================================

#[tokio::test]
async fn test_payment_sheet_missing_fields() {
    let (server, gateway) = harness();

    let bodies = [
        json!({"email": "ana@example.com", "amount": 5000}),
        json!({"name": "Ana", "amount": 5000}),
        json!({"name": "Ana", "email": "ana@example.com"}),
        json!({"name": "Ana", "email": "ana@example.com", "amount": 0}),
        json!({"name": "Ana", "email": "ana@example.com", "amount": "lots"}),
    ];

    for body in bodies {
        let response = server.post("/payment-sheet").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "Name, email, and amount are required"})
        );
    }

    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_payment_sheet_new_customer() {
    let (server, gateway) = harness();

    let response = server
        .post("/payment-sheet")
        .json(&json!({"name": "Ana", "email": "ana@example.com", "amount": 5000}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();

    let created = gateway.created_customers();
    assert_eq!(created.len(), 1);
    assert_eq!(body["customer"], created[0].id.as_str());
    assert_eq!(body["publishableKey"], PUBLISHABLE_KEY);
    assert!(!body["paymentIntent"].as_str().unwrap().is_empty());
    assert!(!body["ephemeralKey"].as_str().unwrap().is_empty());

    assert_eq!(gateway.ephemeral_key_customers(), vec![created[0].id.clone()]);
    assert_eq!(gateway.payment_intents().len(), 1);
    assert_eq!(gateway.payment_intents()[0].customer_id, created[0].id);
}

#[tokio::test]
async fn test_payment_sheet_existing_customer() {
    let (server, gateway) = harness();
    let existing = gateway.seed_customer("Ana", "ana@example.com");

    let response = server
        .post("/payment-sheet")
        .json(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "phone": "+5511999990000",
            "amount": 5000
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["customer"], existing.id.as_str());
    assert!(gateway.created_customers().is_empty());
    assert!(!gateway.calls().contains(&GatewayCall::CreateCustomer));
}

#[tokio::test]
async fn test_payment_sheet_numeric_phone() {
    let (server, gateway) = harness();

    let response = server
        .post("/payment-sheet")
        .json(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "phone": 5511999990000_i64,
            "amount": 5000
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let created = gateway.created_customers();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].phone.as_deref(), Some("5511999990000"));
}

#[tokio::test]
async fn test_payment_sheet_upstream_failure_hides_details() {
    let (server, gateway) = harness();
    gateway.fail_on(
        GatewayCall::CreatePaymentIntent,
        GatewayError::provider(402, "Your card was declined"),
    );

    let response = server
        .post("/payment-sheet")
        .json(&json!({"name": "Ana", "email": "ana@example.com", "amount": 5000}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Failed to create payment sheet"})
    );
}

// =============================================================================
// DELETE /customers/{id}
// =============================================================================

#[tokio::test]
async fn test_delete_customer_then_repeat() {
    let (server, gateway) = harness();
    let customer = gateway.seed_customer("Ana", "ana@example.com");
    let path = format!("/customers/{}", customer.id);

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": customer.id, "object": "customer", "deleted": true})
    );

    let response = server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Failed to delete customer"})
    );
}

#[tokio::test]
async fn test_delete_blank_id() {
    let (server, gateway) = harness();

    let response = server.delete("/customers/%20").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Customer ID is required"})
    );
    assert!(gateway.calls().is_empty());
}
