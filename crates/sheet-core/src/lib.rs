//! # sheet-core
//!
//! Core types and workflow for the payment-sheet service.
//!
//! This crate provides:
//! - `PaymentGateway` trait for payment providers
//! - `CustomerRecord`, `EphemeralKey`, `PaymentIntent` and `PaymentSessionCredentials`
//! - Typed request schemas with validation
//! - `PaymentSheetService`, the find-or-create customer and credential issuance workflow
//! - `SheetError` / `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use sheet_core::{PaymentSheetRequest, PaymentSheetService};
//!
//! let service = PaymentSheetService::new(gateway, "pk_test_...");
//!
//! let credentials = service
//!     .create_payment_sheet(PaymentSheetRequest {
//!         name: Some("Ana".into()),
//!         email: Some("ana@example.com".into()),
//!         phone: None,
//!         amount: Some(5000),
//!     })
//!     .await?;
//!
//! // Hand credentials to the mobile payment sheet
//! ```

pub mod customer;
pub mod error;
pub mod gateway;
pub mod payment;
pub mod request;
pub mod workflow;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-exports for convenience
pub use customer::{CustomerRecord, DeletedCustomer, NewCustomer};
pub use error::{GatewayError, GatewayResult, SheetError, SheetResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use payment::{
    Currency, EphemeralKey, PaymentIntent, PaymentIntentRequest, PaymentSessionCredentials,
    SHEET_CURRENCY,
};
pub use request::{CustomerLookupRequest, PaymentSheetRequest, ValidatedPaymentSheet};
pub use workflow::PaymentSheetService;
