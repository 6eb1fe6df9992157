//! # sheet-stripe
//!
//! Stripe payment gateway for the payment-sheet service.
//!
//! `StripeGateway` implements `sheet_core::PaymentGateway` over the Stripe
//! REST API:
//!
//! | Operation | Stripe call |
//! |-----------|-------------|
//! | `list_customers_by_email` | `GET /v1/customers?email=...&limit=1` |
//! | `create_customer` | `POST /v1/customers` |
//! | `delete_customer` | `DELETE /v1/customers/{id}` |
//! | `create_ephemeral_key` | `POST /v1/ephemeral_keys` (pinned `Stripe-Version`) |
//! | `create_payment_intent` | `POST /v1/payment_intents` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheet_core::PaymentSheetService;
//! use sheet_stripe::StripeGateway;
//! use std::sync::Arc;
//!
//! let gateway = StripeGateway::from_env()?;
//! let publishable_key = gateway.config().publishable_key.clone();
//! let service = PaymentSheetService::new(Arc::new(gateway), publishable_key);
//! ```

pub mod config;
pub mod gateway;

// Re-exports
pub use config::{StripeConfig, EPHEMERAL_KEY_API_VERSION};
pub use gateway::StripeGateway;
