//! # Payment Gateway Trait
//!
//! The capabilities the payment-sheet workflow needs from a payment provider.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentGateway (trait)                    │
//! │  ├── list_customers_by_email()                              │
//! │  ├── create_customer()                                      │
//! │  ├── delete_customer()                                      │
//! │  ├── create_ephemeral_key()                                 │
//! │  ├── create_payment_intent()                                │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!              ┌─────────────┴─────────────┐
//!              │                           │
//!      ┌───────┴───────┐           ┌───────┴────────┐
//!      │ StripeGateway │           │RecordingGateway│
//!      │ (sheet-stripe)│           │   (testing)    │
//!      └───────────────┘           └────────────────┘
//! ```

use crate::customer::{CustomerRecord, DeletedCustomer, NewCustomer};
use crate::error::GatewayResult;
use crate::payment::{EphemeralKey, PaymentIntent, PaymentIntentRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// A payment provider, treated as an opaque trusted service.
///
/// Implementations perform exactly one upstream call per method and never
/// retry.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// List customers whose email matches, in provider order.
    ///
    /// Callers only look at the first entry, so implementations may cap the
    /// result at one.
    async fn list_customers_by_email(&self, email: &str) -> GatewayResult<Vec<CustomerRecord>>;

    /// Create a new customer.
    async fn create_customer(&self, customer: &NewCustomer) -> GatewayResult<CustomerRecord>;

    /// Delete a customer by id. Deleting an unknown or already-deleted id
    /// is an error.
    async fn delete_customer(&self, customer_id: &str) -> GatewayResult<DeletedCustomer>;

    /// Mint an ephemeral key scoped to one customer.
    async fn create_ephemeral_key(&self, customer_id: &str) -> GatewayResult<EphemeralKey>;

    /// Create a payment intent.
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> GatewayResult<PaymentIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
