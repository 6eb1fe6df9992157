//! # Test Gateway
//!
//! An in-memory [`PaymentGateway`] that records every call. Enabled for this
//! crate's tests and, through the `testing` feature, for downstream crates.

use crate::customer::{CustomerRecord, DeletedCustomer, NewCustomer};
use crate::error::{GatewayError, GatewayResult};
use crate::gateway::PaymentGateway;
use crate::payment::{EphemeralKey, PaymentIntent, PaymentIntentRequest};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Gateway operations, as recorded by [`RecordingGateway`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayCall {
    ListCustomers,
    CreateCustomer,
    DeleteCustomer,
    CreateEphemeralKey,
    CreatePaymentIntent,
}

#[derive(Default)]
struct Ledger {
    customers: Vec<CustomerRecord>,
    created: Vec<CustomerRecord>,
    ephemeral_keys: Vec<String>,
    payment_intents: Vec<PaymentIntentRequest>,
    calls: Vec<GatewayCall>,
    failures: HashMap<GatewayCall, GatewayError>,
    next_id: u32,
}

impl Ledger {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}_{:06}", prefix, self.next_id)
    }

    /// Records the call and returns the configured failure, if any
    fn enter(&mut self, call: GatewayCall) -> GatewayResult<()> {
        self.calls.push(call);
        match self.failures.get(&call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// In-memory gateway.
///
/// Customers are listed in the order they were seeded or created.
#[derive(Default)]
pub struct RecordingGateway {
    ledger: Mutex<Ledger>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Insert a customer without recording a call
    pub fn seed_customer(&self, name: &str, email: &str) -> CustomerRecord {
        let mut ledger = self.ledger();
        let customer = CustomerRecord {
            id: ledger.next_id("cus"),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            created: Some(Utc::now()),
        };
        ledger.customers.push(customer.clone());
        customer
    }

    /// Make every later call of this kind fail with `error`
    pub fn fail_on(&self, call: GatewayCall, error: GatewayError) {
        self.ledger().failures.insert(call, error);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.ledger().calls.clone()
    }

    /// Customers created through the gateway (seeded ones excluded)
    pub fn created_customers(&self) -> Vec<CustomerRecord> {
        self.ledger().created.clone()
    }

    /// Customer ids ephemeral keys were minted for
    pub fn ephemeral_key_customers(&self) -> Vec<String> {
        self.ledger().ephemeral_keys.clone()
    }

    pub fn payment_intents(&self) -> Vec<PaymentIntentRequest> {
        self.ledger().payment_intents.clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn list_customers_by_email(&self, email: &str) -> GatewayResult<Vec<CustomerRecord>> {
        let mut ledger = self.ledger();
        ledger.enter(GatewayCall::ListCustomers)?;
        Ok(ledger
            .customers
            .iter()
            .filter(|c| c.email == email)
            .cloned()
            .collect())
    }

    async fn create_customer(&self, customer: &NewCustomer) -> GatewayResult<CustomerRecord> {
        let mut ledger = self.ledger();
        ledger.enter(GatewayCall::CreateCustomer)?;
        let record = CustomerRecord {
            id: ledger.next_id("cus"),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            created: Some(Utc::now()),
        };
        ledger.customers.push(record.clone());
        ledger.created.push(record.clone());
        Ok(record)
    }

    async fn delete_customer(&self, customer_id: &str) -> GatewayResult<DeletedCustomer> {
        let mut ledger = self.ledger();
        ledger.enter(GatewayCall::DeleteCustomer)?;
        let before = ledger.customers.len();
        ledger.customers.retain(|c| c.id != customer_id);
        if ledger.customers.len() == before {
            return Err(GatewayError::provider(
                404,
                format!("No such customer: '{}'", customer_id),
            ));
        }
        Ok(DeletedCustomer::confirmed(customer_id))
    }

    async fn create_ephemeral_key(&self, customer_id: &str) -> GatewayResult<EphemeralKey> {
        let mut ledger = self.ledger();
        ledger.enter(GatewayCall::CreateEphemeralKey)?;
        ledger.ephemeral_keys.push(customer_id.to_string());
        let id = ledger.next_id("ephkey");
        Ok(EphemeralKey {
            secret: format!("ek_test_{}", id),
            id,
            expires: None,
        })
    }

    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> GatewayResult<PaymentIntent> {
        let mut ledger = self.ledger();
        ledger.enter(GatewayCall::CreatePaymentIntent)?;
        ledger.payment_intents.push(request.clone());
        let id = ledger.next_id("pi");
        Ok(PaymentIntent {
            client_secret: format!("{}_secret_test", id),
            id,
            amount: request.amount,
            currency: request.currency,
        })
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}
