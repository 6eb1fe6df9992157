//! # Payment-Sheet Workflow
//!
//! Customer resolution and session issuance. A payment sheet is built in two
//! straight-line steps:
//!
//! 1. Find the customer by email, or create one.
//! 2. Mint an ephemeral key and a payment intent for that customer. The two
//!    calls only share the customer id, so they run concurrently.
//!
//! Nothing is retried and nothing is rolled back: if one of the two calls in
//! step 2 fails, whatever the other one created stays on the provider.

use crate::customer::{CustomerRecord, DeletedCustomer, NewCustomer};
use crate::error::SheetResult;
use crate::gateway::BoxedPaymentGateway;
use crate::payment::{PaymentIntentRequest, PaymentSessionCredentials};
use crate::request::{
    validate_customer_id, CustomerLookupRequest, PaymentSheetRequest, ValidatedPaymentSheet,
};
use tracing::{debug, info, instrument};

/// Runs the payment-sheet endpoints against a gateway.
///
/// Holds only immutable data, so one instance is shared by every request.
#[derive(Clone)]
pub struct PaymentSheetService {
    gateway: BoxedPaymentGateway,
    publishable_key: String,
}

impl PaymentSheetService {
    pub fn new(gateway: BoxedPaymentGateway, publishable_key: impl Into<String>) -> Self {
        Self {
            gateway,
            publishable_key: publishable_key.into(),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.gateway.provider_name()
    }

    /// Validate the request, resolve the customer and issue credentials.
    #[instrument(skip_all)]
    pub async fn create_payment_sheet(
        &self,
        request: PaymentSheetRequest,
    ) -> SheetResult<PaymentSessionCredentials> {
        let ValidatedPaymentSheet { customer, amount } = request.validate()?;

        let customer = self.resolve_or_create_customer(&customer).await?;
        self.issue_session_credentials(&customer, amount).await
    }

    /// First customer matching the email, or a newly created one.
    #[instrument(skip_all, fields(provider = self.provider_name()))]
    pub async fn resolve_or_create_customer(
        &self,
        details: &NewCustomer,
    ) -> SheetResult<CustomerRecord> {
        let existing = self.gateway.list_customers_by_email(&details.email).await?;

        if let Some(customer) = existing.into_iter().next() {
            debug!("Reusing existing customer: {}", customer.id);
            return Ok(customer);
        }

        let customer = self.gateway.create_customer(details).await?;
        info!("Created customer: {}", customer.id);
        Ok(customer)
    }

    /// Mint the ephemeral key and payment intent for a resolved customer.
    #[instrument(skip_all, fields(customer_id = %customer.id, amount = amount))]
    pub async fn issue_session_credentials(
        &self,
        customer: &CustomerRecord,
        amount: i64,
    ) -> SheetResult<PaymentSessionCredentials> {
        let intent_request = PaymentIntentRequest::for_sheet(&customer.id, amount);

        let (ephemeral_key, payment_intent) = tokio::try_join!(
            self.gateway.create_ephemeral_key(&customer.id),
            self.gateway.create_payment_intent(&intent_request),
        )?;

        info!(
            "Issued payment sheet: customer={}, payment_intent={}",
            customer.id, payment_intent.id
        );

        Ok(PaymentSessionCredentials {
            payment_intent_secret: payment_intent.client_secret,
            ephemeral_secret: ephemeral_key.secret,
            customer_id: customer.id.clone(),
            publishable_key: self.publishable_key.clone(),
        })
    }

    /// First customer matching the email in the lookup request, if any.
    #[instrument(skip_all)]
    pub async fn find_customer(
        &self,
        request: CustomerLookupRequest,
    ) -> SheetResult<Option<CustomerRecord>> {
        let email = request.validate()?;
        let customers = self.gateway.list_customers_by_email(&email).await?;
        Ok(customers.into_iter().next())
    }

    /// Delete a customer on the gateway.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, customer_id: &str) -> SheetResult<DeletedCustomer> {
        let customer_id = validate_customer_id(customer_id)?;
        let deleted = self.gateway.delete_customer(customer_id).await?;
        info!("Deleted customer: {}", deleted.id);
        Ok(deleted)
    }
}
