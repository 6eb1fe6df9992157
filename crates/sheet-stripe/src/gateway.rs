//! # Stripe Gateway
//!
//! `PaymentGateway` over the Stripe REST API: customers, ephemeral keys and
//! payment intents. One HTTP call per operation, no retries.

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sheet_core::{
    CustomerRecord, DeletedCustomer, EphemeralKey, GatewayError, GatewayResult, NewCustomer,
    PaymentGateway, PaymentIntent, PaymentIntentRequest, SheetError, SheetResult,
};
use tracing::{debug, error, instrument};

/// Stripe implementation of [`PaymentGateway`]
pub struct StripeGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeGateway {
    /// Create a new Stripe gateway
    pub fn new(config: StripeConfig) -> SheetResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                SheetError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> SheetResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Build `{api_base_url}/v1/{segments...}`, encoding each segment
    fn endpoint(&self, segments: &[&str]) -> GatewayResult<Url> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|e| {
            GatewayError::Network(format!("Invalid API base URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| GatewayError::Network("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("v1")
            .extend(segments);

        Ok(url)
    }

    /// Send an authenticated request and decode the JSON response
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> GatewayResult<T> {
        let response = request
            .header("Authorization", self.config.auth_header())
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Parse Stripe error
            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(GatewayError::Provider {
                    status: status.as_u16(),
                    message: error_response.error.message,
                    code: error_response.error.code,
                });
            }

            return Err(GatewayError::provider(
                status.as_u16(),
                format!("HTTP {}: {}", status, body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            GatewayError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self, email))]
    async fn list_customers_by_email(&self, email: &str) -> GatewayResult<Vec<CustomerRecord>> {
        let url = self.endpoint(&["customers"])?;

        // Only the first match is ever used
        let request = self
            .client
            .get(url)
            .query(&[("email", email), ("limit", "1")]);

        let list: StripeList<StripeCustomer> = self.send(request).await?;
        debug!("Stripe customer lookup: {} match(es)", list.data.len());

        Ok(list.data.into_iter().map(CustomerRecord::from).collect())
    }

    #[instrument(skip(self, customer))]
    async fn create_customer(&self, customer: &NewCustomer) -> GatewayResult<CustomerRecord> {
        let url = self.endpoint(&["customers"])?;

        let mut form_params: Vec<(&str, &str)> = vec![
            ("name", customer.name.as_str()),
            ("email", customer.email.as_str()),
        ];
        if let Some(ref phone) = customer.phone {
            form_params.push(("phone", phone.as_str()));
        }

        let created: StripeCustomer = self.send(self.client.post(url).form(&form_params)).await?;
        debug!("Created Stripe customer: id={}", created.id);

        Ok(created.into())
    }

    #[instrument(skip(self))]
    async fn delete_customer(&self, customer_id: &str) -> GatewayResult<DeletedCustomer> {
        let url = self.endpoint(&["customers", customer_id])?;

        let deleted: StripeDeletedCustomer = self.send(self.client.delete(url)).await?;

        Ok(DeletedCustomer {
            id: deleted.id,
            object: deleted.object,
            deleted: deleted.deleted,
        })
    }

    #[instrument(skip(self))]
    async fn create_ephemeral_key(&self, customer_id: &str) -> GatewayResult<EphemeralKey> {
        let url = self.endpoint(&["ephemeral_keys"])?;

        let request = self
            .client
            .post(url)
            .header("Stripe-Version", &self.config.ephemeral_key_api_version)
            .form(&[("customer", customer_id)]);

        let key: StripeEphemeralKey = self.send(request).await?;
        debug!("Created Stripe ephemeral key: id={}", key.id);

        Ok(EphemeralKey {
            id: key.id,
            secret: key.secret,
            expires: key.expires.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    #[instrument(skip(self, request), fields(customer_id = %request.customer_id, amount = request.amount))]
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> GatewayResult<PaymentIntent> {
        let url = self.endpoint(&["payment_intents"])?;

        let amount = request.amount.to_string();
        let automatic = request.automatic_payment_methods.to_string();
        let form_params = [
            ("amount", amount.as_str()),
            ("currency", request.currency.as_str()),
            ("customer", request.customer_id.as_str()),
            ("automatic_payment_methods[enabled]", automatic.as_str()),
        ];

        let intent: StripePaymentIntent =
            self.send(self.client.post(url).form(&form_params)).await?;
        debug!("Created Stripe payment intent: id={}", intent.id);

        let client_secret = intent.client_secret.ok_or_else(|| {
            GatewayError::Serialization(format!(
                "Payment intent {} has no client_secret",
                intent.id
            ))
        })?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
            amount: intent.amount,
            currency: request.currency,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeList<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct StripeCustomer {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    created: Option<i64>,
}

impl From<StripeCustomer> for CustomerRecord {
    fn from(customer: StripeCustomer) -> Self {
        CustomerRecord {
            id: customer.id,
            name: customer.name.unwrap_or_default(),
            email: customer.email.unwrap_or_default(),
            phone: customer.phone,
            created: customer
                .created
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeDeletedCustomer {
    id: String,
    object: String,
    deleted: bool,
}

#[derive(Debug, Deserialize)]
struct StripeEphemeralKey {
    id: String,
    secret: String,
    #[serde(default)]
    expires: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    amount: i64,
    #[serde(default)]
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}
