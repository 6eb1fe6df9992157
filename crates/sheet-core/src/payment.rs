//! # Payment Artifacts
//!
//! Currency, the two gateway artifacts a payment sheet needs (ephemeral key
//! and payment intent), and the credential bundle handed to the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Currencies payment sheets are issued in (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    BRL,
}

impl Currency {
    /// Returns the lowercase ISO 4217 code, as the gateway expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::BRL => "brl",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::BRL
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Currency every payment sheet is issued in
pub const SHEET_CURRENCY: Currency = Currency::BRL;

/// Short-lived secret scoping client SDK access to one customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EphemeralKey {
    pub id: String,
    pub secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
}

/// Parameters for a new payment intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentRequest {
    pub customer_id: String,
    /// Amount in minor currency units
    pub amount: i64,
    pub currency: Currency,
    pub automatic_payment_methods: bool,
}

impl PaymentIntentRequest {
    /// Payment-sheet intent: fixed currency, automatic payment methods on
    pub fn for_sheet(customer_id: impl Into<String>, amount: i64) -> Self {
        Self {
            customer_id: customer_id.into(),
            amount,
            currency: SHEET_CURRENCY,
            automatic_payment_methods: true,
        }
    }
}

/// An in-progress charge attempt on the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: Currency,
}

/// Everything the client SDK needs to present a payment sheet.
///
/// Built fresh per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSessionCredentials {
    #[serde(rename = "paymentIntent")]
    pub payment_intent_secret: String,
    #[serde(rename = "ephemeralKey")]
    pub ephemeral_secret: String,
    #[serde(rename = "customer")]
    pub customer_id: String,
    #[serde(rename = "publishableKey")]
    pub publishable_key: String,
}
