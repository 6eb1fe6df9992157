//! # Request Schemas
//!
//! Typed request bodies for each endpoint. Every field is optional at the
//! schema level so that a missing field turns into a [`SheetError::Validation`]
//! with the endpoint's message instead of a generic parse failure. Blank
//! strings count as missing.

use crate::customer::NewCustomer;
use crate::error::{SheetError, SheetResult};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PAYMENT_SHEET_FIELDS_REQUIRED: &str = "Name, email, and amount are required";
pub const CUSTOMER_ID_REQUIRED: &str = "Customer ID is required";

/// Body of `GET /customers`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerLookupRequest {
    #[serde(default)]
    pub email: Option<String>,
}

impl CustomerLookupRequest {
    /// Returns the email to look up
    pub fn validate(self) -> SheetResult<String> {
        non_blank(self.email).ok_or_else(|| SheetError::validation(EMAIL_REQUIRED))
    }
}

/// Body of `POST /payment-sheet`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentSheetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Accepts a JSON string or number; anything else counts as absent
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: Option<String>,
    /// Amount in minor currency units
    #[serde(default)]
    pub amount: Option<i64>,
}

/// A payment-sheet request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPaymentSheet {
    pub customer: NewCustomer,
    pub amount: i64,
}

impl PaymentSheetRequest {
    pub fn validate(self) -> SheetResult<ValidatedPaymentSheet> {
        let missing = || SheetError::validation(PAYMENT_SHEET_FIELDS_REQUIRED);

        let name = non_blank(self.name).ok_or_else(missing)?;
        let email = non_blank(self.email).ok_or_else(missing)?;
        let amount = self.amount.filter(|a| *a > 0).ok_or_else(missing)?;

        Ok(ValidatedPaymentSheet {
            customer: NewCustomer {
                name,
                email,
                phone: non_blank(self.phone),
            },
            amount,
        })
    }
}

/// Validates the `id` path segment of `DELETE /customers/{id}`
pub fn validate_customer_id(id: &str) -> SheetResult<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(SheetError::validation(CUSTOMER_ID_REQUIRED));
    }
    Ok(id)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
