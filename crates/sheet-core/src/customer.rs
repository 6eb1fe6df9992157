//! # Customers
//!
//! Customer records as reported by the payment gateway. The gateway owns
//! their lifetime; this service only reads them or asks for new ones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer owned by the payment gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Provider-assigned identifier (e.g., "cus_...")
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Creation time, when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Details used to create a customer when no match exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }

    /// Builder: attach a phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Deletion confirmation returned by the gateway.
///
/// Passed back to the client unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedCustomer {
    pub id: String,
    pub object: String,
    pub deleted: bool,
}

impl DeletedCustomer {
    pub fn confirmed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: "customer".to_string(),
            deleted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_builder() {
        let customer = NewCustomer::new("Ana", "ana@example.com").with_phone("+5511999990000");

        assert_eq!(customer.name, "Ana");
        assert_eq!(customer.email, "ana@example.com");
        assert_eq!(customer.phone.as_deref(), Some("+5511999990000"));
    }

    #[test]
    fn test_deleted_customer_wire_shape() {
        let deleted = DeletedCustomer::confirmed("cus_123");
        let json = serde_json::to_value(&deleted).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "cus_123", "object": "customer", "deleted": true})
        );
    }
}
