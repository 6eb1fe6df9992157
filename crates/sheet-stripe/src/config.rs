//! # Stripe Configuration
//!
//! Configuration management for the Stripe gateway.
//! Secrets are loaded from environment variables once, at startup.

use sheet_core::SheetError;
use std::env;

/// Stripe API version ephemeral keys are minted for. Must match the version
/// the mobile SDK was built against.
pub const EPHEMERAL_KEY_API_VERSION: &str = "2024-12-18.acacia";

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_..., sk_live_... or a restricted rk_ key)
    pub secret_key: String,

    /// Publishable key (pk_test_... or pk_live_...), handed to clients
    pub publishable_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// `Stripe-Version` sent when creating ephemeral keys
    pub ephemeral_key_api_version: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    /// - `STRIPE_PUBLIC_KEY`
    pub fn from_env() -> Result<Self, SheetError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` (env var name → value)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SheetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("STRIPE_SECRET_KEY").ok_or_else(|| {
            SheetError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;

        let publishable_key = lookup("STRIPE_PUBLIC_KEY").ok_or_else(|| {
            SheetError::Configuration("STRIPE_PUBLIC_KEY not set".to_string())
        })?;

        let config = Self::new(secret_key, publishable_key);
        config.validate()?;
        Ok(config)
    }

    /// Create config with explicit values (for testing)
    pub fn new(secret_key: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            publishable_key: publishable_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ephemeral_key_api_version: EPHEMERAL_KEY_API_VERSION.to_string(),
        }
    }

    /// Check key formats
    pub fn validate(&self) -> Result<(), SheetError> {
        let secret_ok = ["sk_test_", "sk_live_", "rk_test_", "rk_live_"]
            .iter()
            .any(|prefix| self.secret_key.starts_with(prefix));
        if !secret_ok {
            return Err(SheetError::Configuration(
                "STRIPE_SECRET_KEY must start with sk_test_, sk_live_, rk_test_ or rk_live_"
                    .to_string(),
            ));
        }

        if !self.publishable_key.starts_with("pk_test_")
            && !self.publishable_key.starts_with("pk_live_")
        {
            return Err(SheetError::Configuration(
                "STRIPE_PUBLIC_KEY must start with pk_test_ or pk_live_".to_string(),
            ));
        }

        Ok(())
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
