//! # Error Types
//!
//! Typed error handling for the payment-sheet service.
//!
//! Gateway implementations report failures as [`GatewayError`]. The workflow
//! collapses every one of them into [`SheetError::UpstreamUnavailable`]: the
//! HTTP layer never distinguishes network, auth or rate-limit failures.

use thiserror::Error;

/// Failure reported by a payment gateway call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Transport failure talking to the provider (DNS, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status
    #[error("Provider error [{status}]: {message}")]
    Provider {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// Provider answered with a body we could not parse
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GatewayError {
    /// Shorthand for a provider error without an error code
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Provider {
            status,
            message: message.into(),
            code: None,
        }
    }
}

/// Result type alias for gateway calls
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Core error type for all payment-sheet operations
#[derive(Debug, Error)]
pub enum SheetError {
    /// Missing or invalid request field
    #[error("{0}")]
    Validation(String),

    /// Any failure from the payment gateway
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] GatewayError),

    /// Missing or malformed startup configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SheetError {
    pub fn validation(message: impl Into<String>) -> Self {
        SheetError::Validation(message.into())
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            SheetError::Validation(_) => 400,
            SheetError::UpstreamUnavailable(_) => 500,
            SheetError::Configuration(_) => 500,
        }
    }

    /// True for errors caused by the client rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, SheetError::Validation(_))
    }
}

/// Result type alias for payment-sheet operations
pub type SheetResult<T> = Result<T, SheetError>;
