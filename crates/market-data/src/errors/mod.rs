//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers every way a single conversion request can fail.
//! Callers that need to tell network trouble apart from a bad answer use
//! [`MarketDataError::is_transport`].

use thiserror::Error;

/// Errors that can occur while asking a provider to convert an amount.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Transport error: {provider} - {message}")]
    Transport {
        /// The provider that could not be reached
        provider: String,
        /// The underlying client error
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body could not be understood.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that answered
        provider: String,
        /// What was wrong with the body
        message: String,
    },

    /// The provider understood the request and refused it (`success: false`).
    #[error("Provider {provider} rejected the request: {info}")]
    ServiceRejected {
        /// The provider that rejected the request
        provider: String,
        /// The provider's own explanation
        info: String,
    },

    /// The provider does not handle this currency code.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

impl MarketDataError {
    /// Returns true when the failure happened before any response was read.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Transport { .. })
    }
}
