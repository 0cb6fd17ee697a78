use bankops_market_data::MarketDataError;
use thiserror::Error;

/// Reasons an operation amount could not be expressed in the reference currency.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Cannot parse amount {value:?}: {message}")]
    ParseFailure { value: String, message: String },

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("No API key configured for the exchange rate service")]
    MissingCredential,

    #[error("Exchange rate service unreachable: {0}")]
    TransportFailure(String),

    #[error("Exchange rate service error: {0}")]
    ServiceError(String),
}

impl From<MarketDataError> for FxError {
    fn from(e: MarketDataError) -> Self {
        if e.is_transport() {
            FxError::TransportFailure(e.to_string())
        } else {
            FxError::ServiceError(e.to_string())
        }
    }
}
