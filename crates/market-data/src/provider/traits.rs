//! Exchange-rate provider trait definition.

use crate::errors::MarketDataError;
use crate::models::{Conversion, ConversionRequest};

/// Trait for exchange-rate providers.
///
/// A provider answers one conversion per call. Calls block the current thread
/// until the provider answers or its timeout elapses; nothing is retried.
///
/// # Example
///
/// ```ignore
/// use bankops_market_data::{Conversion, ConversionRequest, ExchangeRateProvider, MarketDataError};
///
/// struct FixedRate(rust_decimal::Decimal);
///
/// impl ExchangeRateProvider for FixedRate {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     fn convert(&self, request: &ConversionRequest) -> Result<Conversion, MarketDataError> {
///         Ok(Conversion {
///             request: request.clone(),
///             result: request.amount * self.0,
///             source: self.id().to_string(),
///         })
///     }
/// }
/// ```
pub trait ExchangeRateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Convert `request.amount` from `request.from` into `request.to`.
    fn convert(&self, request: &ConversionRequest) -> Result<Conversion, MarketDataError>;
}
