use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to convert `amount` from one currency into another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Source currency code (ISO 4217, upper-case)
    pub from: String,

    /// Target currency code (ISO 4217, upper-case)
    pub to: String,

    /// Amount expressed in `from`
    pub amount: Decimal,
}

impl ConversionRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// A successful conversion as reported by a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub request: ConversionRequest,

    /// Amount expressed in `request.to`, exactly as the provider reported it
    pub result: Decimal,

    /// Provider that answered (EXCHANGE_RATES_DATA, ...)
    pub source: String,
}
