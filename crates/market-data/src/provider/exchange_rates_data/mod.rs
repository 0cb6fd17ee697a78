//! apilayer "Exchange Rates Data" provider.
//!
//! Converts an amount between two currencies with a single `GET /convert`
//! request. The API key travels in the `apikey` header and the conversion in
//! the `from`, `to` and `amount` query parameters.
//!
//! Successful answers look like `{"success": true, "result": 7500.5, ...}`,
//! refusals like `{"success": false, "error": {"info": "..."}}`.

use log::debug;
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{Conversion, ConversionRequest};
use crate::provider::ExchangeRateProvider;

/// Default conversion endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.apilayer.com/exchangerates_data/convert";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATES_DATA";

/// Header carrying the API key
const API_KEY_HEADER: &str = "apikey";

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    #[serde(default)]
    success: bool,
    result: Option<f64>,
    error: Option<ConvertError>,
}

#[derive(Debug, Deserialize)]
struct ConvertError {
    info: Option<String>,
}

/// Exchange Rates Data provider.
///
/// # Example
///
/// ```ignore
/// use bankops_market_data::ExchangeRatesDataProvider;
///
/// let provider = ExchangeRatesDataProvider::new("your_api_key".to_string());
/// ```
pub struct ExchangeRatesDataProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExchangeRatesDataProvider {
    /// Create a provider against the public endpoint with the default timeout.
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_BASE_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Create a provider against an explicit endpoint and timeout.
    pub fn with_endpoint(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }

    fn fetch(&self, request: &ConversionRequest) -> Result<String, MarketDataError> {
        let amount = request.amount.to_string();
        let params = [
            ("from", request.from.as_str()),
            ("to", request.to.as_str()),
            ("amount", amount.as_str()),
        ];

        debug!(
            "Exchange Rates Data request: {} from={} to={} amount={}",
            self.base_url, request.from, request.to, amount
        );

        let response = self
            .client
            .get(&self.base_url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(Self::map_transport_error)
    }

    fn map_transport_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Transport {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            }
        }
    }

    /// Extract the converted amount from a `/convert` response body.
    fn parse_result(body: &str) -> Result<Decimal, MarketDataError> {
        let parsed: ConvertResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        if !parsed.success {
            let info = parsed
                .error
                .and_then(|e| e.info)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(MarketDataError::ServiceRejected {
                provider: PROVIDER_ID.to_string(),
                info,
            });
        }

        let result = parsed
            .result
            .ok_or_else(|| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: "missing result".to_string(),
            })?;

        Decimal::try_from(result).map_err(|_| MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("result {} is not a finite decimal", result),
        })
    }
}

/// Three upper-case ASCII letters, as the service expects.
fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

impl ExchangeRateProvider for ExchangeRatesDataProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn convert(&self, request: &ConversionRequest) -> Result<Conversion, MarketDataError> {
        for code in [&request.from, &request.to] {
            if !is_currency_code(code) {
                return Err(MarketDataError::UnsupportedCurrency(code.clone()));
            }
        }

        let body = self.fetch(request)?;
        let result = Self::parse_result(&body)?;

        Ok(Conversion {
            request: request.clone(),
            result,
            source: PROVIDER_ID.to_string(),
        })
    }
}
