use bankops_market_data::{ConversionRequest, ExchangeRateProvider, ExchangeRatesDataProvider};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::{AMOUNT_DECIMAL_PLACES, SUPPORTED_FOREIGN_CURRENCIES};
use crate::operations::{OperationAmount, OperationRecord};
use crate::settings::Settings;

use super::fx_errors::FxError;

/// Expresses operation amounts in the reference currency.
///
/// Amounts already in the reference currency are returned as parsed. Amounts
/// in a supported foreign currency cost exactly one provider call each; there
/// is no caching and no retry.
pub struct CurrencyNormalizer {
    provider: Option<Arc<dyn ExchangeRateProvider>>,
    reference_currency: String,
}

impl CurrencyNormalizer {
    /// `provider` is `None` when no credential is available; foreign amounts
    /// then fail with [`FxError::MissingCredential`].
    pub fn new(
        provider: Option<Arc<dyn ExchangeRateProvider>>,
        reference_currency: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            reference_currency: reference_currency.into().to_uppercase(),
        }
    }

    /// Builds a normalizer backed by the Exchange Rates Data service when the
    /// settings carry an API key.
    pub fn from_settings(settings: &Settings) -> Self {
        let provider = settings.exchange_rates_api_key.as_ref().map(|key| {
            Arc::new(ExchangeRatesDataProvider::with_endpoint(
                key.clone(),
                settings.exchange_rates_url.clone(),
                settings.request_timeout,
            )) as Arc<dyn ExchangeRateProvider>
        });
        Self::new(provider, settings.reference_currency.clone())
    }

    pub fn reference_currency(&self) -> &str {
        &self.reference_currency
    }

    /// Returns the record's amount in the reference currency, rounded to two
    /// places, or `None` if it cannot be determined. The reason is logged.
    pub fn normalize_amount(&self, record: &OperationRecord) -> Option<Decimal> {
        match self.try_normalize(record) {
            Ok(amount) => Some(amount),
            Err(e) => {
                warn!(
                    "Cannot normalize amount of operation {}: {}",
                    record.id_label(),
                    e
                );
                None
            }
        }
    }

    /// Normalizes every record independently; one failure never affects the others.
    pub fn normalize_batch(&self, records: &[OperationRecord]) -> Vec<Option<Decimal>> {
        records.iter().map(|r| self.normalize_amount(r)).collect()
    }

    /// Same as [`normalize_amount`](Self::normalize_amount) but reports why
    /// normalization failed.
    pub fn try_normalize(&self, record: &OperationRecord) -> Result<Decimal, FxError> {
        let operation_amount = record
            .operation_amount
            .as_ref()
            .ok_or(FxError::MissingField("operationAmount"))?;

        if operation_amount.amount.is_none() {
            if let Some(raw) = operation_amount.extra.get("amount") {
                return Err(unreadable(raw, "amount must be a string or a number"));
            }
        }
        let amount = parse_amount(operation_amount.amount.as_deref())?;

        let currency = currency_code(operation_amount)?
            .unwrap_or_else(|| self.reference_currency.clone());

        if currency == self.reference_currency {
            return Ok(amount.round_dp(AMOUNT_DECIMAL_PLACES));
        }

        if !SUPPORTED_FOREIGN_CURRENCIES.contains(&currency.as_str()) {
            return Err(FxError::UnsupportedCurrency(currency));
        }

        let provider = self.provider.as_ref().ok_or(FxError::MissingCredential)?;

        let request = ConversionRequest::new(currency, self.reference_currency.clone(), amount);
        let conversion = provider.convert(&request)?;
        debug!(
            "Converted {} {} to {} {} via {}",
            request.amount, request.from, conversion.result, request.to, conversion.source
        );

        Ok(conversion.result.round_dp(AMOUNT_DECIMAL_PLACES))
    }
}

/// Upper-cased currency code, `None` when the record names no currency.
/// A currency block or code of the wrong type is an error rather than a
/// silent fallback to the reference currency.
fn currency_code(operation_amount: &OperationAmount) -> Result<Option<String>, FxError> {
    match &operation_amount.currency {
        Some(currency) => match (&currency.code, currency.extra.get("code")) {
            (Some(code), _) => Ok(Some(code.to_uppercase())),
            (None, Some(raw)) => Err(unreadable(raw, "currency code must be a string")),
            (None, None) => Ok(None),
        },
        None => match operation_amount.extra.get("currency") {
            Some(raw) => Err(unreadable(raw, "currency must be an object")),
            None => Ok(None),
        },
    }
}

fn unreadable(raw: &Value, message: &str) -> FxError {
    FxError::ParseFailure {
        value: raw.to_string(),
        message: message.to_string(),
    }
}

/// A missing or empty amount counts as zero.
fn parse_amount(raw: Option<&str>) -> Result<Decimal, FxError> {
    let raw = raw.unwrap_or("").trim();
    if raw.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| FxError::ParseFailure {
            value: raw.to_string(),
            message: e.to_string(),
        })
}
