use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_ACCOUNT_LABEL, REFERENCE_CURRENCY};
use bankops_market_data::provider::exchange_rates_data::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub const ENV_API_KEY: &str = "EXCHANGE_RATES_DATA_API_KEY";
/// Name used by older `.env` files
pub const ENV_API_KEY_LEGACY: &str = "exchange_rates_data_api_key";
pub const ENV_RATES_URL: &str = "EXCHANGE_RATES_DATA_URL";
pub const ENV_TIMEOUT_SECS: &str = "EXCHANGE_RATES_TIMEOUT_SECS";
pub const ENV_REFERENCE_CURRENCY: &str = "REFERENCE_CURRENCY";
pub const ENV_LOG_FILE_PATH: &str = "LOG_FILE_PATH";
pub const ENV_ACCOUNT_LABEL: &str = "ACCOUNT_LABEL";

/// Runtime configuration, built once and passed to the components that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Credential for the rate-conversion service; conversions are skipped without it
    pub exchange_rates_api_key: Option<String>,
    pub exchange_rates_url: String,
    pub request_timeout: Duration,
    /// Upper-case ISO 4217 code normalized amounts are expressed in
    pub reference_currency: String,
    /// Destination of the call log; stdout when unset
    pub call_log_path: Option<PathBuf>,
    pub account_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exchange_rates_api_key: None,
            exchange_rates_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            reference_currency: REFERENCE_CURRENCY.to_string(),
            call_log_path: None,
            account_label: DEFAULT_ACCOUNT_LABEL.to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let timeout_secs = get(ENV_TIMEOUT_SECS).and_then(|v| v.parse::<u64>().ok());

        Self {
            exchange_rates_api_key: get(ENV_API_KEY).or_else(|| get(ENV_API_KEY_LEGACY)),
            exchange_rates_url: get(ENV_RATES_URL).unwrap_or(defaults.exchange_rates_url),
            request_timeout: timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            reference_currency: get(ENV_REFERENCE_CURRENCY)
                .map(|c| c.to_uppercase())
                .unwrap_or(defaults.reference_currency),
            call_log_path: get(ENV_LOG_FILE_PATH).map(PathBuf::from),
            account_label: get(ENV_ACCOUNT_LABEL).unwrap_or(defaults.account_label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.exchange_rates_api_key, None);
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert_eq!(settings.reference_currency, "RUB");
        assert_eq!(settings.account_label, "Счет");
        assert_eq!(
            settings.exchange_rates_url,
            "https://api.apilayer.com/exchangerates_data/convert"
        );
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_API_KEY, "secret"),
            (ENV_RATES_URL, "http://localhost:9000/convert"),
            (ENV_TIMEOUT_SECS, "3"),
            (ENV_REFERENCE_CURRENCY, "usd"),
            (ENV_LOG_FILE_PATH, "/tmp/calls.log"),
            (ENV_ACCOUNT_LABEL, "Account"),
        ]));
        assert_eq!(settings.exchange_rates_api_key.as_deref(), Some("secret"));
        assert_eq!(settings.exchange_rates_url, "http://localhost:9000/convert");
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
        assert_eq!(settings.reference_currency, "USD");
        assert_eq!(settings.call_log_path, Some(PathBuf::from("/tmp/calls.log")));
        assert_eq!(settings.account_label, "Account");
    }

    #[test]
    fn test_legacy_api_key_name() {
        let settings = Settings::from_lookup(lookup_from(&[(ENV_API_KEY_LEGACY, "old")]));
        assert_eq!(settings.exchange_rates_api_key.as_deref(), Some("old"));

        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_API_KEY_LEGACY, "old"),
            (ENV_API_KEY, "new"),
        ]));
        assert_eq!(settings.exchange_rates_api_key.as_deref(), Some("new"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_API_KEY, "   "),
            (ENV_LOG_FILE_PATH, "  "),
        ]));
        assert_eq!(settings.exchange_rates_api_key, None);
        assert_eq!(settings.call_log_path, None);
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let settings = Settings::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
    }
}
