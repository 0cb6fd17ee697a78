//! Bankops Market Data Crate
//!
//! Provider-agnostic currency conversion for the bankops libraries.
//!
//! # Overview
//!
//! A caller builds a [`ConversionRequest`] and hands it to any
//! [`ExchangeRateProvider`]. The only shipped provider is
//! [`ExchangeRatesDataProvider`], a blocking client for the apilayer
//! "Exchange Rates Data" `/convert` endpoint.
//!
//! # Core Types
//!
//! - [`ConversionRequest`] - Source code, target code and amount
//! - [`Conversion`] - The provider's answer
//! - [`MarketDataError`] - Everything that can go wrong with one request

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Conversion, ConversionRequest};
pub use provider::exchange_rates_data::ExchangeRatesDataProvider;
pub use provider::ExchangeRateProvider;
