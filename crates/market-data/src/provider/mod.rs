//! Exchange-rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `ExchangeRateProvider` trait that all providers implement
//! - The apilayer "Exchange Rates Data" HTTP provider

mod traits;

pub mod exchange_rates_data;

pub use traits::ExchangeRateProvider;
