//! FX module - normalization of operation amounts into the reference currency.

mod currency_normalizer;
mod fx_errors;


pub use currency_normalizer::CurrencyNormalizer;
pub use fx_errors::FxError;
