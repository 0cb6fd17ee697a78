//! Crate-level error type.
//!
//! Each module reports failures through its own error enum; this module folds
//! them into a single [`Error`] so callers composing several operations can use
//! `?` throughout.

use bankops_market_data::MarketDataError;
use thiserror::Error;

use crate::fx::FxError;
use crate::masks::MaskError;
use crate::operations::LoadError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Masking failed: {0}")]
    Mask(#[from] MaskError),

    #[error("Amount normalization failed: {0}")]
    Fx(#[from] FxError),

    #[error("Failed to load operations: {0}")]
    Load(#[from] LoadError),

    #[error("Exchange rate service failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
