//! Bankops Core - card and account masking, operation filtering and display,
//! and currency normalization of bank operations.
//!
//! Everything here is synchronous. The only network access is the optional
//! exchange rate lookup performed by [`fx::CurrencyNormalizer`].

pub mod constants;
pub mod display;
pub mod errors;
pub mod fx;
pub mod masks;
pub mod operations;
pub mod settings;
pub mod utils;

pub use display::{describe_operation, format_date, format_entity, DisplayLabels, OperationView};
pub use fx::{CurrencyNormalizer, FxError};
pub use masks::{card_numbers, mask_account, mask_card, MaskError};
pub use operations::{
    filter_by_currency, filter_by_state, load_operations, sort_by_date, transaction_descriptions,
    LoadError, OperationRecord,
};
pub use settings::Settings;
pub use utils::{CallLogger, LogDestination};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
