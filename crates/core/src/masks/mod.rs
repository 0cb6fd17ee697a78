//! Masks module - redaction of card and account numbers.

mod card_numbers;
mod mask_engine;
mod masks_errors;

pub use card_numbers::{card_numbers, format_card_number};
pub use mask_engine::{mask_account, mask_card};
pub use masks_errors::{IdentifierKind, LengthRequirement, MaskError};
