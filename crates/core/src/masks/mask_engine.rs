use crate::constants::{ACCOUNT_MIN_DIGITS, ACCOUNT_VISIBLE_DIGITS, CARD_NUMBER_DIGITS};

use super::masks_errors::{IdentifierKind, LengthRequirement, MaskError};

/// Keeps only the ASCII digits of `raw`; separators such as `-`, `.` and
/// whitespace are dropped.
fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Masks a 16-digit card number as `XXXX XX** **** XXXX`.
///
/// Only the first six and the last four digits stay visible.
pub fn mask_card(raw: &str) -> Result<String, MaskError> {
    let digits = digits_only(raw);
    if digits.len() != CARD_NUMBER_DIGITS {
        return Err(MaskError::InvalidLength {
            kind: IdentifierKind::Card,
            expected: LengthRequirement::Exactly(CARD_NUMBER_DIGITS),
            actual: digits.len(),
        });
    }

    // ASCII only, byte slicing is safe
    Ok(format!(
        "{} {}** **** {}",
        &digits[0..4],
        &digits[4..6],
        &digits[12..16]
    ))
}

/// Masks an account number as `**XXXX`, keeping the last four digits.
pub fn mask_account(raw: &str) -> Result<String, MaskError> {
    let digits = digits_only(raw);
    if digits.len() < ACCOUNT_MIN_DIGITS {
        return Err(MaskError::InvalidLength {
            kind: IdentifierKind::Account,
            expected: LengthRequirement::AtLeast(ACCOUNT_MIN_DIGITS),
            actual: digits.len(),
        });
    }

    Ok(format!(
        "**{}",
        &digits[digits.len() - ACCOUNT_VISIBLE_DIGITS..]
    ))
}
