use log::debug;

use crate::constants::{CARD_BRANDS, DEFAULT_ACCOUNT_LABEL};
use crate::masks::{mask_account, mask_card, MaskError};
use crate::settings::Settings;

/// Locale-dependent words used when rendering instruments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLabels {
    /// First word of an account description ("Счет" in the Russian exports)
    pub account_label: String,
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            account_label: DEFAULT_ACCOUNT_LABEL.to_string(),
        }
    }
}

impl DisplayLabels {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            account_label: settings.account_label.clone(),
        }
    }
}

/// Renders an instrument description such as `"Visa Platinum 7000792289606361"`
/// with its number masked, using the default labels.
///
/// See [`format_entity_with`].
pub fn format_entity(raw: &str) -> String {
    format_entity_with(raw, &DisplayLabels::default())
}

/// Renders an instrument description with its trailing number masked.
///
/// The first word picks the masking rule and is matched case-sensitively:
/// a card brand from [`CARD_BRANDS`] keeps every word but the number as the
/// label and masks the number as a card, the account label masks it as an
/// account. Fewer than two words, an unknown first word or a number that
/// cannot be masked all yield an empty string.
pub fn format_entity_with(raw: &str, labels: &DisplayLabels) -> String {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let (number, label_tokens) = match tokens.split_last() {
        Some((number, rest)) if !rest.is_empty() => (*number, rest),
        _ => return String::new(),
    };
    let first = label_tokens[0];

    let masked: Result<String, MaskError> = if CARD_BRANDS.contains(&first) {
        mask_card(number).map(|m| format!("{} {}", label_tokens.join(" "), m))
    } else if first == labels.account_label {
        mask_account(number).map(|m| format!("{} {}", first, m))
    } else {
        return String::new();
    };

    masked.unwrap_or_else(|e| {
        debug!("Cannot mask {:?}: {}", raw, e);
        String::new()
    })
}
