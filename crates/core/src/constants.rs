/// Currency every normalized amount is expressed in
pub const REFERENCE_CURRENCY: &str = "RUB";

/// Foreign currencies the rate service is asked to convert
pub const SUPPORTED_FOREIGN_CURRENCIES: &[&str] = &["USD", "EUR"];

/// Number of decimal places kept on normalized amounts
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Operation state selected when the caller has no preference
pub const DEFAULT_STATE: &str = "EXECUTED";

/// Card brands recognized as the first word of an instrument description
pub const CARD_BRANDS: &[&str] = &["Visa", "Maestro", "MasterCard"];

/// Label that introduces an account number in instrument descriptions
pub const DEFAULT_ACCOUNT_LABEL: &str = "Счет";

/// Digits in a card number
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Minimum digits in an account number
pub const ACCOUNT_MIN_DIGITS: usize = 4;

/// Trailing account digits left visible after masking
pub const ACCOUNT_VISIBLE_DIGITS: usize = 4;

/// Largest value a 16-digit card number can hold
pub const MAX_CARD_NUMBER: u64 = 9_999_999_999_999_999;

/// Display format for dates
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Delimiter used by exported operation CSV files
pub const DEFAULT_CSV_DELIMITER: u8 = b';';
