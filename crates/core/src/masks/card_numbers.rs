use crate::constants::MAX_CARD_NUMBER;

/// Formats `value` as a 16-digit card number in four space-separated groups.
pub fn format_card_number(value: u64) -> String {
    let digits = format!("{:016}", value);
    format!(
        "{} {} {} {}",
        &digits[0..4],
        &digits[4..8],
        &digits[8..12],
        &digits[12..16]
    )
}

/// Yields every card number in `start..=end`, formatted as `XXXX XXXX XXXX XXXX`.
///
/// `end` is clamped to the largest 16-digit value; an empty range yields nothing.
pub fn card_numbers(start: u64, end: u64) -> impl Iterator<Item = String> {
    (start..=end.min(MAX_CARD_NUMBER)).map(format_card_number)
}
