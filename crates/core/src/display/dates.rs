use chrono::NaiveDate;

use crate::constants::DISPLAY_DATE_FORMAT;

/// Parses a strict `YYYY-MM-DD` string.
///
/// chrono's `%Y-%m-%d` also accepts signed years and single-digit fields, so
/// the shape is checked by hand before the calendar check.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let all_digits = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !all_digits {
        return None;
    }

    let year = raw[0..4].parse().ok()?;
    let month = raw[5..7].parse().ok()?;
    let day = raw[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats an ISO-8601 date or date-time as `DD.MM.YYYY`.
///
/// Anything after a `T` separator (time, fraction, offset) is ignored. Input
/// that is not a real calendar date, including surrounding whitespace,
/// yields an empty string.
pub fn format_date(raw: &str) -> String {
    let date_part = match raw.split_once('T') {
        Some((date, _)) => date,
        None => raw,
    };

    parse_iso_date(date_part)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
