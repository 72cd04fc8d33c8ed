//! Formatting helpers for clock faces, form stamps and cell values.

use time::{macros::format_description, OffsetDateTime, UtcOffset};

use super::timing::{TimeInterval, MS_PER_MINUTE, MS_PER_SECOND};

/// Two-character clock digit: `7 -> "07"`, `42 -> "42"`.
///
/// Works like slicing the last two characters off `"0{value}"`, so values
/// outside `0..=99` are cut rather than widened.
pub fn pad2(value: i64) -> String {
    let padded = format!("0{value}");
    let cut = padded.len().saturating_sub(2);
    padded[cut..].to_string()
}

/// `"{hours}:{minutes}:{seconds}"` with no zero padding.
///
/// Seconds keep their millisecond fraction (`"0:1:5.25"`), which is the
/// format the round and prediction endpoints have always stored.
pub fn format_elapsed(interval: &TimeInterval) -> String {
    let seconds = (interval.total_ms % MS_PER_MINUTE) as f64 / MS_PER_SECOND as f64;
    format!("{}:{}:{}", interval.hours, interval.minutes, seconds)
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2017-01-10T12:00:00.000Z`.
pub fn iso_timestamp(instant: OffsetDateTime) -> String {
    instant
        .to_offset(UtcOffset::UTC)
        .format(&format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
        .unwrap_or_else(|_| instant.unix_timestamp().to_string())
}

pub fn format_optional(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
