
use crate::util::{NOT_AVAILABLE, NUMERIC_SENTINEL, parse_f64, value_to_string};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of digits of a millisecond epoch timestamp, e.g. `1536834943435`.
pub const MILLIS_TIMESTAMP_DIGITS: usize = 13;

/// Normalizes a raw getStats() timestamp to a 13 digit millisecond epoch.
///
/// Some browsers report `1536834943435` and others `1.536834943435905E12`
/// (sub-millisecond precision in exponential notation). Exponential values
/// keep their mantissa digits, padded with zeros when shorter than 13 digits;
/// plain values keep their integer part. Both are truncated to 13 digits.
/// A negative exponent or mantissa cannot be an epoch and yields `"NA"`.
/// Anything else that is not a number is returned unchanged.
pub fn normalize_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let digits = match raw.find(['E', 'e']) {
        Some(exp) => {
            let (mantissa, exponent) = (&raw[..exp], &raw[exp + 1..]);
            if mantissa.parse::<f64>().is_err() {
                return raw.to_owned();
            }
            match exponent.parse::<i32>() {
                Ok(e) if e >= 0 && !mantissa.starts_with('-') => {}
                Ok(_) => return NOT_AVAILABLE.to_owned(),
                Err(_) => return raw.to_owned(),
            }
            let (int_part, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
            let mut digits = format!("{}{}", int_part.trim_start_matches('+'), fraction);
            while digits.len() < MILLIS_TIMESTAMP_DIGITS {
                digits.push('0');
            }
            digits
        }
        None => match raw.split_once('.') {
            Some((int_part, _)) => int_part.to_owned(),
            None => raw.to_owned(),
        },
    };

    digits.chars().take(MILLIS_TIMESTAMP_DIGITS).collect()
}

/// Reads a raw timestamp value as epoch milliseconds, `-1.0` when unusable.
pub fn timestamp_millis(value: Option<&Value>) -> f64 {
    parse_f64(&normalize_timestamp(&value_to_string(value)))
}

/// Wall clock as epoch milliseconds.
pub fn unix_millis_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(NUMERIC_SENTINEL)
}
