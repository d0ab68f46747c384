//! Lenient field parsing for raw getStats() records.
//!
//! Browsers omit fields, report them as strings, or change their type between
//! versions. None of that may fail a capture, so every conversion here falls
//! back to a sentinel instead of returning an error.


use serde_json::Value;

/// Sentinel for a missing or unreadable display field.
pub const NOT_AVAILABLE: &str = "NA";

/// Sentinel for a missing or unreadable numeric field.
pub const NUMERIC_SENTINEL: f64 = -1.0;

/// Returns the display form of a raw value, `"NA"` when it is absent or null.
pub fn value_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Parses a numeric value out of a raw value, `-1.0` when it cannot.
///
/// Numbers are taken as is, strings are parsed after trimming. Booleans,
/// arrays and objects are never numeric.
pub fn value_to_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .unwrap_or(NUMERIC_SENTINEL),
        Some(Value::String(s)) => parse_f64(s),
        _ => NUMERIC_SENTINEL,
    }
}

/// Parses `text` as a finite `f64`, `-1.0` otherwise.
pub fn parse_f64(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => NUMERIC_SENTINEL,
    }
}

/// Returns true if `value` is the numeric sentinel or not a usable number.
pub fn is_sentinel(value: f64) -> bool {
    value == NUMERIC_SENTINEL || !value.is_finite()
}

/// Returns true if `text` carries data, i.e. is not the display sentinel.
pub fn is_available(text: &str) -> bool {
    !text.is_empty() && text != NOT_AVAILABLE
}
