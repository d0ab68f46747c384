use serde::{Serialize, Serializer};
use shared::util::{NUMERIC_SENTINEL, is_sentinel};
use std::fmt;

/// A derived value, or the raw input it could not be derived from.
///
/// Serializes as a number, or as the string `"NA (<raw>)"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    NotAvailable(f64),
}

impl Metric {
    /// Nothing to derive from.
    pub const MISSING: Metric = Metric::NotAvailable(NUMERIC_SENTINEL);

    /// A raw reading, `NA (-1)` when it is the sentinel.
    pub fn reading(value: f64) -> Self {
        if is_sentinel(value) {
            Metric::MISSING
        } else {
            Metric::Value(value)
        }
    }

    /// `100 * part / whole`, `NA (<part>)` when either is unusable or
    /// `whole` is zero.
    pub fn percentage(part: f64, whole: f64) -> Self {
        if is_sentinel(part) || is_sentinel(whole) || whole == 0.0 {
            Metric::NotAvailable(part)
        } else {
            Metric::Value(100.0 * part / whole)
        }
    }

    /// Arithmetic mean of the usable `samples`, `NA (-1)` when there are none.
    pub fn mean(samples: impl IntoIterator<Item = f64>) -> Self {
        let (sum, count) = samples
            .into_iter()
            .filter(|v| !is_sentinel(*v))
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        if count == 0 {
            Metric::MISSING
        } else {
            Metric::Value(sum / count as f64)
        }
    }

    /// Sum of the usable `samples`, `NA (-1)` when there are none.
    pub fn sum(samples: impl IntoIterator<Item = f64>) -> Self {
        samples
            .into_iter()
            .filter(|v| !is_sentinel(*v))
            .fold(Metric::MISSING, |acc, v| match acc {
                Metric::Value(sum) => Metric::Value(sum + v),
                Metric::NotAvailable(_) => Metric::Value(v),
            })
    }

    /// Bits per second between two byte counters read `first_ms` and
    /// `last_ms` epoch milliseconds.
    ///
    /// `NA (<last_bytes>)` when a counter or timestamp is unusable or the
    /// interval is not positive.
    pub fn bitrate(first_bytes: f64, last_bytes: f64, first_ms: f64, last_ms: f64) -> Self {
        if [first_bytes, last_bytes, first_ms, last_ms]
            .into_iter()
            .any(is_sentinel)
        {
            return Metric::NotAvailable(last_bytes);
        }
        let seconds = (last_ms - first_ms) / 1000.0;
        if seconds <= 0.0 {
            return Metric::NotAvailable(last_bytes);
        }
        Metric::Value(8.0 * (last_bytes - first_bytes) / seconds)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Metric::Value(_))
    }

    /// The derived value, `None` when not available.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Metric::Value(v) => Some(v),
            Metric::NotAvailable(_) => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Metric::Value(v) => write!(f, "{v}"),
            Metric::NotAvailable(raw) => write!(f, "NA ({raw})"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Metric::Value(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(v as i64)
            }
            Metric::Value(v) => serializer.serialize_f64(v),
            Metric::NotAvailable(_) => serializer.collect_str(self),
        }
    }
}
