//! Lenient field coercion.
//!
//! Numbers are read from the longest numeric prefix after leading whitespace,
//! so `"12 votes"` is 12 and `"3.9"` read as an integer is 3. Anything without
//! a numeric prefix becomes [`Loose::Invalid`]. None of these functions fail.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Loose;

static INT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+").unwrap());

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Date-time layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, read as midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Base-10 integer from the leading digits of `raw`.
pub fn loose_int(raw: &str) -> Loose<i64> {
    INT_PREFIX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .into()
}

/// Float from the leading numeric prefix of `raw`.
pub fn loose_float(raw: &str) -> Loose<f64> {
    let Some(m) = FLOAT_PREFIX.find(raw.trim_start()) else {
        return Loose::Invalid;
    };
    let text = m.as_str();
    if text.ends_with("Infinity") {
        let sign = if text.starts_with('-') { -1.0 } else { 1.0 };
        return Loose::Valid(sign * f64::INFINITY);
    }
    text.parse::<f64>().ok().into()
}

/// Timestamp from a handful of common layouts; offsets are folded into UTC.
pub fn loose_date(raw: &str) -> Loose<NaiveDateTime> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Loose::Valid(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Loose::Valid(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .into()
}

/// Exactly `"true"` is true; every other string is false.
pub fn strict_bool(raw: &str) -> bool {
    raw == "true"
}
