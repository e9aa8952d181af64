//! Forgiving field parsers for records that arrive from loosely typed storage.
//!
//! Amounts may show up as JSON numbers, numeric strings ("1,200.50", "₹500"),
//! `null`, or garbage. Anything that cannot be read as a finite number becomes
//! `0.0` instead of failing the whole record.

use chrono::{DateTime, NaiveDate};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}

/// Parse the leading numeric part of a string, `parseFloat` style.
///
/// Currency symbols, thousands separators and surrounding whitespace are
/// stripped first. Returns `0.0` when no number can be read.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '₹' | '$' | ' '))
        .collect();

    if let Ok(v) = cleaned.parse::<f64>() {
        return finite_or_zero(v);
    }

    // Longest prefix that looks like [+-]digits[.digits]
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }
    cleaned[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Parse a date given as `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    // "2026-02-18 10:30:00" and similar
    s.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

/// `deserialize_with` helper: any value → finite `f64`, defaulting to `0.0`.
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Number(n) => finite_or_zero(n),
        RawValue::Text(s) => parse_amount(&s),
        RawValue::Other(_) => 0.0,
    })
}

/// Like [`amount`], but `null` and unreadable values become `None`.
pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Number(n) if n.is_finite() => Some(n),
        RawValue::Text(s) if !s.trim().is_empty() => Some(parse_amount(&s)),
        _ => None,
    })
}

/// `deserialize_with` helper for optional dates.
pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(s) => parse_date(&s),
        _ => None,
    })
}

/// Read a string label, or `None` for anything that is not a string.
pub(crate) fn label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_variants() {
        assert_eq!(parse_amount("1234.5"), 1234.5);
        assert_eq!(parse_amount("1,200.50"), 1200.5);
        assert_eq!(parse_amount("₹500"), 500.0);
        assert_eq!(parse_amount(" -42 "), -42.0);
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_parse_date_formats() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
        assert_eq!(parse_date("2026-02-18"), Some(d));
        assert_eq!(parse_date("2026-02-18T10:30:00Z"), Some(d));
        assert_eq!(parse_date("2026-02-18 10:30:00"), Some(d));
        assert_eq!(parse_date("18/02/2026"), None);
    }

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "amount")]
        value: f64,
        #[serde(default, deserialize_with = "optional_amount")]
        extra: Option<f64>,
    }

    #[test]
    fn test_amount_field_coercion() {
        let r: Row = serde_json::from_str(r#"{"value": "abc", "extra": null}"#).unwrap();
        assert_eq!(r.value, 0.0);
        assert_eq!(r.extra, None);

        let r: Row = serde_json::from_str(r#"{"value": 250, "extra": "99.5"}"#).unwrap();
        assert_eq!(r.value, 250.0);
        assert_eq!(r.extra, Some(99.5));

        let r: Row = serde_json::from_str(r#"{"value": true}"#).unwrap();
        assert_eq!(r.value, 0.0);

        let r: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(r.value, 0.0);
        assert_eq!(r.extra, None);
    }
}
