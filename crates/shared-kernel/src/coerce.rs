//! Loose scalar coercions applied to untyped record fields.
//!
//! Input records are only checked for key presence, so every consumer must
//! cope with arbitrary JSON values in any field.

use std::borrow::Cow;

use serde_json::Value;

/// Best-effort integer view of `value`.
///
/// Numbers are truncated toward zero. Strings yield their leading,
/// optionally signed, run of ASCII digits after leading whitespace
/// (`"42abc"` is `42`, `" -7"` is `-7`). Out-of-range prefixes saturate.
/// Everything else has no numeric value.
pub fn loose_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let mut acc: i64 = 0;
    for b in rest[..digits_len].bytes() {
        let digit = i64::from(b - b'0');
        acc = acc.saturating_mul(10).saturating_add(digit);
    }
    Some(if negative { acc.saturating_neg() } else { acc })
}

/// Truthiness of a JSON value.
///
/// `false`, `null`, zero, the empty string and empty containers are false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Text used when a field is shown to a reader: strings verbatim,
/// anything else as its JSON text.
pub fn display_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
