//! Loose value handling for inbound book payloads.
//!
//! Clients send whatever their form produced: years arrive as strings or numbers, ids as
//! numbers, empty inputs as `""`. These helpers decide what counts as "supplied" and how a
//! value is turned into the stored scalar.

use serde_json::Value as JsonValue;

/// Returns true when a value counts as supplied.
///
/// Absent fields are `None` at the call-site; here `null`, `false`, `0` and `""` are falsy.
/// Arrays and objects are always truthy.
pub fn is_truthy(v: &JsonValue) -> bool {
    match v {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Text form of a value for the string fields of a record.
///
/// Strings are taken verbatim; anything else is stored as its JSON text.
pub fn text_of(v: &JsonValue) -> String {
    match v {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integer-prefix parsing of a publication year.
///
/// Strings: leading whitespace is skipped, an optional sign is accepted, a `0x` prefix
/// switches to base 16, then the longest run of digits is taken. `"19.5"` yields 19,
/// `"1965abc"` yields 1965. Numbers are truncated toward zero.
///
/// `None` means "not a number" and is persisted as `null`. Values outside the `i64`
/// range are also treated as not a number.
pub fn parse_int(v: &JsonValue) -> Option<i64> {
    match v {
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            if !f.is_finite() {
                return None;
            }
            let t = f.trunc();
            if t < i64::MIN as f64 || t > i64::MAX as f64 {
                return None;
            }
            Some(t as i64)
        }
        JsonValue::String(s) => parse_int_str(s),
        _ => None,
    }
}

fn parse_int_str(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
