//! Numeric validity checks.
//!
//! A raw record value is accepted for a series slot unless coercing it to a
//! number yields NaN. Missing values never pass; `null` passes and stays null.

use serde_json::Value;

/// Coerce a raw value into a series slot.
///
/// Returns `None` when the value fails the numeric check, otherwise the slot
/// to store: `Some(None)` for an explicit null, `Some(Some(n))` for a number.
pub fn numeric_slot(value: Option<&Value>) -> Option<Option<f64>> {
    match value? {
        Value::Null => Some(None),
        other => to_number(other).map(Some),
    }
}

/// Whether a raw value passes the numeric check.
pub fn is_valid_number(value: Option<&Value>) -> bool {
    numeric_slot(value).is_some()
}

/// Slot for a raw value, falling back to `default_value` when invalid.
pub fn slot_or(value: Option<&Value>, default_value: Option<f64>) -> Option<f64> {
    numeric_slot(value).unwrap_or(default_value)
}

/// Numeric coercion of a present value; `None` stands for NaN.
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number_text(s),
        // Arrays coerce through their string form
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [single] => match single {
                Value::Null => Some(0.0),
                Value::Bool(_) | Value::Object(_) => None,
                other => to_number(other),
            },
            _ => None,
        },
        Value::Object(_) => None,
    }
}

/// Parse numeric text: surrounding whitespace ignored, empty text is zero.
fn parse_number_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // f64::from_str also accepts "inf" and "nan" spellings, which are not numbers here
    let decimal_only = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal_only {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
