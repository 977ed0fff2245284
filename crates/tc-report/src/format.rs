//! Value formatting for report fields.

use serde_json::Value;
use tc_core::round2;

/// Integral numbers print without decimals, others with exactly two.
///
/// Halves round away from zero, so 0.125 prints "0.13".
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.0}")
    } else if v.is_finite() {
        format!("{:.2}", round2(v))
    } else {
        v.to_string()
    }
}

/// Report text for a serialized value; `None` for values with nothing to
/// print (null or empty string).
pub fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.to_string()),
            None => n.as_f64().map(format_number),
        },
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
