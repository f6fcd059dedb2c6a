//! Scalar coercion for leaf tokens.

use crate::types::Value;
use std::num::IntErrorKind;

/// Turn a value token into the narrowest scalar it represents.
///
/// Order: integer → float → string.
///
/// - Integer-shaped text (optional sign, ASCII digits) is parsed as `i64`.
///   If it overflows, the original text is kept as a string rather than
///   being rounded through `f64`.
/// - Floats accept exponents (`1e3` → `1000.0`). Non-finite spellings such
///   as `nan` or `inf` stay strings.
/// - Anything else (`infantry`, `1936.1.1`, `"quoted`) is a string.
pub fn parse_scalar(token: &str) -> Value {
    match token.parse::<i64>() {
        Ok(n) => return Value::Integer(n),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Value::String(token.to_string());
        }
        Err(_) => {}
    }

    if let Ok(f) = token.parse::<f64>() {
        if f.is_finite() {
            return Value::Float(f);
        }
    }

    Value::String(token.to_string())
}
