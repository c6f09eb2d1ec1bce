//! Scalar value helpers shared by the engine components.

use serde_json::Value;

/// JS-style truthiness: null, `false`, numeric zero, the empty string and
/// empty collections are falsy, everything else (including `"0"`) is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// String coercion for URL slugs, query values and attribute values: strings
/// pass through unquoted, other scalars render as their JSON literal.
pub(crate) fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
