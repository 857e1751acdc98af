use serde_json::Value;

/// Render a JSON value as trimmed text.
///
/// Strings are trimmed, `null` becomes empty, everything else uses its JSON
/// representation.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

/// Interpret a JSON value as an integer year, if it plausibly is one.
///
/// Accepts integers, finite floats (truncated toward zero), booleans and
/// strings holding an integer. Anything else yields `None`.
pub fn coerce_year(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}
