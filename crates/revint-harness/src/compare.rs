//! Output normalization for judging

use serde_json::Value;

enum Normalized {
    Json(Value),
    Text(String),
}

impl Normalized {
    fn render(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// `-?\d+(\.\d+)?`
fn is_plain_number(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

fn normalize(raw: &str) -> Normalized {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') || trimmed.starts_with('{') || is_plain_number(trimmed) {
        if let Ok(value) = serde_json::from_str(trimmed) {
            return Normalized::Json(value);
        }
    }
    Normalized::Text(trimmed.to_string())
}

/// Compare two JSON values, numbers by value at any depth.
fn values_equal(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => e.as_f64() == a.as_f64(),
        (Value::Array(e), Value::Array(a)) => {
            e.len() == a.len() && e.iter().zip(a).all(|(e, a)| values_equal(e, a))
        }
        (Value::Object(e), Value::Object(a)) => {
            e.len() == a.len()
                && e.iter().all(|(key, e)| a.get(key).is_some_and(|a| values_equal(e, a)))
        }
        (e, a) => e == a,
    }
}

/// Compare an expected output with what the solution printed.
///
/// Both sides are trimmed. Numbers, arrays and objects are compared as JSON
/// values, with numbers compared by value at any depth (`[21]` equals
/// `[21.0]`); anything else is compared as text. Object keys are matched
/// by name, so key order does not matter.
#[must_use]
pub fn outputs_equal(expected: &str, actual: &str) -> bool {
    match (normalize(expected), normalize(actual)) {
        (Normalized::Json(e), Normalized::Json(a)) => values_equal(&e, &a),
        (e, a) => e.render() == a.render(),
    }
}
