//! Type-coercing rules.

use super::Outcome;
use crate::value::Value;

/// Coerce a value to an integer.
///
/// Accepts integers, booleans, finite floats (truncated toward zero) and
/// text holding an integer literal.
pub fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Float(x) => {
            let truncated = x.trunc();
            // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
            if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64
            {
                Some(truncated as i64)
            } else {
                None
            }
        }
        Value::Str(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a value to a float.
pub fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Float(x) => Some(*x),
        Value::Int(i) => Some(*i as f64),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Str(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Loose probe: would either numeric coercion succeed?
pub(crate) fn is_numeric(value: &Value) -> bool {
    to_integer(value).is_some() || to_float(value).is_some()
}

pub(super) fn integer(current: &Value) -> Outcome {
    match to_integer(current) {
        Some(i) => Outcome::Coerced(Value::Int(i)),
        None => Outcome::Fail,
    }
}

pub(super) fn float(current: &Value) -> Outcome {
    match to_float(current) {
        Some(x) => Outcome::Coerced(Value::Float(x)),
        None => Outcome::Fail,
    }
}

pub(super) fn boolean(current: &Value) -> Outcome {
    match current {
        Value::Null => Outcome::Fail,
        Value::Bool(_) => Outcome::Pass,
        Value::Str(s) if s == "True" => Outcome::Coerced(Value::Bool(true)),
        Value::Str(s) if s == "False" => Outcome::Coerced(Value::Bool(false)),
        other => match other.as_f64() {
            Some(x) if x == 1.0 => Outcome::Coerced(Value::Bool(true)),
            Some(x) if x == 0.0 => Outcome::Coerced(Value::Bool(false)),
            _ => Outcome::Fail,
        },
    }
}

/// Renders the working value as text. Passes only when the original input
/// was already text, whatever the working value is by now.
pub(super) fn string(current: &Value, raw: &Value) -> Outcome {
    if raw.is_str() {
        Outcome::Coerced(Value::Str(current.to_string()))
    } else {
        Outcome::Fail
    }
}

pub(super) fn lowercase(current: &Value) -> Outcome {
    match current {
        Value::Str(s) => Outcome::Coerced(Value::Str(s.to_lowercase())),
        _ => Outcome::Fail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_accepts_numeric_text() {
        assert_eq!(integer(&Value::from("42")), Outcome::Coerced(Value::Int(42)));
        assert_eq!(integer(&Value::from(" -7 ")), Outcome::Coerced(Value::Int(-7)));
        assert_eq!(integer(&Value::from(42)), Outcome::Coerced(Value::Int(42)));
    }

    #[test]
    fn integer_truncates_floats() {
        assert_eq!(integer(&Value::from(3.14)), Outcome::Coerced(Value::Int(3)));
        assert_eq!(integer(&Value::from(-3.9)), Outcome::Coerced(Value::Int(-3)));
        assert!(integer(&Value::from(f64::NAN)).is_fail());
        assert!(integer(&Value::from(f64::INFINITY)).is_fail());
    }

    #[test]
    fn integer_rejects_non_numeric() {
        assert!(integer(&Value::from("not_an_integer")).is_fail());
        assert!(integer(&Value::from("3.14")).is_fail());
        assert!(integer(&Value::Null).is_fail());
        assert!(integer(&Value::from(vec![1])).is_fail());
    }

    #[test]
    fn float_accepts_numeric_text() {
        assert_eq!(float(&Value::from("3.14")), Outcome::Coerced(Value::Float(3.14)));
        assert_eq!(float(&Value::from("1e3")), Outcome::Coerced(Value::Float(1000.0)));
        assert_eq!(float(&Value::from(2)), Outcome::Coerced(Value::Float(2.0)));
        assert!(float(&Value::from("not_a_float")).is_fail());
    }

    #[test]
    fn numeric_probe_accepts_either_representation() {
        assert!(is_numeric(&Value::from("3")));
        assert!(is_numeric(&Value::from("3.14")));
        assert!(is_numeric(&Value::from(3.14)));
        assert!(!is_numeric(&Value::from("not_a_numeric_value")));
        assert!(!is_numeric(&Value::Null));
    }

    #[test]
    fn boolean_literals_and_numbers() {
        assert_eq!(boolean(&Value::from(true)), Outcome::Pass);
        assert_eq!(boolean(&Value::from(1)), Outcome::Coerced(Value::Bool(true)));
        assert_eq!(boolean(&Value::from(0)), Outcome::Coerced(Value::Bool(false)));
        assert_eq!(boolean(&Value::from("True")), Outcome::Coerced(Value::Bool(true)));
        assert_eq!(boolean(&Value::from("False")), Outcome::Coerced(Value::Bool(false)));
    }

    #[test]
    fn boolean_rejects_other_values() {
        assert!(boolean(&Value::from("true")).is_fail());
        assert!(boolean(&Value::from("not_a_boolean")).is_fail());
        assert!(boolean(&Value::from(2)).is_fail());
        assert!(boolean(&Value::Null).is_fail());
    }

    #[test]
    fn string_passes_only_for_text_input() {
        let raw = Value::from("Hello, World!");
        assert_eq!(string(&raw, &raw), Outcome::Coerced(raw.clone()));

        let raw = Value::from(42);
        assert!(string(&raw, &raw).is_fail());
    }

    #[test]
    fn string_renders_coerced_working_value() {
        assert_eq!(
            string(&Value::from(42), &Value::from("42")),
            Outcome::Coerced(Value::from("42"))
        );
    }

    #[test]
    fn lowercase_text_only() {
        assert_eq!(
            lowercase(&Value::from("Test@Example.com")),
            Outcome::Coerced(Value::from("test@example.com"))
        );
        assert!(lowercase(&Value::from(5)).is_fail());
    }
}
