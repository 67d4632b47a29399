//! Non-coercing constraint checks.

use super::coercion::{is_numeric, to_float};
use crate::value::Value;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap())
}

/// Both sides must look numeric; compared as floats.
fn numeric_pair(value: &Value, bound: &Value) -> Option<(f64, f64)> {
    if !is_numeric(value) {
        return None;
    }
    Some((to_float(value)?, to_float(bound)?))
}

/// `value > bound`, strictly.
pub(super) fn above(value: &Value, bound: &Value) -> bool {
    numeric_pair(value, bound).is_some_and(|(v, b)| v > b)
}

/// `value <= bound`.
pub(super) fn at_most(value: &Value, bound: &Value) -> bool {
    numeric_pair(value, bound).is_some_and(|(v, b)| v <= b)
}

pub(super) fn length_within(value: &Value, min: usize, max: usize) -> bool {
    value.len().is_some_and(|len| min <= len && len <= max)
}

pub(super) fn contains(haystack: &Value, element: &Value) -> bool {
    match (haystack, element) {
        (Value::List(items), element) => items.iter().any(|item| item.equivalent(element)),
        (Value::Str(text), Value::Str(needle)) => text.contains(needle.as_str()),
        (Value::Dict(map), Value::Str(key)) => map.contains_key(key),
        _ => false,
    }
}

pub(super) fn is_email(value: &Value) -> bool {
    value.as_str().is_some_and(|s| email_regex().is_match(s))
}
