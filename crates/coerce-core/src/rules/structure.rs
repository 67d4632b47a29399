//! Container shape checks.

use crate::value::Value;

pub(super) fn is_list(value: &Value) -> bool {
    matches!(value, Value::List(_))
}

/// A mapping in which no required key is missing or null.
pub(super) fn has_keys(value: &Value, keys: &[String]) -> bool {
    match value {
        Value::Dict(map) => keys
            .iter()
            .all(|key| map.get(key).is_some_and(|item| !item.is_null())),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn list_requires_a_sequence() {
        assert!(is_list(&Value::from(vec![1, 2, 3])));
        assert!(!is_list(&Value::from("not_a_list")));
    }

    #[test]
    fn dict_without_required_keys() {
        let dict: Value = [("key", Value::from("value")), ("number", Value::from(42))]
            .into_iter()
            .collect();
        assert!(has_keys(&dict, &[]));
        assert!(!has_keys(&Value::from("not_a_dict"), &[]));
    }

    #[test]
    fn required_keys_present() {
        let dict: Value = [("name", Value::from("John")), ("age", Value::from(30))]
            .into_iter()
            .collect();
        assert!(has_keys(&dict, &keys(&["name", "age"])));
    }

    #[test]
    fn required_key_missing_or_null() {
        let dict: Value = [("name", Value::from("Alice"))].into_iter().collect();
        assert!(!has_keys(&dict, &keys(&["name", "age"])));

        let dict: Value = [("name", Value::from("Alice")), ("age", Value::Null)]
            .into_iter()
            .collect();
        assert!(!has_keys(&dict, &keys(&["name", "age"])));
    }
}
