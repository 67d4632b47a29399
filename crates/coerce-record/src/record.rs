//! Validated record instances.

use coerce_core::{CoerceError, Result, ValidationFailure, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A fully validated record: one parsed value per declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    pub(crate) fn new(type_name: String, fields: Vec<(String, Value)>) -> Self {
        Self { type_name, fields }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Parsed value of `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Parsed value of `field`, converted to a concrete type.
    ///
    /// Asking for an undeclared field is an [`CoerceError::UnregisteredField`];
    /// a value of another type is a validation failure.
    pub fn field<T: TryFrom<Value>>(&self, field: &str) -> Result<T> {
        let value = self
            .get(field)
            .cloned()
            .ok_or_else(|| CoerceError::UnregisteredField {
                record: self.type_name.clone(),
                field: field.to_string(),
            })?;

        let type_name = value.type_name();
        T::try_from(value).map_err(|_| {
            ValidationFailure::new(format!(
                "Field `{field}` of `{}` holds a {type_name} value",
                self.type_name
            ))
            .field(field)
            .into()
        })
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Dictionary projection of all fields.
    pub fn to_dict(&self) -> BTreeMap<String, Value> {
        self.fields.iter().cloned().collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), serde_json::Value::from(value)))
                .collect(),
        )
    }

    pub fn into_fields(self) -> Vec<(String, Value)> {
        self.fields
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}(", self.type_name)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::Str(text) => write!(f, "{name}='{text}'")?,
                other => write!(f, "{name}={other}")?,
            }
        }
        f.write_str(")>")
    }
}
