//! Record schemas: named, ordered collections of field chains.

use crate::record::Record;
use coerce_core::{Coerce, CoerceError, Result, ValidationFailure, Value};
use std::collections::HashSet;

/// The validated shape of one record type.
///
/// Built once per record type through [`RecordSchema::builder`], then reused
/// for every construction.
///
/// ## Example
///
/// ```rust
/// use coerce_core::{Coerce, Value};
/// use coerce_record::RecordSchema;
///
/// let schema = RecordSchema::builder("Person")
///     .field("name", Coerce::new().string().length((3, 10)))
///     .field("age", Coerce::new().integer().min(17).max(30))
///     .build()
///     .unwrap();
///
/// let person = schema
///     .construct([("name", Value::from("luiza")), ("age", Value::from(20))])
///     .unwrap();
/// assert_eq!(person.get("age"), Some(&Value::Int(20)));
/// ```
#[derive(Debug, Clone)]
pub struct RecordSchema {
    name: String,
    fields: Vec<(String, Coerce)>,
}

impl RecordSchema {
    /// Start declaring a record type.
    pub fn builder(name: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// The chain declared for `field`.
    pub fn chain(&self, field: &str) -> Option<&Coerce> {
        self.position(field).map(|index| &self.fields[index].1)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|(name, _)| name == field)
    }

    fn parse_field(&self, index: usize, raw: Value) -> Result<Value> {
        let (name, chain) = &self.fields[index];
        // Failures name the declared field, not the chain's own label
        chain
            .parse(raw)
            .map_err(|failure| CoerceError::from(failure.field(name.as_str())))
    }

    /// Validate keyword data and build a record.
    ///
    /// Every supplied field must be declared. Declared fields that are not
    /// supplied are parsed from [`Value::Null`], so their chains decide
    /// whether absence is acceptable. The first failure aborts construction.
    pub fn construct<I, K, V>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut parsed: Vec<Option<Value>> = vec![None; self.fields.len()];

        for (field, raw) in values {
            let field = field.into();
            let index = self
                .position(&field)
                .ok_or_else(|| CoerceError::UnregisteredField {
                    record: self.name.clone(),
                    field: field.clone(),
                })?;
            parsed[index] = Some(self.parse_field(index, raw.into())?);
        }

        let mut fields = Vec::with_capacity(self.fields.len());
        for (index, slot) in parsed.into_iter().enumerate() {
            let value = match slot {
                Some(value) => value,
                None => self.parse_field(index, Value::Null)?,
            };
            fields.push((self.fields[index].0.clone(), value));
        }

        tracing::debug!(record = %self.name, fields = fields.len(), "record constructed");
        Ok(Record::new(self.name.clone(), fields))
    }

    /// Validate a JSON object and build a record.
    pub fn construct_json(&self, json: serde_json::Value) -> Result<Record> {
        match json {
            serde_json::Value::Object(map) => {
                self.construct(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
            other => Err(ValidationFailure::new(format!(
                "Expected a JSON object to construct `{}`, got {other}",
                self.name
            ))
            .into()),
        }
    }
}

/// Builder for [`RecordSchema`].
#[derive(Debug)]
pub struct RecordSchemaBuilder {
    name: String,
    fields: Vec<(String, Coerce)>,
}

impl RecordSchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field and the chain that validates it.
    pub fn field(mut self, name: impl Into<String>, chain: Coerce) -> Self {
        self.fields.push((name.into(), chain));
        self
    }

    /// Finish the schema. Declaring a field twice is an error.
    pub fn build(self) -> Result<RecordSchema> {
        let mut seen = HashSet::new();
        for (field, _) in &self.fields {
            if !seen.insert(field.as_str()) {
                return Err(CoerceError::DuplicateField {
                    record: self.name.clone(),
                    field: field.clone(),
                });
            }
        }

        Ok(RecordSchema {
            name: self.name,
            fields: self.fields,
        })
    }
}
