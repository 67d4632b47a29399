//! Typed records backed by a schema.

use crate::record::Record;
use crate::schema::RecordSchema;
use coerce_core::{Result, Value};

/// A Rust type whose instances are built from validated keyword data.
///
/// The schema is declared once per type, usually cached in a
/// [`std::sync::OnceLock`].
///
/// ## Example
///
/// ```rust
/// use coerce_core::{Coerce, Result, Value};
/// use coerce_record::{Declarative, Record, RecordSchema};
/// use std::sync::OnceLock;
///
/// struct Person {
///     name: String,
///     age: i64,
/// }
///
/// impl Declarative for Person {
///     fn schema() -> &'static RecordSchema {
///         static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             RecordSchema::builder("Person")
///                 .field("name", Coerce::new().string().length((3, 10)))
///                 .field("age", Coerce::new().integer().min(17).max(30))
///                 .build()
///                 .expect("valid schema")
///         })
///     }
///
///     fn from_record(record: Record) -> Result<Self> {
///         Ok(Self {
///             name: record.field("name")?,
///             age: record.field("age")?,
///         })
///     }
/// }
///
/// let person = Person::construct([("name", Value::from("luiza")), ("age", Value::from("20"))])
///     .unwrap();
/// assert_eq!(person.name, "luiza");
/// assert_eq!(person.age, 20);
/// ```
pub trait Declarative: Sized {
    /// The schema shared by every instance of this type.
    fn schema() -> &'static RecordSchema;

    /// Map a validated record onto the concrete type.
    fn from_record(record: Record) -> Result<Self>;

    /// Validate keyword data and build an instance.
    fn construct<I, K, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::from_record(Self::schema().construct(values)?)
    }

    /// Validate a JSON object and build an instance.
    fn from_json(json: serde_json::Value) -> Result<Self> {
        Self::from_record(Self::schema().construct_json(json)?)
    }
}
