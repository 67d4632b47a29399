//! # coerce-rs
//!
//! Declarative validation and coercion for stringly-typed input.
//!
//! Describe each field as a chain of rules, then parse raw values through
//! it. Coercing rules (`integer`, `float`, `lowercase`, ...) replace the
//! working value; checking rules (`min`, `email`, `length`, ...) accept or
//! reject it. The first rejection stops the chain.
//!
//! ## Quick Start
//!
//! ```rust
//! use coerce_rs::prelude::*;
//!
//! let age = Coerce::named("age").numeric().integer().max(10).min(1);
//! assert_eq!(age.parse(3.14).unwrap(), Value::Int(3));
//!
//! let person = RecordSchema::builder("Person")
//!     .field("name", Coerce::new().string().length((3, 10)))
//!     .field("age", Coerce::new().integer().min(18).max(30))
//!     .build()
//!     .unwrap();
//!
//! let err = person
//!     .construct([("name", Value::from("luiza")), ("age", Value::from(17))])
//!     .unwrap_err();
//! assert_eq!(err.validation().unwrap().field.as_deref(), Some("age"));
//! ```
//!
//! ## Optional Features
//!
//! - `record` (default) - declarative records via `coerce-record`

// Re-export core functionality
pub use coerce_core::*;

// Re-export records (feature-gated)
#[cfg(feature = "record")]
pub use coerce_record::{Declarative, Record, RecordSchema, RecordSchemaBuilder};

// Re-exports for user convenience
pub use chrono;
pub use serde_json;

/// Prelude module - import everything needed to declare chains and records
pub mod prelude {
    pub use coerce_core::prelude::*;
    pub use coerce_core::Result;

    #[cfg(feature = "record")]
    pub use coerce_record::{Declarative, Record, RecordSchema};
}
