//! # coerce-record
//!
//! Declarative records whose fields are validation chains.
//!
//! A [`RecordSchema`] maps field names to [`coerce_core::Coerce`] chains.
//! Constructing a record from keyword data routes every value through its
//! chain; the result is either a fully validated [`Record`] or the first
//! error. Fields that were never declared are rejected with
//! [`coerce_core::CoerceError::UnregisteredField`].
//!
//! Types that want typed attribute access implement [`Declarative`].

mod declarative;
mod record;
mod schema;

pub use declarative::Declarative;
pub use record::Record;
pub use schema::{RecordSchema, RecordSchemaBuilder};
