//! # coerce-core
//!
//! Declarative validation and coercion of single values.
//!
//! A [`Coerce`] chain is built by appending rules. [`Coerce::parse`] threads
//! the raw input through the rules in order: coercing rules replace the
//! working value, checking rules accept or reject it, and the first rejection
//! ends the chain with a [`ValidationFailure`].
//!
//! ## Example
//!
//! ```rust
//! use coerce_core::{Coerce, Value};
//!
//! let email = Coerce::named("email").email().lowercase();
//! assert_eq!(
//!     email.parse("Test@Example.com").unwrap(),
//!     Value::from("test@example.com")
//! );
//!
//! let err = Coerce::named("age").integer().min(18).parse("17").unwrap_err();
//! assert_eq!(err.rule, "min");
//! assert_eq!(err.field.as_deref(), Some("age"));
//! ```
//!
//! ## Rules
//!
//! | builder | effect |
//! |---------|--------|
//! | `integer`, `float` | coerce to a number |
//! | `numeric` | require something number-like |
//! | `boolean` | accept `true`/`false`, `1`/`0`, `"True"`/`"False"` |
//! | `string` | render as text; raw input must be text |
//! | `strict` | working value must still equal the raw input |
//! | `list`, `dictionary`, `required_keys` | container shape |
//! | `min` (exclusive), `max` (inclusive) | numeric bounds |
//! | `length`, `min_length`, `max_length` | size bounds |
//! | `contains`, `email`, `lowercase` | content checks |
//! | `date`, `datetime`, `date_with_format` | temporal probes and coercion |

mod chain;
mod error;
mod rules;
mod value;


pub use chain::Coerce;
pub use error::{
    CoerceError, ErrorReport, Result, ValidationFailure, INITIALIZING, UNNAMED_FIELD,
};
pub use rules::{
    to_float, to_integer, DateFormat, LengthBounds, Outcome, Rule, RuleKind, UnknownDateFormat,
};
pub use value::Value;

/// Prelude module for chain building
pub mod prelude {
    pub use crate::chain::Coerce;
    pub use crate::error::{CoerceError, ErrorReport, ValidationFailure};
    pub use crate::rules::{DateFormat, Rule, RuleKind};
    pub use crate::value::Value;
}
