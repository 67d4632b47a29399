//! Rules applied by a validation chain.
//!
//! Every rule is a pure function of the working value (and, for a few kinds,
//! the original raw input). A rule either passes, passes and replaces the
//! working value, or fails.

mod coercion;
mod constraint;
mod structure;
mod temporal;

pub use coercion::{to_float, to_integer};
pub use temporal::{DateFormat, UnknownDateFormat};

use crate::value::Value;
use std::fmt;

/// Result of applying one rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value is valid and unchanged
    Pass,
    /// The value is valid and replaced by the contained value
    Coerced(Value),
    /// The value is invalid
    Fail,
}

impl Outcome {
    fn check(ok: bool) -> Self {
        if ok {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail)
    }
}

/// Inclusive length bounds for [`RuleKind::Length`].
///
/// Built from a single maximum (`5` means `0..=5`) or a `(min, max)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    /// Bounds no length satisfies.
    const EMPTY: LengthBounds = LengthBounds { min: 1, max: 0 };

    /// Negative minimums clamp to zero; a negative maximum admits nothing.
    fn from_signed(min: i32, max: i32) -> Self {
        match usize::try_from(max) {
            Ok(max) => Self::new(usize::try_from(min).unwrap_or(0), max),
            Err(_) => Self::EMPTY,
        }
    }
}

impl From<usize> for LengthBounds {
    fn from(max: usize) -> Self {
        Self::new(0, max)
    }
}

impl From<i32> for LengthBounds {
    fn from(max: i32) -> Self {
        Self::from_signed(0, max)
    }
}

impl From<(usize, usize)> for LengthBounds {
    fn from((min, max): (usize, usize)) -> Self {
        Self::new(min, max)
    }
}

impl From<(i32, i32)> for LengthBounds {
    fn from((min, max): (i32, i32)) -> Self {
        Self::from_signed(min, max)
    }
}

/// The closed set of rule kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    Integer,
    Float,
    Numeric,
    Boolean,
    String,
    Strict,
    List,
    Dictionary { required_keys: Vec<String> },
    RequiredKeys(Vec<String>),
    /// Strictly greater than the bound
    Min(Value),
    /// Less than or equal to the bound
    Max(Value),
    MinLength(usize),
    MaxLength(usize),
    Length(LengthBounds),
    Contains(Value),
    Email,
    Lowercase,
    Date,
    DateTime,
    /// Format alias, resolved when the rule runs
    DateWithFormat(String),
}

impl RuleKind {
    /// Rule name used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Integer => "integer",
            RuleKind::Float => "float",
            RuleKind::Numeric => "numeric",
            RuleKind::Boolean => "boolean",
            RuleKind::String => "string",
            RuleKind::Strict => "strict",
            RuleKind::List => "list",
            RuleKind::Dictionary { .. } => "dictionary",
            RuleKind::RequiredKeys(_) => "required_keys",
            RuleKind::Min(_) => "min",
            RuleKind::Max(_) => "max",
            RuleKind::MinLength(_) => "min_length",
            RuleKind::MaxLength(_) => "max_length",
            RuleKind::Length(_) => "length",
            RuleKind::Contains(_) => "contains",
            RuleKind::Email => "email",
            RuleKind::Lowercase => "lowercase",
            RuleKind::Date => "date",
            RuleKind::DateTime => "datetime",
            RuleKind::DateWithFormat(_) => "date_with_format",
        }
    }

    /// Apply the rule to the working value.
    ///
    /// `raw` is the input originally handed to the chain; only `string`
    /// and `strict` look at it.
    pub fn apply(&self, current: &Value, raw: &Value) -> Outcome {
        match self {
            RuleKind::Integer => coercion::integer(current),
            RuleKind::Float => coercion::float(current),
            RuleKind::Numeric => Outcome::check(coercion::is_numeric(current)),
            RuleKind::Boolean => coercion::boolean(current),
            RuleKind::String => coercion::string(current, raw),
            RuleKind::Lowercase => coercion::lowercase(current),
            RuleKind::Strict => Outcome::check(current.equivalent(raw)),
            RuleKind::Min(bound) => Outcome::check(constraint::above(current, bound)),
            RuleKind::Max(bound) => Outcome::check(constraint::at_most(current, bound)),
            RuleKind::MinLength(min) => {
                Outcome::check(constraint::length_within(current, *min, usize::MAX))
            }
            RuleKind::MaxLength(max) => {
                Outcome::check(constraint::length_within(current, 0, *max))
            }
            RuleKind::Length(bounds) => {
                Outcome::check(constraint::length_within(current, bounds.min, bounds.max))
            }
            RuleKind::Contains(element) => Outcome::check(constraint::contains(current, element)),
            RuleKind::Email => Outcome::check(constraint::is_email(current)),
            RuleKind::List => Outcome::check(structure::is_list(current)),
            RuleKind::Dictionary { required_keys } => {
                Outcome::check(structure::has_keys(current, required_keys))
            }
            RuleKind::RequiredKeys(keys) => Outcome::check(structure::has_keys(current, keys)),
            RuleKind::Date => Outcome::check(temporal::is_date(current)),
            RuleKind::DateTime => Outcome::check(temporal::is_datetime(current)),
            RuleKind::DateWithFormat(alias) => temporal::with_format(current, alias),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One configured step of a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// What the rule checks or coerces
    pub kind: RuleKind,
    /// Custom error message, overriding the chain's messages
    pub message: Option<String>,
}

impl Rule {
    /// Create a rule with no custom message.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn apply(&self, current: &Value, raw: &Value) -> Outcome {
        self.kind.apply(current, raw)
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        Rule::new(kind)
    }
}
